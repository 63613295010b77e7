// src/domain/admin/repository.rs
use crate::domain::admin::{entity::AdminAccount, value_objects::Username};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<AdminAccount>>;
}
