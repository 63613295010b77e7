// src/domain/admin/entity.rs
use crate::domain::admin::value_objects::{PasswordHash, Username};

/// Account allowed to change edit permissions and register articles.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: Username,
    pub password_hash: PasswordHash,
}
