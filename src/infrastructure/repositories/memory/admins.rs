// src/infrastructure/repositories/memory/admins.rs
use crate::domain::admin::{AdminAccount, AdminRepository, Username};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Fixed set of admin accounts loaded at startup.
#[derive(Default)]
pub struct InMemoryAdminRepository {
    accounts: HashMap<Username, AdminAccount>,
}

impl InMemoryAdminRepository {
    pub fn new(accounts: impl IntoIterator<Item = AdminAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.username.clone(), account))
                .collect(),
        }
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<AdminAccount>> {
        Ok(self.accounts.get(username).cloned())
    }
}
