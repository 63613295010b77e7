use std::{fmt, sync::Arc};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::security::PasswordHasher,
    },
    domain::admin::{AdminRepository, Username},
};

/// Username/password pair presented by a caller of an administrative operation.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub struct AdminAuthenticator {
    admin_repo: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AdminAuthenticator {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            admin_repo,
            password_hasher,
        }
    }

    /// `Ok(false)` for unknown users and wrong passwords; errors only for infrastructure
    /// failures.
    pub async fn authenticate(&self, credentials: &Credentials) -> ApplicationResult<bool> {
        let Ok(username) = Username::new(credentials.username.as_str()) else {
            return Ok(false);
        };

        let Some(account) = self.admin_repo.find_by_username(&username).await? else {
            tracing::warn!(username = %username, "unknown admin account");
            return Ok(false);
        };

        match self
            .password_hasher
            .verify(&credentials.password, account.password_hash.as_str())
            .await
        {
            Ok(()) => Ok(true),
            Err(ApplicationError::Unauthorized(_)) => {
                tracing::warn!(username = %username, "admin password rejected");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn require(&self, credentials: &Credentials) -> ApplicationResult<()> {
        if self.authenticate(credentials).await? {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized(
                "user is not authorized to access the requested resource",
            ))
        }
    }
}
