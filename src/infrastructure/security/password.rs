// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2, Params,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id hasher. Hashing is CPU bound, so both directions run on the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            self.params.clone(),
        )
    }

    /// Synchronous hashing, for use before the runtime is serving requests.
    pub fn hash_blocking(&self, password: &str) -> ApplicationResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn verify_blocking(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let parsed = PasswordHash::new(expected_hash)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
    }
}

async fn run_blocking<T, F>(task: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let hasher = self.clone();
        let password = password.to_owned();
        run_blocking(move || hasher.hash_blocking(&password)).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let hasher = self.clone();
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        run_blocking(move || hasher.verify_blocking(&password, &expected_hash)).await
    }
}
