// tests/support/mocks/security.rs
use article_gate::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};
use async_trait::async_trait;

/// テスト用の管理者資格情報
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// argon2 を使わない高速なハッシャ。ハッシュは `plain$` 接頭辞付きの平文。
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        match expected_hash.strip_prefix("plain$") {
            Some(expected) if expected == password => Ok(()),
            Some(_) => Err(ApplicationError::unauthorized("invalid credentials")),
            None => Err(ApplicationError::infrastructure("unexpected hash format")),
        }
    }
}
