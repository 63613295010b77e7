// src/application/ports/content.rs
use crate::application::ApplicationResult;
use crate::domain::article::ContentLocation;
use async_trait::async_trait;

/// Storage for version payloads. Writes happen outside any store lock, so an entry may be
/// orphaned when the metadata append that would reference it is rejected; `discard` cleans up.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn put(&self, name: &str, content: &str) -> ApplicationResult<ContentLocation>;
    async fn get(&self, location: &ContentLocation) -> ApplicationResult<String>;
    async fn discard(&self, location: &ContentLocation) -> ApplicationResult<()>;
}
