// src/domain/permission/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::permission::entity::PermissionRecord;
use crate::domain::permission::state::PermissionState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// `DomainError::NotFound` when the article has no active record.
    async fn active_state(&self, article_id: ArticleId) -> DomainResult<PermissionState>;

    /// Deactivate every record of the article and append a new active one, atomically with
    /// respect to other transitions and reads of the same article.
    async fn transition(
        &self,
        article_id: ArticleId,
        state: PermissionState,
        at: DateTime<Utc>,
    ) -> DomainResult<PermissionRecord>;

    /// Every record of the article in creation order.
    async fn history(&self, article_id: ArticleId) -> DomainResult<Vec<PermissionRecord>>;
}
