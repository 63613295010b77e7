// src/domain/permission/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::permission::state::PermissionState;
use chrono::{DateTime, Utc};

/// One entry of an article's permission audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRecord {
    /// Global creation order across all articles.
    pub id: u64,
    pub article_id: ArticleId,
    pub state: PermissionState,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
