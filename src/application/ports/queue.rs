// src/application/ports/queue.rs
use crate::application::ApplicationResult;
use crate::domain::article::{ArticleId, ContentLocation, VersionIdentifier};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// An edit accepted while the article is in the queued state. It has not been applied.
#[derive(Debug, Clone)]
pub struct PendingEdit {
    pub article_id: ArticleId,
    pub based_on: VersionIdentifier,
    pub content: ContentLocation,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hand-off point for deferred edits. Draining the queue is somebody else's job.
#[async_trait]
pub trait EditQueue: Send + Sync {
    async fn enqueue(&self, edit: PendingEdit) -> ApplicationResult<TicketId>;
}
