use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of an accepted edit request. Stale, malformed or otherwise refused requests are
/// reported as `ApplicationError`s instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EditOutcomeDto {
    /// The edit became the new current version.
    Applied {
        article_id: i64,
        version: u64,
        identifier: String,
        content_location: String,
    },
    /// The edit was handed to the edit queue and has not been applied yet.
    Queued {
        article_id: i64,
        ticket: u64,
        message: String,
    },
    /// The article does not accept edits right now.
    Locked { article_id: i64, message: String },
}
