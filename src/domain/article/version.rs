// src/domain/article/version.rs
use crate::domain::article::identifier::{EncodingError, VersionIdentifier};
use crate::domain::article::value_objects::{ArticleId, ContentLocation, VersionNumber};
use chrono::{DateTime, Utc};

/// One immutable entry of an article's version log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleVersion {
    pub article_id: ArticleId,
    pub number: VersionNumber,
    pub content: ContentLocation,
    pub recorded_at: DateTime<Utc>,
}

impl ArticleVersion {
    pub fn identifier(&self) -> Result<VersionIdentifier, EncodingError> {
        VersionIdentifier::new(self.article_id, self.number)
    }
}

/// Payload of an append: everything except the number, which the store assigns.
#[derive(Debug, Clone)]
pub struct NewVersion {
    pub article_id: ArticleId,
    pub content: ContentLocation,
    pub recorded_at: DateTime<Utc>,
}
