use crate::application::error::ApplicationResult;
use crate::domain::article::{Article, ArticleVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    /// Identifier of the current version.
    pub identifier: String,
}

impl ArticleDto {
    pub fn new(article: Article, latest: &ArticleVersion) -> ApplicationResult<Self> {
        Ok(Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            created_at: article.created_at,
            identifier: latest.identifier()?.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleVersionDto {
    pub article_id: i64,
    pub version: u64,
    pub identifier: String,
    pub content_location: String,
    pub recorded_at: DateTime<Utc>,
}

impl TryFrom<ArticleVersion> for ArticleVersionDto {
    type Error = crate::application::error::ApplicationError;

    fn try_from(version: ArticleVersion) -> Result<Self, Self::Error> {
        let identifier = version.identifier()?.to_string();
        Ok(Self {
            article_id: version.article_id.into(),
            version: version.number.get(),
            identifier,
            content_location: version.content.into_inner(),
            recorded_at: version.recorded_at,
        })
    }
}

/// Answer to "what is the current version": the token to edit against and where its content is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LatestVersionDto {
    pub identifier: String,
    pub content_location: String,
    pub version: u64,
    pub recorded_at: DateTime<Utc>,
}

impl TryFrom<ArticleVersion> for LatestVersionDto {
    type Error = crate::application::error::ApplicationError;

    fn try_from(version: ArticleVersion) -> Result<Self, Self::Error> {
        let identifier = version.identifier()?.to_string();
        Ok(Self {
            identifier,
            content_location: version.content.into_inner(),
            version: version.number.get(),
            recorded_at: version.recorded_at,
        })
    }
}

/// Rendered article page: the current HTML plus the identifier to submit edits against.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleContentDto {
    pub identifier: String,
    pub title: String,
    pub html: String,
}
