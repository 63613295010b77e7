// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use chrono::{DateTime, Utc};

/// Catalog entry of an article. Content lives in the version log, not here.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub created_at: DateTime<Utc>,
}

/// Registration request for the catalog; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub created_at: DateTime<Utc>,
}
