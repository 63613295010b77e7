// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, VersionNumber};
use crate::domain::article::version::{ArticleVersion, NewVersion};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Drops a catalog entry. Ids are never handed out again.
    async fn remove(&self, id: ArticleId) -> DomainResult<()>;
}

/// Append-only log of article versions.
#[async_trait]
pub trait ArticleVersionRepository: Send + Sync {
    /// Highest-numbered version, or `DomainError::NotFound` when the article has none.
    async fn latest(&self, article_id: ArticleId) -> DomainResult<ArticleVersion>;

    /// Append unconditionally; the new number is `latest + 1` (or 1 for an empty log).
    async fn append(&self, version: NewVersion) -> DomainResult<ArticleVersion>;

    /// Append only if `expected` is still the latest number. Otherwise the log is left untouched
    /// and `DomainError::StaleVersion` names the current identifier. The comparison and the
    /// append happen under the same per-article lock.
    async fn append_if_latest(
        &self,
        expected: VersionNumber,
        version: NewVersion,
    ) -> DomainResult<ArticleVersion>;

    /// Newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleVersion>>;
}
