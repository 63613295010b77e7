use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::content::ContentStore,
    },
    domain::article::{Article, ArticleId, ArticleRepository, ArticleVersionRepository},
};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) version_repo: Arc<dyn ArticleVersionRepository>,
    pub(super) content_store: Arc<dyn ContentStore>,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        version_repo: Arc<dyn ArticleVersionRepository>,
        content_store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            article_repo,
            version_repo,
            content_store,
        }
    }

    pub(super) async fn require_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
