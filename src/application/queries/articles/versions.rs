use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleVersionDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleVersionsQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn list_versions(
        &self,
        query: ListArticleVersionsQuery,
    ) -> ApplicationResult<Vec<ArticleVersionDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        self.require_article(article_id).await?;

        let versions = self.version_repo.list_by_article(article_id).await?;
        versions
            .into_iter()
            .map(ArticleVersionDto::try_from)
            .collect()
    }
}
