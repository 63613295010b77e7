use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Current content of the article, together with the identifier to edit it against.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleContentDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let latest = self.version_repo.latest(article.id).await?;
        let html = self.content_store.get(&latest.content).await?;

        Ok(ArticleContentDto {
            identifier: latest.identifier()?.to_string(),
            title: article.title.into_inner(),
            html,
        })
    }
}
