use super::ArticleQueryService;
use crate::{
    application::{dto::LatestVersionDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetLatestVersionQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn get_latest(&self, query: GetLatestVersionQuery) -> ApplicationResult<LatestVersionDto> {
        let article_id = ArticleId::new(query.article_id)?;
        let latest = self.version_repo.latest(article_id).await?;
        tracing::debug!(article_id = %article_id, version = latest.number.get(), "latest version read");
        LatestVersionDto::try_from(latest)
    }
}
