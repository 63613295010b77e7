use super::PermissionQueryService;
use crate::{
    application::{
        commands::admin::Credentials,
        dto::PermissionRecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

/// The id is parsed only after the credentials pass.
pub struct ListPermissionHistoryQuery {
    pub article_id: String,
}

impl PermissionQueryService {
    /// Full audit trail of the article's permission changes, oldest first. Admin only.
    pub async fn list_history(
        &self,
        credentials: &Credentials,
        query: ListPermissionHistoryQuery,
    ) -> ApplicationResult<Vec<PermissionRecordDto>> {
        self.authenticator.require(credentials).await?;

        let article_id = ArticleId::parse(&query.article_id)?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let records = self.permission_repo.history(article_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
