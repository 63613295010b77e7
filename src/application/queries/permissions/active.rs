use super::PermissionQueryService;
use crate::{
    application::{
        dto::PermissionStateDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::DomainError},
};

pub struct GetPermissionQuery {
    pub article_id: i64,
}

impl PermissionQueryService {
    pub async fn get_permission(&self, query: GetPermissionQuery) -> ApplicationResult<PermissionStateDto> {
        let article_id = ArticleId::new(query.article_id)?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        match self.permission_repo.active_state(article_id).await {
            Ok(state) => Ok(PermissionStateDto::new(article_id.into(), state)),
            Err(DomainError::NotFound(_)) => Err(ApplicationError::invalid_state(format!(
                "article {article_id} has no active edit permission"
            ))),
            Err(err) => Err(err.into()),
        }
    }
}
