// src/application/commands/permissions/change.rs
use super::PermissionCommandService;
use crate::{
    application::{
        commands::admin::Credentials,
        dto::PermissionRecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, permission::PermissionState},
};

/// Raw inputs as received from the caller; nothing here has been validated yet.
pub struct ChangePermissionCommand {
    pub article_id: String,
    pub state: String,
}

impl PermissionCommandService {
    /// Fails closed: every rejection happens before the permission store is touched.
    pub async fn change_permission(
        &self,
        credentials: &Credentials,
        command: ChangePermissionCommand,
    ) -> ApplicationResult<PermissionRecordDto> {
        self.authenticator.require(credentials).await?;

        let article_id = ArticleId::parse(&command.article_id)?;
        let state = PermissionState::parse_code(&command.state)?;

        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "unknown article: {article_id}"
            )));
        }

        let record = {
            let _guard = self.locks.acquire(article_id).await?;
            self.permission_repo
                .transition(article_id, state, self.clock.now())
                .await?
        };

        tracing::info!(
            article_id = %article_id,
            state = %state,
            by = %credentials.username,
            "article edit permission changed"
        );
        Ok(record.into())
    }
}
