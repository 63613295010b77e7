// src/application/commands/edits/submit.rs
use super::EditCommandService;
use crate::{
    application::{
        dto::EditOutcomeDto,
        error::{ApplicationError, ApplicationResult},
        ports::queue::PendingEdit,
    },
    domain::{
        article::{ArticleId, ContentLocation, NewVersion, VersionIdentifier},
        errors::DomainError,
        permission::PermissionState,
    },
};

pub struct SubmitEditCommand {
    /// Identifier of the version the edit was made against, as sent by the client.
    pub identifier: String,
    pub content: String,
}

impl EditCommandService {
    pub async fn submit_edit(&self, command: SubmitEditCommand) -> ApplicationResult<EditOutcomeDto> {
        let identifier = VersionIdentifier::parse(&command.identifier)?;
        let article_id = identifier.article_id();

        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let stamp = self.clock.epoch_millis();
        let name = match self.active_state(article_id).await? {
            PermissionState::Locked => return Ok(Self::locked(article_id)),
            PermissionState::Open => {
                format!("{}_{stamp}.html", self.next_identifier(&identifier).await?)
            }
            PermissionState::Queued => format!("queued_{identifier}_{stamp}.html"),
        };

        // Written before the article lock is taken; the state is checked again under it.
        let location = self.content_store.put(&name, &command.content).await?;

        let outcome = self.commit(&identifier, &location).await;
        if !matches!(
            outcome,
            Ok(EditOutcomeDto::Applied { .. } | EditOutcomeDto::Queued { .. })
        ) {
            self.discard_orphan(&location).await;
        }
        outcome
    }

    async fn active_state(&self, article_id: ArticleId) -> ApplicationResult<PermissionState> {
        match self.permission_repo.active_state(article_id).await {
            Ok(state) => Ok(state),
            Err(DomainError::NotFound(_)) => Err(ApplicationError::invalid_state(format!(
                "article {article_id} has no active edit permission; contact the administrator \
                 if this persists"
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Rejects stale edits before any content is written.
    async fn next_identifier(&self, based_on: &VersionIdentifier) -> ApplicationResult<VersionIdentifier> {
        let article_id = based_on.article_id();
        let current = self.version_repo.latest(article_id).await?;
        if current.number != based_on.version() {
            tracing::warn!(
                article_id = %article_id,
                submitted = %based_on,
                latest = current.number.get(),
                "rejected edit against stale version"
            );
            return Err(ApplicationError::StaleVersion {
                current: current.identifier()?,
            });
        }
        Ok(VersionIdentifier::new(article_id, current.number.next()?)?)
    }

    /// Holds the article lock from the state read through the version append or enqueue, so a
    /// permission change either lands before the edit is decided or after it is recorded.
    async fn commit(
        &self,
        based_on: &VersionIdentifier,
        location: &ContentLocation,
    ) -> ApplicationResult<EditOutcomeDto> {
        let article_id = based_on.article_id();
        let _guard = self.locks.acquire(article_id).await?;

        match self.active_state(article_id).await? {
            PermissionState::Open => self.append_version(based_on, location).await,
            PermissionState::Queued => self.queue_edit(based_on, location).await,
            PermissionState::Locked => Ok(Self::locked(article_id)),
        }
    }

    async fn append_version(
        &self,
        based_on: &VersionIdentifier,
        location: &ContentLocation,
    ) -> ApplicationResult<EditOutcomeDto> {
        let article_id = based_on.article_id();
        let appended = self
            .version_repo
            .append_if_latest(
                based_on.version(),
                NewVersion {
                    article_id,
                    content: location.clone(),
                    recorded_at: self.clock.now(),
                },
            )
            .await;

        let version = match appended {
            Ok(version) => version,
            Err(err) => {
                if let DomainError::StaleVersion { current } = &err {
                    tracing::warn!(
                        article_id = %article_id,
                        submitted = %based_on,
                        latest = %current,
                        "edit lost a concurrent update race"
                    );
                }
                return Err(err.into());
            }
        };

        let identifier = version.identifier()?;
        tracing::info!(article_id = %article_id, identifier = %identifier, "edit applied");
        Ok(EditOutcomeDto::Applied {
            article_id: article_id.into(),
            version: version.number.get(),
            identifier: identifier.to_string(),
            content_location: version.content.into_inner(),
        })
    }

    async fn queue_edit(
        &self,
        based_on: &VersionIdentifier,
        location: &ContentLocation,
    ) -> ApplicationResult<EditOutcomeDto> {
        let article_id = based_on.article_id();
        let pending = PendingEdit {
            article_id,
            based_on: based_on.clone(),
            content: location.clone(),
            submitted_at: self.clock.now(),
        };
        let ticket = self.edit_queue.enqueue(pending).await?;

        tracing::info!(article_id = %article_id, ticket = %ticket, "edit queued");
        Ok(EditOutcomeDto::Queued {
            article_id: article_id.into(),
            ticket: ticket.0,
            message: format!(
                "Edits to article {article_id} are currently queued for review; your edit was \
                 accepted as ticket {ticket}."
            ),
        })
    }

    fn locked(article_id: ArticleId) -> EditOutcomeDto {
        tracing::info!(article_id = %article_id, "edit refused, article locked");
        EditOutcomeDto::Locked {
            article_id: article_id.into(),
            message: format!(
                "The requested article ({article_id}) has been locked for editing. This is likely \
                 due to high-volume edits or a controversial topic."
            ),
        }
    }
}
