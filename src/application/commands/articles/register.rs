// src/application/commands/articles/register.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::admin::Credentials, dto::ArticleDto, error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleId, ArticleTitle, ArticleVersion, ContentLocation, NewArticle, NewVersion,
        },
        permission::PermissionState,
    },
};
use chrono::{DateTime, Utc};

pub struct RegisterArticleCommand {
    pub title: String,
    pub html: String,
}

impl ArticleCommandService {
    /// Administrative registration of a new article.
    pub async fn register_article(
        &self,
        credentials: &Credentials,
        command: RegisterArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.authenticator.require(credentials).await?;
        self.create_article(command).await
    }

    /// Registers an article without a credential check. Only for startup seeding.
    pub async fn seed_article(&self, command: RegisterArticleCommand) -> ApplicationResult<ArticleDto> {
        self.create_article(command).await
    }

    async fn create_article(&self, command: RegisterArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let now = self.clock.now();
        let slug = self.slug_service.generate_unique_slug(&title).await?;

        // Content first: a failed write leaves nothing in the catalog.
        let name = format!("{}_v1_{}.html", slug, self.clock.epoch_millis());
        let location = self.content_store.put(&name, &command.html).await?;

        let article = match self
            .article_repo
            .insert(NewArticle {
                title,
                slug,
                created_at: now,
            })
            .await
        {
            Ok(article) => article,
            Err(err) => {
                self.discard_content(&location).await;
                return Err(err.into());
            }
        };

        let first = match self.publish_first_version(article.id, location.clone(), now).await {
            Ok(first) => first,
            Err(err) => {
                tracing::warn!(article_id = %article.id, error = %err, "rolling back registration");
                if let Err(remove_err) = self.article_repo.remove(article.id).await {
                    tracing::error!(
                        article_id = %article.id,
                        error = %remove_err,
                        "failed to remove partially registered article"
                    );
                }
                self.discard_content(&location).await;
                return Err(err);
            }
        };

        tracing::info!(article_id = %article.id, slug = %article.slug, "article registered");
        ArticleDto::new(article, &first)
    }

    async fn publish_first_version(
        &self,
        article_id: ArticleId,
        content: ContentLocation,
        now: DateTime<Utc>,
    ) -> ApplicationResult<ArticleVersion> {
        let _guard = self.locks.acquire(article_id).await?;
        let first = self
            .version_repo
            .append(NewVersion {
                article_id,
                content,
                recorded_at: now,
            })
            .await?;
        self.permission_repo
            .transition(article_id, PermissionState::Open, now)
            .await?;
        Ok(first)
    }

    async fn discard_content(&self, location: &ContentLocation) {
        if let Err(err) = self.content_store.discard(location).await {
            tracing::warn!(location = %location, error = %err, "failed to discard orphaned content");
        }
    }
}
