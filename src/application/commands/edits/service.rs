// src/application/commands/edits/service.rs
use std::sync::Arc;

use crate::{
    application::{
        locks::ArticleLocks,
        ports::{content::ContentStore, queue::EditQueue, time::Clock},
    },
    domain::{
        article::{ArticleRepository, ArticleVersionRepository, ContentLocation},
        permission::PermissionRepository,
    },
};

/// Gate in front of the version log: decides per request whether an edit is applied, queued or
/// refused, based on the article's active permission state.
pub struct EditCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) version_repo: Arc<dyn ArticleVersionRepository>,
    pub(super) permission_repo: Arc<dyn PermissionRepository>,
    pub(super) content_store: Arc<dyn ContentStore>,
    pub(super) edit_queue: Arc<dyn EditQueue>,
    pub(super) locks: Arc<ArticleLocks>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EditCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        version_repo: Arc<dyn ArticleVersionRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
        content_store: Arc<dyn ContentStore>,
        edit_queue: Arc<dyn EditQueue>,
        locks: Arc<ArticleLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            version_repo,
            permission_repo,
            content_store,
            edit_queue,
            locks,
            clock,
        }
    }

    pub(super) async fn discard_orphan(&self, location: &ContentLocation) {
        if let Err(err) = self.content_store.discard(location).await {
            tracing::warn!(location = %location, error = %err, "failed to discard orphaned content");
        }
    }
}
