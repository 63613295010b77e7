// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::admin::AdminAuthenticator,
        locks::ArticleLocks,
        ports::{content::ContentStore, time::Clock},
    },
    domain::{
        article::{ArticleRepository, ArticleVersionRepository, services::ArticleSlugService},
        permission::PermissionRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) version_repo: Arc<dyn ArticleVersionRepository>,
    pub(super) permission_repo: Arc<dyn PermissionRepository>,
    pub(super) content_store: Arc<dyn ContentStore>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) authenticator: Arc<AdminAuthenticator>,
    pub(super) locks: Arc<ArticleLocks>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        version_repo: Arc<dyn ArticleVersionRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
        content_store: Arc<dyn ContentStore>,
        slug_service: Arc<ArticleSlugService>,
        authenticator: Arc<AdminAuthenticator>,
        locks: Arc<ArticleLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            version_repo,
            permission_repo,
            content_store,
            slug_service,
            authenticator,
            locks,
            clock,
        }
    }
}
