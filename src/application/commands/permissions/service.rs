// src/application/commands/permissions/service.rs
use std::sync::Arc;

use crate::{
    application::{commands::admin::AdminAuthenticator, locks::ArticleLocks, ports::time::Clock},
    domain::{article::ArticleRepository, permission::PermissionRepository},
};

pub struct PermissionCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) permission_repo: Arc<dyn PermissionRepository>,
    pub(super) authenticator: Arc<AdminAuthenticator>,
    pub(super) locks: Arc<ArticleLocks>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PermissionCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
        authenticator: Arc<AdminAuthenticator>,
        locks: Arc<ArticleLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            permission_repo,
            authenticator,
            locks,
            clock,
        }
    }
}
