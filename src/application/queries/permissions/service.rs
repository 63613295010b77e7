use std::sync::Arc;

use crate::{
    application::commands::admin::AdminAuthenticator,
    domain::{article::ArticleRepository, permission::PermissionRepository},
};

pub struct PermissionQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) permission_repo: Arc<dyn PermissionRepository>,
    pub(super) authenticator: Arc<AdminAuthenticator>,
}

impl PermissionQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
        authenticator: Arc<AdminAuthenticator>,
    ) -> Self {
        Self {
            article_repo,
            permission_repo,
            authenticator,
        }
    }
}
