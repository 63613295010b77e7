// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            admin::AdminAuthenticator, articles::ArticleCommandService,
            edits::EditCommandService, permissions::PermissionCommandService,
        },
        ports::{
            content::ContentStore, queue::EditQueue, security::PasswordHasher, time::Clock,
            util::SlugGenerator,
        },
        locks::ArticleLocks,
        queries::{articles::ArticleQueryService, permissions::PermissionQueryService},
    },
    domain::{
        admin::AdminRepository,
        article::{ArticleRepository, ArticleVersionRepository, services::ArticleSlugService},
        permission::PermissionRepository,
    },
};

/// Every store and collaborator the service needs. Built once by the process owner and shared by
/// reference; nothing here is global.
pub struct ServiceDependencies {
    pub article_repo: Arc<dyn ArticleRepository>,
    pub version_repo: Arc<dyn ArticleVersionRepository>,
    pub permission_repo: Arc<dyn PermissionRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub content_store: Arc<dyn ContentStore>,
    pub edit_queue: Arc<dyn EditQueue>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub edit_commands: Arc<EditCommandService>,
    pub permission_commands: Arc<PermissionCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub permission_queries: Arc<PermissionQueryService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            article_repo,
            version_repo,
            permission_repo,
            admin_repo,
            content_store,
            edit_queue,
            password_hasher,
            clock,
            slugger,
        } = deps;

        let authenticator = Arc::new(AdminAuthenticator::new(
            Arc::clone(&admin_repo),
            Arc::clone(&password_hasher),
        ));

        let locks = Arc::new(ArticleLocks::new());

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&version_repo),
            Arc::clone(&permission_repo),
            Arc::clone(&content_store),
            Arc::clone(&slug_service),
            Arc::clone(&authenticator),
            Arc::clone(&locks),
            Arc::clone(&clock),
        ));

        let edit_commands = Arc::new(EditCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&version_repo),
            Arc::clone(&permission_repo),
            Arc::clone(&content_store),
            Arc::clone(&edit_queue),
            Arc::clone(&locks),
            Arc::clone(&clock),
        ));

        let permission_commands = Arc::new(PermissionCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&permission_repo),
            Arc::clone(&authenticator),
            locks,
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&version_repo),
            Arc::clone(&content_store),
        ));

        let permission_queries = Arc::new(PermissionQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&permission_repo),
            authenticator,
        ));

        Self {
            article_commands,
            edit_commands,
            permission_commands,
            article_queries,
            permission_queries,
        }
    }
}
