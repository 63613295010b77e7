// tests/support/helpers.rs
use super::mocks::{
    ADMIN_PASSWORD, ADMIN_USERNAME, CountingPermissionRepo, CountingVersionRepo, DummyClock,
    PlainPasswordHasher,
};
use article_gate::application::{
    commands::{admin::Credentials, articles::RegisterArticleCommand},
    dto::ArticleDto,
    ports::{content::ContentStore, queue::EditQueue},
    services::{ApplicationServices, ServiceDependencies},
};
use article_gate::domain::admin::{AdminAccount, PasswordHash, Username};
use article_gate::infrastructure::{
    content::InMemoryContentStore,
    queue::InMemoryEditQueue,
    repositories::{InMemoryAdminRepository, InMemoryArticleRepository},
    util::DefaultSlugGenerator,
};
use article_gate::presentation::http::{routes::build_router, state::HttpState};
use axum::body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
use headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to in-memory stores, with handles on the stores so tests can inspect them.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticleRepository>,
    pub versions: Arc<CountingVersionRepo>,
    pub permissions: Arc<CountingPermissionRepo>,
    pub content: Arc<InMemoryContentStore>,
    pub queue: Arc<InMemoryEditQueue>,
}

impl TestApp {
    pub fn new() -> Self {
        let content = Arc::new(InMemoryContentStore::new());
        Self::build(Arc::clone(&content), content, None)
    }

    /// Same wiring, but edits in the queued state go to `edit_queue` instead of `self.queue`.
    pub fn with_edit_queue(edit_queue: Arc<dyn EditQueue>) -> Self {
        let content = Arc::new(InMemoryContentStore::new());
        Self::build(Arc::clone(&content), content, Some(edit_queue))
    }

    /// Services write through `store`; `content` is what `self.content` exposes for inspection,
    /// normally the store `store` wraps.
    pub fn with_content_store(
        content: Arc<InMemoryContentStore>,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self::build(content, store, None)
    }

    fn build(
        content: Arc<InMemoryContentStore>,
        content_store: Arc<dyn ContentStore>,
        edit_queue: Option<Arc<dyn EditQueue>>,
    ) -> Self {
        let articles = Arc::new(InMemoryArticleRepository::new());
        let versions = Arc::new(CountingVersionRepo::default());
        let permissions = Arc::new(CountingPermissionRepo::default());
        let queue = Arc::new(InMemoryEditQueue::new());

        let admin = AdminAccount {
            username: Username::new(ADMIN_USERNAME).expect("username"),
            password_hash: PasswordHash::new(format!("plain${ADMIN_PASSWORD}")).expect("hash"),
        };

        let edit_queue: Arc<dyn EditQueue> = match edit_queue {
            Some(edit_queue) => edit_queue,
            None => queue.clone(),
        };
        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            article_repo: articles.clone(),
            version_repo: versions.clone(),
            permission_repo: permissions.clone(),
            admin_repo: Arc::new(InMemoryAdminRepository::new([admin])),
            content_store,
            edit_queue,
            password_hasher: Arc::new(PlainPasswordHasher),
            clock: Arc::new(DummyClock),
            slugger: Arc::new(DefaultSlugGenerator),
        }));

        Self {
            services,
            articles,
            versions,
            permissions,
            content,
            queue,
        }
    }

    /// Registers an article through the startup seeding path (version 1, permission open).
    pub async fn seed(&self, title: &str, html: &str) -> ArticleDto {
        self.services
            .article_commands
            .seed_article(RegisterArticleCommand {
                title: title.into(),
                html: html.into(),
            })
            .await
            .expect("seed article")
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }
}

pub fn admin_credentials() -> Credentials {
    Credentials::new(ADMIN_USERNAME, ADMIN_PASSWORD)
}

/// `Authorization: Basic ...` header value for the given pair.
pub fn basic_auth(username: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));
    headers
        .get(AUTHORIZATION)
        .cloned()
        .expect("authorization header")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
/// Returns the parsed body for further checks.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
