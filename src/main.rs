use article_gate::application::{
    commands::articles::RegisterArticleCommand,
    ports::{
        content::ContentStore, queue::EditQueue, security::PasswordHasher, time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use article_gate::config::{AdminSecret, AppConfig};
use article_gate::domain::{
    admin::{AdminAccount, AdminRepository, PasswordHash, Username},
    article::{ArticleRepository, ArticleVersionRepository},
    permission::PermissionRepository,
};
use article_gate::infrastructure::{
    content::{FsContentStore, InMemoryContentStore},
    queue::InMemoryEditQueue,
    repositories::{
        InMemoryAdminRepository, InMemoryArticleRepository, InMemoryArticleVersionRepository,
        InMemoryPermissionRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use article_gate::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let hasher = Argon2PasswordHasher::default();
    let admin_hash = match config.admin_secret() {
        AdminSecret::Hash(hash) => hash.clone(),
        AdminSecret::Plain(plain) => hasher.hash(plain).await?,
    };
    let admin = AdminAccount {
        username: Username::new(config.admin_username())?,
        password_hash: PasswordHash::new(admin_hash)?,
    };

    let content_store: Arc<dyn ContentStore> = match config.content_dir() {
        Some(dir) => {
            let store = FsContentStore::open(dir.clone())
                .await
                .with_context(|| format!("opening content directory {}", dir.display()))?;
            tracing::info!(root = %store.root().display(), "using filesystem content store");
            Arc::new(store)
        }
        None => {
            tracing::info!("CONTENT_DIR not set; content is kept in memory");
            Arc::new(InMemoryContentStore::new())
        }
    };

    let article_repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
    let version_repo: Arc<dyn ArticleVersionRepository> =
        Arc::new(InMemoryArticleVersionRepository::new());
    let permission_repo: Arc<dyn PermissionRepository> =
        Arc::new(InMemoryPermissionRepository::new());
    let admin_repo: Arc<dyn AdminRepository> = Arc::new(InMemoryAdminRepository::new([admin]));
    let edit_queue: Arc<dyn EditQueue> = Arc::new(InMemoryEditQueue::new());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(hasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        article_repo,
        version_repo,
        permission_repo,
        admin_repo,
        content_store,
        edit_queue,
        password_hasher,
        clock,
        slugger,
    }));

    let seed = config.seed_article();
    let article = services
        .article_commands
        .seed_article(RegisterArticleCommand {
            title: seed.title.clone(),
            html: seed.html.clone(),
        })
        .await?;
    tracing::info!(
        article_id = article.id,
        slug = %article.slug,
        identifier = %article.identifier,
        "seed article ready"
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
