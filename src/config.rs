// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone)]
pub struct AppConfig {
    listen_addr: String,
    admin_username: String,
    admin_secret: AdminSecret,
    content_dir: Option<PathBuf>,
    seed_article: SeedArticle,
    allowed_origins: Vec<String>,
}

/// How the administrator's password was supplied.
#[derive(Clone)]
pub enum AdminSecret {
    /// Argon2 PHC string, used as is.
    Hash(String),
    /// Plain text, hashed once at startup.
    Plain(String),
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminSecret::Hash(_) => f.write_str("Hash(<redacted>)"),
            AdminSecret::Plain(_) => f.write_str("Plain(<redacted>)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeedArticle {
    pub title: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8888".into()
}

fn default_admin_username() -> String {
    "admin".into()
}

fn default_seed_title() -> String {
    "Latest plane crash".into()
}

fn default_seed_html() -> String {
    "<p>No reports yet.</p>".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn non_empty(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables. Optional values fall back to defaults;
    /// the administrator's password (hashed or plain) is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let admin_username = non_empty("ADMIN_USERNAME").unwrap_or_else(default_admin_username);

        let admin_secret = match (non_empty("ADMIN_PASSWORD_HASH"), non_empty("ADMIN_PASSWORD")) {
            (Some(hash), _) => {
                if !hash.starts_with("$argon2") {
                    return Err(ConfigError::Invalid(
                        "ADMIN_PASSWORD_HASH must be an argon2 PHC string".into(),
                    ));
                }
                AdminSecret::Hash(hash)
            }
            (None, Some(plain)) => AdminSecret::Plain(plain),
            (None, None) => return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH")),
        };

        let content_dir = non_empty("CONTENT_DIR").map(PathBuf::from);

        let seed_article = SeedArticle {
            title: non_empty("SEED_ARTICLE_TITLE").unwrap_or_else(default_seed_title),
            html: non_empty("SEED_ARTICLE_HTML").unwrap_or_else(default_seed_html),
        };

        let allowed_origins = Self::allowed_origins_from_env();

        Ok(Self {
            listen_addr,
            admin_username,
            admin_secret,
            content_dir,
            seed_article,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_secret(&self) -> &AdminSecret {
        &self.admin_secret
    }

    pub fn content_dir(&self) -> Option<&PathBuf> {
        self.content_dir.as_ref()
    }

    pub fn seed_article(&self) -> &SeedArticle {
        &self.seed_article
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Used by router construction in tests, where a full `AppConfig` is unnecessary.
    pub fn allowed_origins_from_env() -> Vec<String> {
        env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("listen_addr", &self.listen_addr)
            .field("admin_username", &self.admin_username)
            .field("admin_secret", &self.admin_secret)
            .field("content_dir", &self.content_dir)
            .field("seed_article", &self.seed_article.title)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}
