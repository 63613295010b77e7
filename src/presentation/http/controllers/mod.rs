// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod edits;
pub mod permissions;

use crate::application::error::ApplicationError;
use crate::domain::article::ArticleId;
use crate::presentation::http::error::HttpError;

/// Response header carrying the identifier a client should submit its next edit against.
pub const ARTICLE_GUID_HEADER: &str = "article-guid";

/// `{id}` segments arrive as text so a malformed id gets the JSON error body like every other 400.
fn parse_article_id(raw: &str) -> Result<i64, HttpError> {
    ArticleId::parse(raw)
        .map(i64::from)
        .map_err(|err| ApplicationError::from(err).into())
}
