// src/presentation/http/controllers/articles.rs
use super::{ARTICLE_GUID_HEADER, parse_article_id};
use crate::application::{
    commands::articles::RegisterArticleCommand,
    dto::{ArticleDto, ArticleVersionDto, LatestVersionDto},
    queries::articles::{GetArticleBySlugQuery, GetLatestVersionQuery, ListArticleVersionsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminCredentials;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterArticleRequest {
    pub title: String,
    /// Initial HTML body; becomes version 1.
    pub html: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = RegisterArticleRequest,
    responses(
        (status = 201, description = "Article registered with its first version.", body = ArticleDto),
        (status = 400, description = "Invalid title.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong administrator credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Articles"
)]
pub async fn register_article(
    Extension(state): Extension<HttpState>,
    AdminCredentials(credentials): AdminCredentials,
    Json(payload): Json<RegisterArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = RegisterArticleCommand {
        title: payload.title,
        html: payload.html,
    };

    state
        .services
        .article_commands
        .register_article(&credentials, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/latest",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Current version of the article.", body = LatestVersionDto,
            headers(("article-guid" = String, description = "Identifier of the current version"))),
        (status = 400, description = "Malformed article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_latest_version(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<impl IntoResponse> {
    let article_id = parse_article_id(&raw_id)?;
    let latest = state
        .services
        .article_queries
        .get_latest(GetLatestVersionQuery { article_id })
        .await
        .into_http()?;

    let guid = latest.identifier.clone();
    Ok((AppendHeaders([(ARTICLE_GUID_HEADER, guid)]), Json(latest)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Current HTML of the article.", content_type = "text/html", body = String,
            headers(("article-guid" = String, description = "Identifier of the current version"))),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<impl IntoResponse> {
    let page = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    Ok((
        AppendHeaders([(ARTICLE_GUID_HEADER, page.identifier)]),
        Html(page.html),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/versions",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Version log, newest first.", body = [ArticleVersionDto]),
        (status = 400, description = "Malformed article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_versions(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleVersionDto>>> {
    let article_id = parse_article_id(&raw_id)?;
    state
        .services
        .article_queries
        .list_versions(ListArticleVersionsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}
