// src/presentation/http/controllers/permissions.rs
use crate::application::{
    commands::permissions::ChangePermissionCommand,
    dto::{PermissionRecordDto, PermissionStateDto},
    queries::permissions::{GetPermissionQuery, ListPermissionHistoryQuery},
};
use super::parse_article_id;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminCredentials;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/permission",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Active edit permission.", body = PermissionStateDto),
        (status = 400, description = "Malformed article id, or the article has no active permission.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Permissions"
)]
pub async fn get_permission(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<PermissionStateDto>> {
    let article_id = parse_article_id(&raw_id)?;
    state
        .services
        .permission_queries
        .get_permission(GetPermissionQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

/// Path segments are passed through untouched so that malformed ids and unknown state codes are
/// rejected by the application layer with its own messages.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/permission/{state}",
    params(
        ("id" = String, Path, description = "Article id"),
        ("state" = String, Path, description = "Permission code: 1 open, 2 queued, 3 locked")
    ),
    responses(
        (status = 200, description = "Permission changed.", body = PermissionRecordDto),
        (status = 400, description = "Invalid article id, unknown article or unknown state code.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong administrator credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Permissions"
)]
pub async fn change_permission(
    Extension(state): Extension<HttpState>,
    AdminCredentials(credentials): AdminCredentials,
    Path((article_id, new_state)): Path<(String, String)>,
) -> HttpResult<Json<PermissionRecordDto>> {
    let command = ChangePermissionCommand {
        article_id,
        state: new_state,
    };

    state
        .services
        .permission_commands
        .change_permission(&credentials, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/permission/history",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Every permission record of the article, oldest first.", body = [PermissionRecordDto]),
        (status = 400, description = "Malformed article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong administrator credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Permissions"
)]
pub async fn list_permission_history(
    Extension(state): Extension<HttpState>,
    AdminCredentials(credentials): AdminCredentials,
    Path(article_id): Path<String>,
) -> HttpResult<Json<Vec<PermissionRecordDto>>> {
    state
        .services
        .permission_queries
        .list_history(&credentials, ListPermissionHistoryQuery { article_id })
        .await
        .into_http()
        .map(Json)
}
