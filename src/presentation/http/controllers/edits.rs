// src/presentation/http/controllers/edits.rs
use crate::application::{commands::edits::SubmitEditCommand, dto::EditOutcomeDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitEditRequest {
    pub new_html: String,
}

/// Applied and locked outcomes answer 200; a queued edit has only been accepted, so 202.
fn outcome_status(outcome: &EditOutcomeDto) -> StatusCode {
    match outcome {
        EditOutcomeDto::Applied { .. } | EditOutcomeDto::Locked { .. } => StatusCode::OK,
        EditOutcomeDto::Queued { .. } => StatusCode::ACCEPTED,
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/edits/{identifier}",
    params(("identifier" = String, Path, description = "Identifier of the version the edit is based on")),
    request_body = SubmitEditRequest,
    responses(
        (status = 200, description = "Edit applied, or refused because the article is locked.", body = EditOutcomeDto),
        (status = 202, description = "Edit queued for later review.", body = EditOutcomeDto),
        (status = 400, description = "Malformed identifier or article in an invalid state.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "The identifier is not the current version.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Edits"
)]
pub async fn submit_edit(
    Extension(state): Extension<HttpState>,
    Path(identifier): Path<String>,
    Json(payload): Json<SubmitEditRequest>,
) -> HttpResult<(StatusCode, Json<EditOutcomeDto>)> {
    let command = SubmitEditCommand {
        identifier,
        content: payload.new_html,
    };

    let outcome = state
        .services
        .edit_commands
        .submit_edit(command)
        .await
        .into_http()?;

    Ok((outcome_status(&outcome), Json(outcome)))
}
