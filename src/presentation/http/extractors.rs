// src/presentation/http/extractors.rs
use crate::application::{commands::admin::Credentials, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

use super::error::HttpError;

/// HTTP Basic credentials presented for an administrative call. Only extracted here; whether
/// they are valid is decided by the application layer.
#[derive(Debug, Clone)]
pub struct AdminCredentials(pub Credentials);

impl<S> FromRequestParts<S> for AdminCredentials
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Basic Authorization header",
                ))
            })?;

        Ok(Self(Credentials::new(header.username(), header.password())))
    }
}
