// src/application/error.rs
use crate::domain::{
    article::{InvalidIdentifier, VersionIdentifier},
    errors::DomainError,
};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("stale version: the latest version is {current}")]
    StaleVersion { current: VersionIdentifier },

    #[error("invalid article identifier: {0}")]
    InvalidIdentifier(#[from] InvalidIdentifier),

    #[error("invalid edit state: {0}")]
    InvalidState(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("identifier encoding error: {0}")]
    Encoding(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::StaleVersion { current } => Self::StaleVersion { current },
            DomainError::Encoding(msg) => Self::Encoding(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

impl From<crate::domain::article::EncodingError> for ApplicationError {
    fn from(err: crate::domain::article::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}
