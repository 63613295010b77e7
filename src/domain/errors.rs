// src/domain/errors.rs
use thiserror::Error;

use crate::domain::article::VersionIdentifier;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("stale version: the latest version is {current}")]
    StaleVersion { current: VersionIdentifier },
    #[error("identifier encoding error: {0}")]
    Encoding(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
