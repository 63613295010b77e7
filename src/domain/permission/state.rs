// src/domain/permission/state.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Edit permission of an article. The numeric codes are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Open,
    Queued,
    Locked,
}

impl PermissionState {
    pub const ALL: [PermissionState; 3] = [Self::Open, Self::Queued, Self::Locked];

    pub fn code(self) -> i64 {
        match self {
            Self::Open => 1,
            Self::Queued => 2,
            Self::Locked => 3,
        }
    }

    pub fn from_code(code: i64) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or_else(|| DomainError::Validation(format!("unknown permission state: {code}")))
    }

    /// Parse a code received as raw text; anything that is not a known integer code is rejected.
    pub fn parse_code(raw: &str) -> DomainResult<Self> {
        let code = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("invalid permission state: {raw}")))?;
        Self::from_code(code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Queued => "queued",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
