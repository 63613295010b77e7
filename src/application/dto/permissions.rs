use crate::domain::permission::{PermissionRecord, PermissionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionStateDto {
    pub article_id: i64,
    pub state: PermissionState,
    pub code: i64,
}

impl PermissionStateDto {
    pub fn new(article_id: i64, state: PermissionState) -> Self {
        Self {
            article_id,
            state,
            code: state.code(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionRecordDto {
    pub id: u64,
    pub article_id: i64,
    pub state: PermissionState,
    pub code: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PermissionRecord> for PermissionRecordDto {
    fn from(record: PermissionRecord) -> Self {
        Self {
            id: record.id,
            article_id: record.article_id.into(),
            state: record.state,
            code: record.state.code(),
            is_active: record.is_active,
            created_at: record.created_at,
        }
    }
}
