// src/infrastructure/repositories/memory/permissions.rs
use super::shard::ArticleShards;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::permission::{PermissionRecord, PermissionRepository, PermissionState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct InMemoryPermissionRepository {
    trails: ArticleShards<Vec<PermissionRecord>>,
    next_id: AtomicU64,
}

impl Default for InMemoryPermissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPermissionRepository {
    pub fn new() -> Self {
        Self {
            trails: ArticleShards::new("permission trail"),
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl PermissionRepository for InMemoryPermissionRepository {
    async fn active_state(&self, article_id: ArticleId) -> DomainResult<PermissionState> {
        self.trails
            .read(article_id, |trail| {
                trail
                    .iter()
                    .rev()
                    .find(|record| record.is_active)
                    .map(|record| record.state)
            })?
            .flatten()
            .ok_or_else(|| {
                DomainError::NotFound(format!("article {article_id} has no active permission"))
            })
    }

    async fn transition(
        &self,
        article_id: ArticleId,
        state: PermissionState,
        at: DateTime<Utc>,
    ) -> DomainResult<PermissionRecord> {
        self.trails.write(article_id, |trail| {
            for record in trail.iter_mut() {
                record.is_active = false;
            }
            let record = PermissionRecord {
                id: self.next_id.fetch_add(1, Ordering::Relaxed),
                article_id,
                state,
                is_active: true,
                created_at: at,
            };
            trail.push(record.clone());
            Ok(record)
        })
    }

    async fn history(&self, article_id: ArticleId) -> DomainResult<Vec<PermissionRecord>> {
        Ok(self
            .trails
            .read(article_id, |trail| trail.clone())?
            .unwrap_or_default())
    }
}
