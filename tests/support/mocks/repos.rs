// tests/support/mocks/repos.rs
//! 呼び出し回数を数えるリポジトリラッパー。ロック状態で何も変更されないことの検証に使う。
use article_gate::domain::{
    article::{ArticleId, ArticleVersion, ArticleVersionRepository, NewVersion, VersionNumber},
    errors::{DomainError, DomainResult},
    permission::{PermissionRecord, PermissionRepository, PermissionState},
};
use article_gate::infrastructure::repositories::{
    InMemoryArticleVersionRepository, InMemoryPermissionRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct CountingVersionRepo {
    inner: InMemoryArticleVersionRepository,
    appends: AtomicUsize,
}

impl CountingVersionRepo {
    /// Successful appends, conditional or not.
    pub fn appends(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleVersionRepository for CountingVersionRepo {
    async fn latest(&self, article_id: ArticleId) -> DomainResult<ArticleVersion> {
        self.inner.latest(article_id).await
    }

    async fn append(&self, version: NewVersion) -> DomainResult<ArticleVersion> {
        let appended = self.inner.append(version).await?;
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(appended)
    }

    async fn append_if_latest(
        &self,
        expected: VersionNumber,
        version: NewVersion,
    ) -> DomainResult<ArticleVersion> {
        let appended = self.inner.append_if_latest(expected, version).await?;
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(appended)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleVersion>> {
        self.inner.list_by_article(article_id).await
    }
}

#[derive(Default)]
pub struct CountingPermissionRepo {
    inner: InMemoryPermissionRepository,
    transitions: AtomicUsize,
    fail_next: AtomicBool,
}

impl CountingPermissionRepo {
    pub fn transitions(&self) -> usize {
        self.transitions.load(Ordering::SeqCst)
    }

    /// 次の transition を永続化エラーにする
    pub fn fail_next_transition(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PermissionRepository for CountingPermissionRepo {
    async fn active_state(&self, article_id: ArticleId) -> DomainResult<PermissionState> {
        self.inner.active_state(article_id).await
    }

    async fn transition(
        &self,
        article_id: ArticleId,
        state: PermissionState,
        at: DateTime<Utc>,
    ) -> DomainResult<PermissionRecord> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("permission store unavailable".into()));
        }
        let record = self.inner.transition(article_id, state, at).await?;
        self.transitions.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }

    async fn history(&self, article_id: ArticleId) -> DomainResult<Vec<PermissionRecord>> {
        self.inner.history(article_id).await
    }
}
