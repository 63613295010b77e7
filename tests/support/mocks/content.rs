// tests/support/mocks/content.rs
//! コンテンツストアのモック。書き込み途中で止めるゲートと、指定回数だけ失敗するストア。
use article_gate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::content::ContentStore,
};
use article_gate::domain::article::ContentLocation;
use article_gate::infrastructure::content::InMemoryContentStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Notify, Semaphore};

/// `arm` した次の `put` を、`release` されるまで保存前に停止させる
pub struct GatedContentStore {
    inner: Arc<InMemoryContentStore>,
    armed: AtomicBool,
    paused: Notify,
    release: Semaphore,
}

impl GatedContentStore {
    pub fn new(inner: Arc<InMemoryContentStore>) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(false),
            paused: Notify::new(),
            release: Semaphore::new(0),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// 停止中の `put` が来るまで待つ
    pub async fn wait_until_paused(&self) {
        self.paused.notified().await;
    }

    pub fn release(&self) {
        self.release.add_permits(1);
    }
}

#[async_trait]
impl ContentStore for GatedContentStore {
    async fn put(&self, name: &str, content: &str) -> ApplicationResult<ContentLocation> {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.paused.notify_one();
            self.release
                .acquire()
                .await
                .map_err(|_| ApplicationError::infrastructure("gate closed"))?
                .forget();
        }
        self.inner.put(name, content).await
    }

    async fn get(&self, location: &ContentLocation) -> ApplicationResult<String> {
        self.inner.get(location).await
    }

    async fn discard(&self, location: &ContentLocation) -> ApplicationResult<()> {
        self.inner.discard(location).await
    }
}

/// 最初の `failures` 回の `put` を失敗させる（ディスクフルの再現）
pub struct FlakyContentStore {
    inner: Arc<InMemoryContentStore>,
    failures: AtomicUsize,
}

impl FlakyContentStore {
    pub fn new(inner: Arc<InMemoryContentStore>, failures: usize) -> Self {
        Self {
            inner,
            failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl ContentStore for FlakyContentStore {
    async fn put(&self, name: &str, content: &str) -> ApplicationResult<ContentLocation> {
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(ApplicationError::infrastructure("disk full"));
        }
        self.inner.put(name, content).await
    }

    async fn get(&self, location: &ContentLocation) -> ApplicationResult<String> {
        self.inner.get(location).await
    }

    async fn discard(&self, location: &ContentLocation) -> ApplicationResult<()> {
        self.inner.discard(location).await
    }
}
