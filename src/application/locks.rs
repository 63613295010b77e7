use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

/// One async lock per article, shared by every command that writes to the version log or the
/// permission trail. Holding it makes "read the active state, then act on it" a single step with
/// respect to permission changes on the same article.
#[derive(Default)]
pub struct ArticleLocks {
    slots: Mutex<HashMap<ArticleId, Arc<AsyncMutex<()>>>>,
}

impl ArticleLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, article_id: ArticleId) -> ApplicationResult<OwnedMutexGuard<()>> {
        let slot = {
            let mut slots = self
                .slots
                .lock()
                .map_err(|_| ApplicationError::infrastructure("article lock table poisoned"))?;
            Arc::clone(slots.entry(article_id).or_default())
        };
        Ok(slot.lock_owned().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn article(id: i64) -> ArticleId {
        ArticleId::new(id).unwrap()
    }

    #[tokio::test]
    async fn same_article_waits_for_holder() {
        let locks = Arc::new(ArticleLocks::new());
        let held = locks.acquire(article(1)).await.unwrap();

        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move { locks.acquire(article(1)).await.map(|_| ()) })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(held);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn different_articles_do_not_block_each_other() {
        let locks = ArticleLocks::new();
        let _first = locks.acquire(article(1)).await.unwrap();
        tokio::time::timeout(Duration::from_secs(1), locks.acquire(article(2)))
            .await
            .unwrap()
            .unwrap();
    }
}
