// src/infrastructure/repositories/memory/shard.rs
use super::super::error::map_poison;
use crate::domain::{article::ArticleId, errors::DomainResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Per-article state behind its own mutex. The outer lock is only held long enough to find or
/// create an article's slot, so work on one article never waits for another.
pub(super) struct ArticleShards<T> {
    name: &'static str,
    shards: RwLock<HashMap<ArticleId, Arc<Mutex<T>>>>,
}

impl<T: Default> ArticleShards<T> {
    pub(super) fn new(name: &'static str) -> Self {
        Self {
            name,
            shards: RwLock::new(HashMap::new()),
        }
    }

    fn slot(&self, id: ArticleId) -> DomainResult<Option<Arc<Mutex<T>>>> {
        let shards = self.shards.read().map_err(map_poison(self.name))?;
        Ok(shards.get(&id).cloned())
    }

    fn slot_or_create(&self, id: ArticleId) -> DomainResult<Arc<Mutex<T>>> {
        if let Some(slot) = self.slot(id)? {
            return Ok(slot);
        }
        let mut shards = self.shards.write().map_err(map_poison(self.name))?;
        Ok(Arc::clone(shards.entry(id).or_default()))
    }

    /// Run `f` under the article's lock; `None` when the article has no slot yet.
    pub(super) fn read<R>(&self, id: ArticleId, f: impl FnOnce(&T) -> R) -> DomainResult<Option<R>> {
        let Some(slot) = self.slot(id)? else {
            return Ok(None);
        };
        let guard = slot.lock().map_err(map_poison(self.name))?;
        Ok(Some(f(&guard)))
    }

    /// Run `f` under the article's lock, creating the slot if needed.
    pub(super) fn write<R>(
        &self,
        id: ArticleId,
        f: impl FnOnce(&mut T) -> DomainResult<R>,
    ) -> DomainResult<R> {
        let slot = self.slot_or_create(id)?;
        let mut guard = slot.lock().map_err(map_poison(self.name))?;
        f(&mut guard)
    }
}
