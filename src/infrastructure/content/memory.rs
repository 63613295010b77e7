// src/infrastructure/content/memory.rs
use super::{MAX_NAME_ATTEMPTS, candidate_name};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::content::ContentStore,
};
use crate::domain::article::ContentLocation;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryContentStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::infrastructure("content store lock poisoned")
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn put(&self, name: &str, content: &str) -> ApplicationResult<ContentLocation> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = candidate_name(name, attempt);
            if !entries.contains_key(&candidate) {
                let location = ContentLocation::new(candidate.clone())?;
                entries.insert(candidate, content.to_owned());
                return Ok(location);
            }
        }
        Err(ApplicationError::conflict(format!(
            "no free content name for {name}"
        )))
    }

    async fn get(&self, location: &ContentLocation) -> ApplicationResult<String> {
        let entries = self.entries.read().map_err(poisoned)?;
        entries
            .get(location.as_str())
            .cloned()
            .ok_or_else(|| ApplicationError::not_found(format!("content {location} not found")))
    }

    async fn discard(&self, location: &ContentLocation) -> ApplicationResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(location.as_str());
        Ok(())
    }
}
