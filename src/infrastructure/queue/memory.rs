// src/infrastructure/queue/memory.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::queue::{EditQueue, PendingEdit, TicketId},
};
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct QueuedEdit {
    pub ticket: TicketId,
    pub edit: PendingEdit,
}

/// Records queued edits in arrival order. Nothing drains it; reviewers would read from here.
#[derive(Default)]
pub struct InMemoryEditQueue {
    entries: Mutex<Vec<QueuedEdit>>,
}

impl InMemoryEditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> ApplicationResult<Vec<QueuedEdit>> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries.clone())
    }

    pub fn pending_for(&self, article_id: ArticleId) -> ApplicationResult<Vec<QueuedEdit>> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries
            .iter()
            .filter(|queued| queued.edit.article_id == article_id)
            .cloned()
            .collect())
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::infrastructure("edit queue lock poisoned")
}

#[async_trait]
impl EditQueue for InMemoryEditQueue {
    async fn enqueue(&self, edit: PendingEdit) -> ApplicationResult<TicketId> {
        let mut entries = self.entries.lock().map_err(poisoned)?;
        let ticket = TicketId(entries.len() as u64 + 1);
        entries.push(QueuedEdit { ticket, edit });
        Ok(ticket)
    }
}
