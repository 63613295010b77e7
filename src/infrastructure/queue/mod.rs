// src/infrastructure/queue/mod.rs
mod memory;

pub use memory::{InMemoryEditQueue, QueuedEdit};
