// src/infrastructure/mod.rs
pub mod content;
pub mod queue;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
