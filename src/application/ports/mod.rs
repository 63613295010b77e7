// src/application/ports/mod.rs
pub mod content;
pub mod queue;
pub mod security;
pub mod time;
pub mod util;
