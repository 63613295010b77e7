// src/infrastructure/repositories/mod.rs
mod error;
mod memory;

pub use memory::{
    InMemoryAdminRepository, InMemoryArticleRepository, InMemoryArticleVersionRepository,
    InMemoryPermissionRepository,
};
