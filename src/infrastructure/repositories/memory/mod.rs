// src/infrastructure/repositories/memory/mod.rs
mod admins;
mod articles;
mod permissions;
mod shard;
mod versions;

pub use admins::InMemoryAdminRepository;
pub use articles::InMemoryArticleRepository;
pub use permissions::InMemoryPermissionRepository;
pub use versions::InMemoryArticleVersionRepository;
