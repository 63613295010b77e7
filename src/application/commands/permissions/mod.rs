// src/application/commands/permissions/mod.rs
mod change;
mod service;

pub use change::ChangePermissionCommand;
pub use service::PermissionCommandService;
