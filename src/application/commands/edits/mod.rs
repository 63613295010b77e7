// src/application/commands/edits/mod.rs
mod service;
mod submit;

pub use service::EditCommandService;
pub use submit::SubmitEditCommand;
