// src/application/commands/articles/mod.rs
mod register;
mod service;

pub use register::RegisterArticleCommand;
pub use service::ArticleCommandService;
