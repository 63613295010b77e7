// src/application/commands/admin/mod.rs
mod authenticate;

pub use authenticate::{AdminAuthenticator, Credentials};
