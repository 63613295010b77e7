// src/domain/mod.rs
pub mod admin;
pub mod article;
pub mod errors;
pub mod permission;
