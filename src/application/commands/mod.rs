pub mod admin;
pub mod articles;
pub mod edits;
pub mod permissions;
