pub mod articles;
pub mod permissions;
