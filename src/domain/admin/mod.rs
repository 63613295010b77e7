pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::AdminAccount;
pub use repository::AdminRepository;
pub use value_objects::{PasswordHash, Username};
