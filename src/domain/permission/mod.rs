pub mod entity;
pub mod repository;
pub mod state;

pub use entity::PermissionRecord;
pub use repository::PermissionRepository;
pub use state::PermissionState;
