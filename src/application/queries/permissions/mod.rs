mod active;
mod history;
mod service;

pub use active::GetPermissionQuery;
pub use history::ListPermissionHistoryQuery;
pub use service::PermissionQueryService;
