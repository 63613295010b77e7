pub mod articles;
pub mod edits;
pub mod permissions;

pub use articles::{ArticleContentDto, ArticleDto, ArticleVersionDto, LatestVersionDto};
pub use edits::EditOutcomeDto;
pub use permissions::{PermissionRecordDto, PermissionStateDto};
