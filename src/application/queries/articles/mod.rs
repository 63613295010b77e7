mod get_by_slug;
mod latest;
mod service;
mod versions;

pub use get_by_slug::GetArticleBySlugQuery;
pub use latest::GetLatestVersionQuery;
pub use service::ArticleQueryService;
pub use versions::ListArticleVersionsQuery;
