pub mod entity;
pub mod identifier;
pub mod repository;
pub mod services;
pub mod value_objects;
pub mod version;

pub use entity::{Article, NewArticle};
pub use identifier::{EncodingError, IdentifierCodec, InvalidIdentifier, VersionIdentifier};
pub use repository::{ArticleRepository, ArticleVersionRepository};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, ContentLocation, VersionNumber};
pub use version::{ArticleVersion, NewVersion};
