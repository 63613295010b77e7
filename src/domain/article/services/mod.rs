// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Used when a title has no characters that survive slugification.
const FALLBACK_SLUG: &str = "article";
const MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Derives the URL slug of a new article from its title, suffixing `-1`, `-2`, ... until the
/// slug is free. The catalog still rejects duplicates on insert, so a concurrent registration
/// that wins the same slug surfaces as a conflict rather than a shared slug.
pub struct ArticleSlugService {
    repo: Arc<dyn ArticleRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(repo: Arc<dyn ArticleRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let mut base = self.generator.slugify(title.as_str());
        if base.trim().is_empty() {
            base = FALLBACK_SLUG.to_owned();
        }

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let candidate = match attempt {
                0 => ArticleSlug::new(base.as_str())?,
                n => ArticleSlug::new(format!("{base}-{n}"))?,
            };
            if self.repo.find_by_slug(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "no free slug left for title {title}"
        )))
    }
}
