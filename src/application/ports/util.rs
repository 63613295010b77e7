// src/application/ports/util.rs

/// Turns article titles into URL path segments (and content file name prefixes).
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
