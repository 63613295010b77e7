// src/infrastructure/repositories/memory/articles.rs
use super::super::error::map_poison;
use crate::domain::article::{Article, ArticleId, ArticleRepository, ArticleSlug, NewArticle};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Catalog {
    articles: BTreeMap<ArticleId, Article>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryArticleRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut catalog = self.catalog.write().map_err(map_poison("article catalog"))?;
        if catalog.articles.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = ArticleId::new(catalog.last_id + 1)?;
        let created = Article {
            id,
            title: article.title,
            slug: article.slug,
            created_at: article.created_at,
        };
        catalog.last_id = i64::from(id);
        catalog.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let catalog = self.catalog.read().map_err(map_poison("article catalog"))?;
        Ok(catalog.articles.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let catalog = self.catalog.read().map_err(map_poison("article catalog"))?;
        Ok(catalog.articles.values().find(|a| &a.slug == slug).cloned())
    }

    async fn remove(&self, id: ArticleId) -> DomainResult<()> {
        let mut catalog = self.catalog.write().map_err(map_poison("article catalog"))?;
        catalog
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}
