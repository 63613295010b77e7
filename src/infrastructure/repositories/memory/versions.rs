// src/infrastructure/repositories/memory/versions.rs
use super::shard::ArticleShards;
use crate::domain::article::{
    ArticleId, ArticleVersion, ArticleVersionRepository, NewVersion, VersionNumber,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

pub struct InMemoryArticleVersionRepository {
    logs: ArticleShards<Vec<ArticleVersion>>,
}

impl Default for InMemoryArticleVersionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticleVersionRepository {
    pub fn new() -> Self {
        Self {
            logs: ArticleShards::new("version log"),
        }
    }

    fn no_versions(article_id: ArticleId) -> DomainError {
        DomainError::NotFound(format!("article {article_id} has no versions"))
    }

    fn push(log: &mut Vec<ArticleVersion>, version: NewVersion) -> DomainResult<ArticleVersion> {
        let number = match log.last() {
            Some(latest) => latest.number.next()?,
            None => VersionNumber::FIRST,
        };
        let entry = ArticleVersion {
            article_id: version.article_id,
            number,
            content: version.content,
            recorded_at: version.recorded_at,
        };
        // Refuse numbers that could never be handed out as identifiers.
        entry.identifier()?;
        log.push(entry.clone());
        Ok(entry)
    }
}

#[async_trait]
impl ArticleVersionRepository for InMemoryArticleVersionRepository {
    async fn latest(&self, article_id: ArticleId) -> DomainResult<ArticleVersion> {
        self.logs
            .read(article_id, |log| log.last().cloned())?
            .flatten()
            .ok_or_else(|| Self::no_versions(article_id))
    }

    async fn append(&self, version: NewVersion) -> DomainResult<ArticleVersion> {
        self.logs
            .write(version.article_id, |log| Self::push(log, version))
    }

    async fn append_if_latest(
        &self,
        expected: VersionNumber,
        version: NewVersion,
    ) -> DomainResult<ArticleVersion> {
        let article_id = version.article_id;
        self.logs.write(article_id, |log| {
            let latest = log.last().ok_or_else(|| Self::no_versions(article_id))?;
            if latest.number != expected {
                return Err(DomainError::StaleVersion {
                    current: latest.identifier()?,
                });
            }
            Self::push(log, version)
        })
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleVersion>> {
        Ok(self
            .logs
            .read(article_id, |log| log.iter().rev().cloned().collect())?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ContentLocation;
    use chrono::Utc;
    use std::sync::Arc;

    fn article() -> ArticleId {
        ArticleId::new(1).unwrap()
    }

    fn new_version(name: &str) -> NewVersion {
        NewVersion {
            article_id: article(),
            content: ContentLocation::new(name).unwrap(),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn latest_on_empty_log_is_not_found() {
        let repo = InMemoryArticleVersionRepository::new();
        assert!(matches!(
            repo.latest(article()).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn append_increments_latest_by_one() {
        let repo = InMemoryArticleVersionRepository::new();
        let first = repo.append(new_version("a.html")).await.unwrap();
        assert_eq!(first.number, VersionNumber::FIRST);

        for expected in 2..=5u64 {
            let prior = repo.latest(article()).await.unwrap();
            let appended = repo.append(new_version("b.html")).await.unwrap();
            assert_eq!(appended.number.get(), prior.number.get() + 1);
            assert_eq!(repo.latest(article()).await.unwrap().number.get(), expected);
        }
    }

    #[tokio::test]
    async fn append_if_latest_rejects_stale_expectation() {
        let repo = InMemoryArticleVersionRepository::new();
        repo.append(new_version("v1.html")).await.unwrap();
        repo.append(new_version("v2.html")).await.unwrap();

        let err = repo
            .append_if_latest(VersionNumber::FIRST, new_version("v3.html"))
            .await
            .unwrap_err();
        match err {
            DomainError::StaleVersion { current } => {
                assert_eq!(current.as_str(), "0000000000000010000000002");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(repo.list_by_article(article()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn append_if_latest_on_empty_log_is_not_found() {
        let repo = InMemoryArticleVersionRepository::new();
        let err = repo
            .append_if_latest(VersionNumber::FIRST, new_version("v.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_by_article_is_newest_first_and_isolated_per_article() {
        let repo = InMemoryArticleVersionRepository::new();
        repo.append(new_version("v1.html")).await.unwrap();
        repo.append(new_version("v2.html")).await.unwrap();
        let other = ArticleId::new(2).unwrap();
        repo.append(NewVersion {
            article_id: other,
            ..new_version("other.html")
        })
        .await
        .unwrap();

        let numbers: Vec<u64> = repo
            .list_by_article(article())
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.number.get())
            .collect();
        assert_eq!(numbers, vec![2, 1]);
        assert_eq!(repo.latest(other).await.unwrap().number, VersionNumber::FIRST);
        assert!(repo.list_by_article(ArticleId::new(3).unwrap()).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_conditional_appends_admit_exactly_one() {
        let repo = Arc::new(InMemoryArticleVersionRepository::new());
        repo.append(new_version("v1.html")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.append_if_latest(VersionNumber::FIRST, new_version(&format!("r{i}.html")))
                    .await
            }));
        }

        let mut applied = 0;
        let mut stale = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => applied += 1,
                Err(DomainError::StaleVersion { current }) => {
                    assert_eq!(current.version().get(), 2);
                    stale += 1;
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(stale, 15);
        assert_eq!(repo.latest(article()).await.unwrap().number.get(), 2);
    }
}
