// src/infrastructure/content/fs.rs
use super::{MAX_NAME_ATTEMPTS, candidate_name};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::content::ContentStore,
};
use crate::domain::article::ContentLocation;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Stores each version's HTML as a file in a single directory. Locations are bare file names.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub async fn open(root: impl Into<PathBuf>) -> ApplicationResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", root.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Only a single normal path component is accepted, so a location can never escape the root.
    fn resolve(&self, name: &str) -> ApplicationResult<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => {
                Ok(self.root.join(name))
            }
            _ => Err(ApplicationError::validation(format!(
                "invalid content name: {name}"
            ))),
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ApplicationError {
    match err.kind() {
        ErrorKind::NotFound => ApplicationError::not_found(format!("{} not found", path.display())),
        _ => ApplicationError::infrastructure(format!("{}: {err}", path.display())),
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn put(&self, name: &str, content: &str) -> ApplicationResult<ContentLocation> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = candidate_name(name, attempt);
            let path = self.resolve(&candidate)?;
            let file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;
            let mut file = match file {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(io_error(&path, err)),
            };
            file.write_all(content.as_bytes())
                .await
                .map_err(|err| io_error(&path, err))?;
            file.flush().await.map_err(|err| io_error(&path, err))?;
            return Ok(ContentLocation::new(candidate)?);
        }
        Err(ApplicationError::conflict(format!(
            "no free content name for {name}"
        )))
    }

    async fn get(&self, location: &ContentLocation) -> ApplicationResult<String> {
        let path = self.resolve(location.as_str())?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| io_error(&path, err))
    }

    async fn discard(&self, location: &ContentLocation) -> ApplicationResult<()> {
        let path = self.resolve(location.as_str())?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_and_discard_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsContentStore::open(dir.path()).await.unwrap();

        let first = store.put("a.html", "<p>one</p>").await.unwrap();
        let second = store.put("a.html", "<p>two</p>").await.unwrap();
        assert_eq!(first.as_str(), "a.html");
        assert_eq!(second.as_str(), "a-1.html");
        assert_eq!(store.get(&second).await.unwrap(), "<p>two</p>");
        assert!(dir.path().join("a.html").exists());

        store.discard(&first).await.unwrap();
        assert!(!dir.path().join("a.html").exists());
        assert!(matches!(
            store.get(&first).await,
            Err(ApplicationError::NotFound(_))
        ));
        // discarding twice is fine
        store.discard(&first).await.unwrap();
    }

    #[tokio::test]
    async fn names_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsContentStore::open(dir.path()).await.unwrap();

        for name in ["../evil.html", "sub/dir.html", "..", ".", "", "/etc/passwd"] {
            assert!(
                matches!(
                    store.put(name, "x").await,
                    Err(ApplicationError::Validation(_))
                ),
                "{name}"
            );
        }
        let traversal = ContentLocation::new("../x.html").unwrap();
        assert!(store.get(&traversal).await.is_err());
    }
}
