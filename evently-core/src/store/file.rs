//! Key-value storage as JSON files in a directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::EventlyResult;

use super::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> EventlyResult<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read stored value");
                Err(e.into())
            }
        }
    }

    /// Writes to a temp file first, then renames it over the old value. The
    /// temp file is removed again when any step fails.
    async fn set(&self, key: &str, value: &str) -> EventlyResult<()> {
        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        let result = async {
            tokio::fs::create_dir_all(&self.dir).await?;
            tokio::fs::write(&temp, value).await?;
            tokio::fs::rename(&temp, &path).await
        }
        .await;

        if let Err(e) = result {
            tracing::error!(path = %path.display(), error = %e, "Failed to write stored value");
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await
                && cleanup.kind() != ErrorKind::NotFound
            {
                tracing::warn!(path = %temp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote stored value");
        Ok(())
    }
}
