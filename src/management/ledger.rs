use std::{
    collections::HashSet,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{StoreError, urls::append_line};

/// Append-only record of URLs whose audio has been downloaded.
///
/// The ledger does not deduplicate on write. Callers load it once per run with
/// [`DownloadLedger::load`] and check membership before downloading.
pub struct DownloadLedger {
    path: PathBuf,
}

impl DownloadLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty ledger file if none exists yet.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        match async_fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = self.path.parent() {
                    if !parent.as_os_str().is_empty() {
                        async_fs::create_dir_all(parent).await?;
                    }
                }
                async_fs::write(&self.path, "").await?;
                Ok(())
            }
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    /// Reads the ledger into a membership set.
    pub async fn load(&self) -> Result<HashSet<String>, StoreError> {
        let content = async_fs::read_to_string(&self.path).await?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Appends `url` after a successful download. Does not check for an
    /// existing entry.
    pub async fn record(&self, url: &str) -> Result<(), StoreError> {
        append_line(&self.path, url).await
    }

    /// Removes the ledger file. Returns `true` if a file was removed.
    pub async fn clear(&self) -> Result<bool, StoreError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }
}
