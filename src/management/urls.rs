use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::io::AsyncWriteExt;

use super::StoreError;

/// The per-run list of resolved video URLs, one per line.
///
/// The store is rebuilt on every run: [`UrlStore::reset`] removes the previous
/// run's file and [`UrlStore::append`] adds each URL as soon as it is found.
pub struct UrlStore {
    path: PathBuf,
}

impl UrlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the store file. Returns `true` if a file was removed.
    pub async fn reset(&self) -> Result<bool, StoreError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    /// Adds `url` as a new last line, creating the store if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CriticalError`] for a URL containing a line break
    /// and [`StoreError::IoError`] if the file cannot be written.
    pub async fn append(&self, url: &str) -> Result<(), StoreError> {
        append_line(&self.path, url).await
    }

    /// Returns every non-empty line in file order, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IoError`] if the store does not exist or cannot be read.
    pub async fn read_all(&self) -> Result<Vec<String>, StoreError> {
        let content = async_fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::IoError)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Appends `line` plus a newline to `path`, creating the file if needed.
pub(super) async fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    if line.contains(['\n', '\r']) {
        return Err(StoreError::CriticalError(format!(
            "refusing to store value with a line break: {:?}",
            line
        )));
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line).as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
