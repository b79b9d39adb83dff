use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use super::{DownloadLedger, StoreError, UrlStore};
use crate::{
    config::{LEDGER_FILE, URL_STORE_FILE},
    info, success,
    types::{CleanupOutcome, LessonPeriod},
    warning,
};

pub const AUDIO_EXTENSIONS: [&str; 2] = ["mp3", "m4a"];

static LESSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})\s*Q(\d)\s*Lesson\s*(\d+)").expect("lesson pattern is a valid regex")
});

pub fn is_audio_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext))
}

/// Reads the lesson period embedded in a file name such as
/// `2025 Q1 Lesson 5 - Title.m4a`.
pub fn parse_lesson_file(name: &str) -> Option<LessonPeriod> {
    let caps = LESSON_PATTERN.captures(name)?;
    Some(LessonPeriod {
        year: caps[1].parse().ok()?,
        quarter: caps[2].parse().ok()?,
        week: caps[3].parse().ok()?,
    })
}

/// Housekeeping for the audio files of previous lesson weeks.
pub struct LessonFileManager {
    dir: PathBuf,
}

impl LessonFileManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Purges all audio and both state files once any lesson file on disk is
    /// older than `current`.
    ///
    /// Files are checked in name order and the scan stops at the first stale
    /// one. Audio names without an embedded period are reported and ignored.
    pub async fn cleanup_if_stale(
        &self,
        current: LessonPeriod,
    ) -> Result<CleanupOutcome, StoreError> {
        let lesson_files: Vec<String> = self
            .audio_files()
            .await?
            .into_iter()
            .filter(|name| name.contains("Lesson"))
            .collect();

        if lesson_files.is_empty() {
            info!("No previous lesson files found.");
            return Ok(CleanupOutcome::NoPreviousFiles);
        }

        for name in lesson_files {
            match parse_lesson_file(&name) {
                Some(file_period) if file_period < current => {
                    info!(
                        "Current lesson ({}) is newer than {}. Deleting all audio files, '{}' and '{}'.",
                        current, name, LEDGER_FILE, URL_STORE_FILE
                    );
                    let removed = self.purge().await?;
                    return Ok(CleanupOutcome::Purged { removed });
                }
                Some(_) => info!("{} is up-to-date.", name),
                None => warning!("File {} does not match the lesson pattern.", name),
            }
        }

        Ok(CleanupOutcome::UpToDate)
    }

    /// Deletes every audio file in the directory plus the URL store and the
    /// ledger. Per-file failures are logged and skipped. Returns the number of
    /// files removed.
    pub async fn purge(&self) -> Result<usize, StoreError> {
        let mut removed = 0;

        for name in self.audio_files().await? {
            match async_fs::remove_file(self.dir.join(&name)).await {
                Ok(()) => {
                    success!("Deleted: {}", name);
                    removed += 1;
                }
                Err(e) => warning!("Error deleting {}: {}", name, e),
            }
        }

        match UrlStore::new(self.dir.join(URL_STORE_FILE)).reset().await {
            Ok(true) => {
                success!("Deleted: {}", URL_STORE_FILE);
                removed += 1;
            }
            Ok(false) => {}
            Err(e) => warning!("Error deleting {}: {}", URL_STORE_FILE, e),
        }

        match DownloadLedger::new(self.dir.join(LEDGER_FILE)).clear().await {
            Ok(true) => {
                success!("Deleted: {}", LEDGER_FILE);
                removed += 1;
            }
            Ok(false) => {}
            Err(e) => warning!("Error deleting {}: {}", LEDGER_FILE, e),
        }

        Ok(removed)
    }

    /// Audio file names in the directory, sorted.
    pub async fn audio_files(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_audio_file(name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}
