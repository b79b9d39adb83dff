use std::path::PathBuf;

use tokio::process::Command;

use super::{TitleLookup, title_query};
use crate::{Res, types::LessonPeriod};

/// Looks up the lesson title with a flat `yt-dlp` search.
///
/// Only the first search result's title is read; nothing is downloaded.
pub struct YtDlpTitleLookup {
    yt_dlp: PathBuf,
}

impl YtDlpTitleLookup {
    pub fn new(yt_dlp: impl Into<PathBuf>) -> Self {
        Self {
            yt_dlp: yt_dlp.into(),
        }
    }
}

impl TitleLookup for YtDlpTitleLookup {
    async fn lookup_title(&self, period: &LessonPeriod) -> Res<Option<String>> {
        let search = format!("ytsearch1:{}", title_query(period));
        let output = Command::new(&self.yt_dlp)
            .arg("--flat-playlist")
            .arg("--quiet")
            .arg("--no-warnings")
            .args(["--print", "title"])
            .arg(&search)
            .output()
            .await?;

        if !output.status.success() {
            return Err(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )
            .into());
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }
}
