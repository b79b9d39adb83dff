use std::path::{Path, PathBuf};

use tokio::process::Command;

use super::MediaDownloader;
use crate::Res;

/// Audio-only formats, best first: 48k AAC, then 128k AAC.
pub const AUDIO_FORMATS: &str = "139/140";
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Extracts audio tracks by running `yt-dlp`.
pub struct YtDlpDownloader {
    yt_dlp: PathBuf,
}

impl YtDlpDownloader {
    pub fn new(yt_dlp: impl Into<PathBuf>) -> Self {
        Self {
            yt_dlp: yt_dlp.into(),
        }
    }
}

impl MediaDownloader for YtDlpDownloader {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Res<PathBuf> {
        let output = Command::new(&self.yt_dlp)
            .args(["-f", AUDIO_FORMATS])
            .arg("--no-part")
            .arg("-P")
            .arg(dest_dir)
            .args(["-o", OUTPUT_TEMPLATE])
            .args(["--no-simulate", "--print", "after_move:filepath"])
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            return Err(format!(
                "yt-dlp failed for {} ({}): {}",
                url,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )
            .into());
        }

        let stdout = String::from_utf8(output.stdout)?;
        let path = stdout
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| format!("yt-dlp did not report an output file for {}", url))?;

        if !path.exists() {
            return Err(format!("yt-dlp finished but {} does not exist", path.display()).into());
        }

        Ok(path)
    }
}
