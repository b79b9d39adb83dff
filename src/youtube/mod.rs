//! # YouTube Integration Module
//!
//! The three collaborators the lesson pipeline needs from YouTube, each behind
//! a small trait so the pipeline steps can be driven by mocks in tests:
//!
//! - [`TitleLookup`] - finds the raw title of the current lesson's panel video
//! - [`SearchProvider`] - resolves a channel-scoped query to one video URL
//! - [`MediaDownloader`] - extracts the audio track of a video into a directory
//!
//! Implementations:
//!
//! - [`title::YtDlpTitleLookup`] and [`media::YtDlpDownloader`] shell out to `yt-dlp`
//! - [`search::YouTubeSearch`] calls the Data API v3 `search.list` endpoint
//! - [`search::SimulatedSearch`] returns fixed URLs without any network access
//! - [`search::Searcher`] picks one of the two from the [`ExecutionMode`](crate::config::ExecutionMode)

pub mod media;
pub mod search;
pub mod title;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::{
    Res,
    types::{ChannelQuerySpec, LessonPeriod},
};

pub trait TitleLookup {
    /// Returns the raw title of the best match for `period`, if any.
    fn lookup_title(&self, period: &LessonPeriod) -> impl Future<Output = Res<Option<String>>>;
}

pub trait SearchProvider {
    /// Returns the most recent video on `channel` matching `query`, if any.
    fn search(
        &self,
        query: &str,
        channel: &ChannelQuerySpec,
    ) -> impl Future<Output = Res<Option<String>>>;
}

pub trait MediaDownloader {
    /// Downloads the audio of `url` into `dest_dir` and returns the file path.
    fn fetch(&self, url: &str, dest_dir: &Path) -> impl Future<Output = Res<PathBuf>>;
}

/// The phrase used to look up the lesson title for `period`.
pub fn title_query(period: &LessonPeriod) -> String {
    format!(
        "Sabbath School Panel by 3ABN - Lesson {} Q{} {}",
        period.week, period.quarter, period.year
    )
}
