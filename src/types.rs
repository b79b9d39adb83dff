use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The lesson a calendar date belongs to.
///
/// Field order matters: the derived `Ord` compares `(year, quarter, week)`
/// lexicographically, which is the staleness order used by the cleanup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LessonPeriod {
    pub year: i32,
    pub quarter: u32,
    pub week: u32,
}

impl fmt::Display for LessonPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{} Lesson {}", self.year, self.quarter, self.week)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelQuerySpec {
    pub key: &'static str,
    pub channel_id: &'static str,
    pub query_template: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelResult {
    pub channel: String,
    pub query: String,
    pub url: Option<String>,
}

#[derive(Tabled)]
pub struct ChannelResultRow {
    pub channel: String,
    pub url: String,
}

impl From<&ChannelResult> for ChannelResultRow {
    fn from(result: &ChannelResult) -> Self {
        Self {
            channel: result.channel.clone(),
            url: result.url.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyStatus {
    Downloaded,
    AlreadyPresent,
    Unavailable,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOutcome {
    pub date: NaiveDate,
    pub url: String,
    pub status: DailyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    NoPreviousFiles,
    UpToDate,
    Purged { removed: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}
