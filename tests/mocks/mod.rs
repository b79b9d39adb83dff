#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use lessoncli::{
    Res,
    cdn::FileFetcher,
    types::{ChannelQuerySpec, LessonPeriod},
    youtube::{MediaDownloader, SearchProvider, TitleLookup},
};

#[derive(Clone, Default)]
pub struct MockTitleLookup {
    pub title: Option<String>,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<LessonPeriod>>>,
}

impl MockTitleLookup {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl TitleLookup for MockTitleLookup {
    async fn lookup_title(&self, period: &LessonPeriod) -> Res<Option<String>> {
        self.calls.lock().unwrap().push(*period);
        if let Some(ref msg) = self.fail_with {
            return Err(msg.clone().into());
        }
        Ok(self.title.clone())
    }
}

/// Answers `https://youtube.test/<channel key>` unless the channel is told to
/// fail or to find nothing.
#[derive(Clone, Default)]
pub struct MockSearch {
    pub failing: HashSet<String>,
    pub empty: HashSet<String>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSearch {
    pub fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub fn empty(mut self, key: &str) -> Self {
        self.empty.insert(key.to_string());
        self
    }

    pub fn url_for(key: &str) -> String {
        format!("https://youtube.test/{}", key)
    }
}

impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, channel: &ChannelQuerySpec) -> Res<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((channel.key.to_string(), query.to_string()));
        if self.failing.contains(channel.key) {
            return Err(format!("search for {} timed out", channel.key).into());
        }
        if self.empty.contains(channel.key) {
            return Ok(None);
        }
        Ok(Some(Self::url_for(channel.key)))
    }
}

#[derive(Clone, Default)]
pub struct MockDownloader {
    pub failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDownloader {
    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }
}

impl MediaDownloader for MockDownloader {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Res<PathBuf> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(format!("download of {} failed", url).into());
        }
        Ok(dest_dir.join("audio.m4a"))
    }
}

#[derive(Clone, Default)]
pub struct MockFetcher {
    pub available: HashSet<String>,
    pub probe_errors: HashSet<String>,
    pub probes: Arc<Mutex<Vec<String>>>,
    pub downloads: Arc<Mutex<HashMap<String, PathBuf>>>,
}

impl MockFetcher {
    pub fn available(mut self, url: &str) -> Self {
        self.available.insert(url.to_string());
        self
    }

    pub fn probe_error(mut self, url: &str) -> Self {
        self.probe_errors.insert(url.to_string());
        self
    }
}

impl FileFetcher for MockFetcher {
    async fn probe(&self, url: &str) -> Res<bool> {
        self.probes.lock().unwrap().push(url.to_string());
        if self.probe_errors.contains(url) {
            return Err(format!("timeout probing {}", url).into());
        }
        Ok(self.available.contains(url))
    }

    async fn download(&self, url: &str, dest: &Path) -> Res<PathBuf> {
        std::fs::write(dest, b"audio")?;
        self.downloads
            .lock()
            .unwrap()
            .insert(url.to_string(), dest.to_path_buf());
        Ok(dest.to_path_buf())
    }
}
