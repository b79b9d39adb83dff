use std::ops::Deref;

use reqwest::Client;

use super::SearchProvider;
use crate::{
    Res,
    config::{Config, ExecutionMode},
    info,
    types::{ChannelQuerySpec, SearchListResponse},
    warning,
};

pub const SEARCH_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const WATCH_URL: &str = "https://www.youtube.com/watch";

/// Fixed answers used in [`ExecutionMode::Simulated`].
pub const SIMULATED_URLS: [(&str, &str); 6] = [
    ("3abn", "https://www.youtube.com/watch?v=-eZepvX6UVw"),
    ("itiswritten", "https://www.youtube.com/watch?v=t_VM__8B1vk"),
    ("hopess", "https://www.youtube.com/watch?v=K83lvzmelOo"),
    ("claudiocarneiro", "https://www.youtube.com/watch?v=qJSuxbIi3Bg"),
    ("HopeLives365", "https://www.youtube.com/watch?v=Ivpr9P-OA4A"),
    ("egwhiteaudio", "https://www.youtube.com/watch?v=kOQosyJhrIE"),
];

pub fn watch_url(video_id: &str) -> String {
    format!("{}?v={}", WATCH_URL, video_id)
}

/// Channel search through the YouTube Data API v3.
///
/// Asks for a single video ordered by date, so the newest upload on the
/// channel that matches the query wins.
pub struct YouTubeSearch {
    client: Client,
    api_key: String,
}

impl Deref for YouTubeSearch {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl YouTubeSearch {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

impl SearchProvider for YouTubeSearch {
    async fn search(&self, query: &str, channel: &ChannelQuerySpec) -> Res<Option<String>> {
        let response = self
            .get(SEARCH_API_URL)
            .query(&[
                ("q", query),
                ("part", "snippet"),
                ("maxResults", "1"),
                ("channelId", channel.channel_id),
                ("type", "video"),
                ("order", "date"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchListResponse>().await?;

        Ok(json
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id)
            .map(|id| watch_url(&id)))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedSearch;

impl SearchProvider for SimulatedSearch {
    async fn search(&self, _query: &str, channel: &ChannelQuerySpec) -> Res<Option<String>> {
        match SIMULATED_URLS.iter().find(|(key, _)| *key == channel.key) {
            Some((_, url)) => {
                info!("Simulated URL found for {}: {}", channel.key, url);
                Ok(Some(url.to_string()))
            }
            None => {
                warning!("No simulated URL for {}.", channel.key);
                Ok(None)
            }
        }
    }
}

/// The search provider chosen once at startup from the execution mode.
pub enum Searcher {
    Live(YouTubeSearch),
    Simulated(SimulatedSearch),
}

impl Searcher {
    pub fn from_config(config: &Config, client: Client) -> Self {
        match config.mode {
            ExecutionMode::Live => Searcher::Live(YouTubeSearch::new(client, &config.api_key)),
            ExecutionMode::Simulated => Searcher::Simulated(SimulatedSearch),
        }
    }
}

impl SearchProvider for Searcher {
    async fn search(&self, query: &str, channel: &ChannelQuerySpec) -> Res<Option<String>> {
        match self {
            Searcher::Live(search) => search.search(query, channel).await,
            Searcher::Simulated(search) => search.search(query, channel).await,
        }
    }
}
