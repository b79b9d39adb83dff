//! Configuration management for the lesson downloader.
//!
//! Values come from the process environment, optionally seeded from `.env`
//! files. Everything is resolved once at startup into a [`Config`] which the
//! binary passes into each pipeline step; nothing below `main` reads the
//! environment on its own.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the local data directory (`lessoncli/.env`)
//! 3. `.env` in the current directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

use clap::ValueEnum;

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const YT_DLP_VAR: &str = "LESSONCLI_YT_DLP";
pub const DAILY_URL_VAR: &str = "LESSONCLI_DAILY_URL";
pub const TIMEOUT_VAR: &str = "LESSONCLI_TIMEOUT_SECS";

pub const DEFAULT_YT_DLP: &str = "yt-dlp";
pub const DEFAULT_DAILY_URL: &str =
    "https://d7dlhz1yjc01y.cloudfront.net/audio/en/lessons/{date}.mp3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const URL_STORE_FILE: &str = "urls.txt";
pub const LEDGER_FILE: &str = "downloaded.txt";

/// Selects which search provider the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExecutionMode {
    /// Query the YouTube Data API
    #[default]
    Live,
    /// Answer every channel search with a fixed video URL
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(String),
    InvalidValue { var: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(var) => write!(f, "{} must be set", var),
            ConfigError::InvalidValue { var, value } => {
                write!(f, "{} has an invalid value: '{}'", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings, resolved once in `main` and passed to the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key (`YOUTUBE_API_KEY`)
    pub api_key: String,
    /// Live API search or fixed simulated URLs
    pub mode: ExecutionMode,
    /// Directory holding the audio files, `urls.txt` and `downloaded.txt`
    pub work_dir: PathBuf,
    /// CDN URL of a daily file, with `{date}` as `YYYY-MM-DD`
    pub daily_url_template: String,
    /// Connect and per-read timeout for every HTTP request
    pub request_timeout: Duration,
    /// The `yt-dlp` executable
    pub yt_dlp_path: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `YOUTUBE_API_KEY` is unset or
    /// empty, and [`ConfigError::InvalidValue`] for a malformed timeout or a
    /// daily URL template without `{date}`.
    pub fn from_env(mode: ExecutionMode, work_dir: PathBuf) -> Result<Self, ConfigError> {
        let api_key = youtube_api_key()?;

        let daily_url_template = optional_var(DAILY_URL_VAR, DEFAULT_DAILY_URL);
        if !daily_url_template.contains("{date}") {
            return Err(ConfigError::InvalidValue {
                var: DAILY_URL_VAR.to_string(),
                value: daily_url_template,
            });
        }

        let timeout = optional_var(TIMEOUT_VAR, &DEFAULT_TIMEOUT_SECS.to_string());
        let timeout_secs = timeout
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                var: TIMEOUT_VAR.to_string(),
                value: timeout.clone(),
            })?;

        Ok(Self {
            api_key,
            mode,
            work_dir,
            daily_url_template,
            request_timeout: Duration::from_secs(timeout_secs),
            yt_dlp_path: PathBuf::from(optional_var(YT_DLP_VAR, DEFAULT_YT_DLP)),
        })
    }

    pub fn url_store_path(&self) -> PathBuf {
        self.work_dir.join(URL_STORE_FILE)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.work_dir.join(LEDGER_FILE)
    }
}

/// Loads `.env` files from the local data directory and the current directory.
///
/// Missing files are skipped; variables already present in the process
/// environment are never overwritten.
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lessoncli/.env");

    if async_fs::metadata(&path).await.is_ok() {
        let _ = dotenv::from_path(&path);
    }
    let _ = dotenv::dotenv();
}

/// Returns the YouTube Data API key.
///
/// # Errors
///
/// Returns [`ConfigError::MissingVar`] if `YOUTUBE_API_KEY` is not set or empty.
pub fn youtube_api_key() -> Result<String, ConfigError> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingVar(API_KEY_VAR.to_string())),
    }
}

fn optional_var(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
