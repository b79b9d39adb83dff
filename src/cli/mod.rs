//! # CLI Module
//!
//! The pipeline steps the binary runs, in order:
//!
//! 1. [`LessonFileManager::cleanup_if_stale`](crate::management::LessonFileManager::cleanup_if_stale)
//!    - drop last week's audio once a newer lesson starts
//! 2. [`search_and_save_urls`] - resolve this week's videos on every channel
//! 3. [`download_pending`] - extract audio for URLs not in the ledger yet
//! 4. [`fetch_weekly_daily_files`] - fetch the daily audio files from the CDN
//!
//! [`run`] wires the real providers from a [`Config`](crate::config::Config).
//! The step functions are generic over the provider traits so they can be
//! exercised with mocks.

pub mod daily;
pub mod download;
pub mod run;
pub mod search;

pub use daily::fetch_weekly_daily_files;
pub use download::download_pending;
pub use run::run;
pub use search::search_and_save_urls;
