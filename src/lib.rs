//! Sabbath School Lesson Downloader Library
//!
//! This library finds the current week's Sabbath School lesson videos on a set
//! of fixed YouTube channels, downloads their audio tracks, and fetches the daily
//! lesson audio files published on a static CDN. State lives in two flat text
//! files in the working directory (`urls.txt` and `downloaded.txt`) next to the
//! downloaded audio.
//!
//! # Modules
//!
//! - `cdn` - Plain file probing and downloading over HTTP
//! - `channels` - The fixed channel table and query template formatting
//! - `cli` - The pipeline steps run by the binary
//! - `config` - Configuration management and environment variables
//! - `management` - URL store, download ledger and lesson file cleanup
//! - `types` - Data structures and type definitions
//! - `utils` - Lesson period calculation and title helpers
//! - `youtube` - Title lookup, channel search and audio extraction
//!
//! # Example
//!
//! ```
//! use lessoncli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> lessoncli::Res<()> {
//!     config::load_env().await;
//!     // Build a Config and call cli::run...
//!     Ok(())
//! }
//! ```

pub mod cdn;
pub mod channels;
pub mod cli;
pub mod config;
pub mod management;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for operations that may fail.
///
/// Provider calls (HTTP requests, yt-dlp invocations) return this type; the
/// pipeline steps catch these errors at the call site and log them.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching {} for: {}", channel, query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal configuration problems found at startup. Everything
/// that can fail during the pipeline is reported with [`warning!`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for every recoverable per-item failure: a channel search that found
/// nothing, a download that failed, a file that could not be deleted.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
