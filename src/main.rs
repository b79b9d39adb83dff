use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use lessoncli::{
    channels::{CHANNELS, validate_templates},
    cli,
    config::{self, Config, ExecutionMode},
    error, utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Search provider to use
    #[clap(long, value_enum, default_value_t = ExecutionMode::Live)]
    mode: ExecutionMode,

    /// Run as if today were this date (YYYY-MM-DD)
    #[clap(long)]
    date: Option<String>,

    /// Directory holding the audio files, urls.txt and downloaded.txt
    #[clap(long, default_value = ".")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli = Cli::parse();

    if let Err(e) = validate_templates(&CHANNELS) {
        error!("Invalid channel configuration: {}", e);
    }

    let config = match Config::from_env(cli.mode, cli.dir) {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let today = match utils::get_date_from_string(cli.date) {
        Ok(date) => date,
        Err(e) => error!("Invalid --date, expected YYYY-MM-DD: {}", e),
    };

    if let Err(e) = cli::run(&config, today).await {
        error!("Run aborted: {}", e);
    }
}
