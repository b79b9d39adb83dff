use chrono::NaiveDate;

use super::{daily, download, search};
use crate::{
    Res,
    cdn::{HttpFetcher, build_client},
    channels::CHANNELS,
    config::Config,
    info,
    management::{DownloadLedger, LessonFileManager, UrlStore},
    success, utils, warning,
    youtube::{media::YtDlpDownloader, search::Searcher, title::YtDlpTitleLookup},
};

/// Runs the whole pipeline once for `today`.
///
/// Order: period, stale file cleanup, channel search, audio downloads, daily
/// files. Only building the HTTP client can fail; every later step logs its
/// own failures and the pass always completes.
pub async fn run(config: &Config, today: NaiveDate) -> Res<()> {
    let period = utils::lesson_period(today);
    info!(
        "Current Year: {}, Quarter: {}, Lesson: {}",
        period.year, period.quarter, period.week
    );

    let client = build_client(config.request_timeout)?;

    match LessonFileManager::new(&config.work_dir)
        .cleanup_if_stale(period)
        .await
    {
        Ok(outcome) => info!("Cleanup: {:?}", outcome),
        Err(e) => warning!("Cannot scan {} for lesson files: {}", config.work_dir.display(), e),
    }

    let store = UrlStore::new(config.url_store_path());
    let results = search::search_and_save_urls(
        period,
        &CHANNELS,
        &YtDlpTitleLookup::new(&config.yt_dlp_path),
        &Searcher::from_config(config, client.clone()),
        &store,
    )
    .await;
    search::print_summary(&results);

    let report = download::download_pending(
        &store,
        &DownloadLedger::new(config.ledger_path()),
        &YtDlpDownloader::new(&config.yt_dlp_path),
        &config.work_dir,
    )
    .await;
    info!(
        "Audio: {} downloaded, {} already present, {} failed",
        report.downloaded.len(),
        report.skipped.len(),
        report.failed.len()
    );

    let outcomes = daily::fetch_weekly_daily_files(
        today,
        &config.daily_url_template,
        &config.work_dir,
        &HttpFetcher(client),
    )
    .await;
    info!("Daily files checked: {}", outcomes.len());

    success!("Finished {}", period);
    Ok(())
}
