use std::path::Path;

use chrono::NaiveDate;

use crate::{
    cdn::{FileFetcher, file_name_from_url},
    info,
    types::{DailyOutcome, DailyStatus},
    utils, warning,
};

pub fn daily_url(template: &str, date: NaiveDate) -> String {
    template.replace("{date}", &date.format("%Y-%m-%d").to_string())
}

/// Fetches the daily lesson audio for each day of the current lesson week.
///
/// Every date from the last Saturday through the following Friday is probed;
/// a file is downloaded only when the CDN has it and no local copy exists.
/// Probe and download failures are logged per date.
pub async fn fetch_weekly_daily_files<F>(
    today: NaiveDate,
    url_template: &str,
    dest_dir: &Path,
    fetcher: &F,
) -> Vec<DailyOutcome>
where
    F: FileFetcher,
{
    let mut outcomes = Vec::with_capacity(7);

    for date in utils::build_week(today) {
        let url = daily_url(url_template, date);
        let status = fetch_one(date, &url, dest_dir, fetcher).await;
        outcomes.push(DailyOutcome { date, url, status });
    }

    outcomes
}

async fn fetch_one<F: FileFetcher>(
    date: NaiveDate,
    url: &str,
    dest_dir: &Path,
    fetcher: &F,
) -> DailyStatus {
    match fetcher.probe(url).await {
        Ok(true) => {}
        Ok(false) => {
            info!("File not found for {}. Skipping.", date);
            return DailyStatus::Unavailable;
        }
        Err(e) => {
            warning!("Error checking availability for {}: {}", url, e);
            return DailyStatus::Failed;
        }
    }

    let file_name = file_name_from_url(url)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.mp3", date.format("%Y-%m-%d")));
    let dest = dest_dir.join(&file_name);

    if async_fs::metadata(&dest).await.is_ok() {
        info!("File {} already exists. Skipping download.", file_name);
        return DailyStatus::AlreadyPresent;
    }

    match fetcher.download(url, &dest).await {
        Ok(_) => DailyStatus::Downloaded,
        Err(e) => {
            warning!("Error downloading {}: {}", url, e);
            DailyStatus::Failed
        }
    }
}
