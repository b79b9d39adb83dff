use std::path::Path;

use crate::{
    info,
    management::{DownloadLedger, UrlStore},
    success,
    types::DownloadReport,
    warning,
    youtube::MediaDownloader,
};

/// Downloads the audio of every stored URL that is not in the ledger yet.
///
/// The ledger is read once up front. A URL is recorded right after its
/// download succeeds; failed URLs stay unrecorded and are retried next run.
/// Duplicate lines in the store are not collapsed.
pub async fn download_pending<D>(
    store: &UrlStore,
    ledger: &DownloadLedger,
    downloader: &D,
    dest_dir: &Path,
) -> DownloadReport
where
    D: MediaDownloader,
{
    let mut report = DownloadReport::default();

    if let Err(e) = ledger.ensure_exists().await {
        warning!("Cannot create {}: {}", ledger.path().display(), e);
    }

    let downloaded = match ledger.load().await {
        Ok(set) => set,
        Err(e) => {
            warning!("Cannot read {}: {}", ledger.path().display(), e);
            Default::default()
        }
    };

    let urls = match store.read_all().await {
        Ok(urls) => urls,
        Err(e) => {
            warning!("Cannot read {}: {}", store.path().display(), e);
            return report;
        }
    };

    for url in urls {
        if downloaded.contains(&url) {
            info!("Already downloaded: {}", url);
            report.skipped.push(url);
            continue;
        }

        info!("Downloading audio from: {}", url);
        match downloader.fetch(&url, dest_dir).await {
            Ok(path) => {
                success!("Saved {}", path.display());
                if let Err(e) = ledger.record(&url).await {
                    warning!("Cannot record {} in {}: {}", url, ledger.path().display(), e);
                }
                report.downloaded.push(url);
            }
            Err(e) => {
                warning!("Error downloading {}: {}", url, e);
                report.failed.push(url);
            }
        }
    }

    report
}
