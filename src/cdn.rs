//! Plain file access for the daily lesson audio published on the CDN.

use std::{
    future::Future,
    ops::Deref,
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use tokio::io::AsyncWriteExt;

use crate::{Res, info};

pub trait FileFetcher {
    /// Returns `true` if `url` answers a HEAD request with 200 OK.
    fn probe(&self, url: &str) -> impl Future<Output = Res<bool>>;

    /// Downloads `url` to `dest` and returns the written path.
    fn download(&self, url: &str, dest: &Path) -> impl Future<Output = Res<PathBuf>>;
}

/// The last path segment of `url`, used as the local file name.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Builds the HTTP client shared by the API search and the CDN downloads.
///
/// `timeout` bounds connecting and each individual read, not the whole
/// transfer, so a large file that keeps streaming is never cut off.
///
/// # Errors
///
/// Returns the `reqwest` error if the TLS backend cannot be initialised.
///
/// # Example
///
/// ```
/// let client = build_client(Duration::from_secs(10))?;
/// let fetcher = HttpFetcher(client);
/// ```
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(timeout)
        .read_timeout(timeout)
        .build()
}

pub struct HttpFetcher(pub Client);

impl Deref for HttpFetcher {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FileFetcher for HttpFetcher {
    async fn probe(&self, url: &str) -> Res<bool> {
        let response = self.head(url).send().await?;
        Ok(response.status() == StatusCode::OK)
    }

    async fn download(&self, url: &str, dest: &Path) -> Res<PathBuf> {
        let mut response = self.get(url).send().await?.error_for_status()?;

        let pb = match response.content_length() {
            Some(len) => {
                let pb = ProgressBar::new(len);
                pb.set_style(
                    ProgressStyle::with_template(
                        "{spinner:.blue} {msg} [{bar:30.blue}] {bytes}/{total_bytes}",
                    )?
                    .progress_chars("=> "),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(
            dest.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        // partial transfers stay under a .part name
        let partial = dest.with_extension("part");
        if let Err(e) = stream_to_file(&mut response, &partial, &pb).await {
            pb.abandon();
            let _ = async_fs::remove_file(&partial).await;
            return Err(e);
        }

        async_fs::rename(&partial, dest).await?;
        pb.finish_and_clear();
        info!("Downloaded: {}", dest.display());

        Ok(dest.to_path_buf())
    }
}

async fn stream_to_file(
    response: &mut reqwest::Response,
    path: &Path,
    pb: &ProgressBar,
) -> Res<()> {
    let mut file = tokio::fs::File::create(path).await?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    Ok(())
}
