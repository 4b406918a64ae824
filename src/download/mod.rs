//! Idempotent list download with rename-based durability.
//!
//! [`ListDownloader`] fetches a published list CSV at most once: when the
//! target path already exists the network is not touched at all (presence of
//! the file is the only freshness check; there is no checksum or expiry).
//! The body streams into a `.part` file beside the target and is renamed
//! into place after a complete copy, so a partial download never appears at
//! the final path.

mod error;

pub use error::DownloadError;

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};

/// Downloads list CSV files to their cache paths.
///
/// The downloader never inspects response status codes: whatever body the
/// endpoint serves for the download URL is persisted verbatim. List
/// identifiers come from a successful resolution, so in practice the body is
/// the CSV.
#[derive(Debug, Clone)]
pub struct ListDownloader {
    client: Client,
    progress: bool,
}

impl ListDownloader {
    /// Creates a downloader over a shared client.
    ///
    /// `progress` controls whether a byte progress bar is rendered while the
    /// body streams; it is purely observational and never affects the result.
    #[must_use]
    pub fn new(client: Client, progress: bool) -> Self {
        Self { client, progress }
    }

    /// Ensures the list served at `url` is present at `target`.
    ///
    /// Returns `Ok(true)` when a network download was performed and
    /// `Ok(false)` when the file already existed (idempotent fast path).
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] on request, copy, or rename failure. No
    /// partial file is left at `target` on any failure path; the in-flight
    /// `.part` file is removed best-effort.
    #[instrument(skip(self), fields(url = %url, target = %target.display()))]
    pub async fn ensure_downloaded(&self, url: &str, target: &Path) -> Result<bool, DownloadError> {
        if tokio::fs::metadata(target).await.is_ok() {
            debug!("cache file present, skipping download");
            return Ok(false);
        }

        info!(from = %url, to = %target.display(), "downloading list");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let content_length = response.content_length();
        let tmp_path = part_path(target);
        let mut file = File::create(&tmp_path)
            .await
            .map_err(|e| DownloadError::io(tmp_path.clone(), e))?;

        let bar = byte_progress(self.progress, content_length);
        let stream_result = stream_to_file(&mut file, response, url, &tmp_path, &bar).await;
        bar.finish_and_clear();
        drop(file);

        if stream_result.is_err() {
            debug!(path = %tmp_path.display(), "removing partial file after error");
            let _ = tokio::fs::remove_file(&tmp_path).await;
        }
        let bytes = stream_result?;

        tokio::fs::rename(&tmp_path, target)
            .await
            .map_err(|e| DownloadError::io(target.to_path_buf(), e))?;

        info!(filepath = %target.display(), bytes, "list downloaded");
        Ok(true)
    }
}

/// Streams the response body into `file`, feeding the progress bar per
/// chunk. Returns bytes written; extracted so the caller can clean up the
/// temp file on error.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    path: &Path,
    bar: &ProgressBar,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(path.to_path_buf(), e))?;

        bar.inc(chunk.len() as u64);
        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(path.to_path_buf(), e))?;

    Ok(bytes_written)
}

/// The in-flight temp path beside `target`.
///
/// Living in the same directory keeps the final rename on one filesystem,
/// which is what makes it atomic.
fn part_path(target: &Path) -> PathBuf {
    let mut raw = target.as_os_str().to_os_string();
    raw.push(".part");
    PathBuf::from(raw)
}

/// Builds the byte progress bar fed during streaming.
///
/// Hidden when progress is disabled; unbounded when the response carries no
/// Content-Length.
fn byte_progress(enabled: bool, content_length: Option<u64>) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = content_length.map_or_else(ProgressBar::no_length, ProgressBar::new);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {bytes}/{total_bytes} {bytes_per_sec}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
