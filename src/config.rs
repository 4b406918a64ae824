//! Injectable configuration for list handles.
//!
//! This module centralizes the knobs a [`TrancoList`](crate::TrancoList)
//! needs from its environment: which API host to talk to, where the CSV
//! cache lives, and whether downloads render a progress bar. Passing these
//! in explicitly (instead of reading environment state inside the download
//! path) keeps every component testable against temp directories and mock
//! servers.

use std::path::PathBuf;

/// Default Tranco API base URL, serving both the resolution and download
/// endpoints.
pub const DEFAULT_BASE_URL: &str = "https://tranco-list.eu";

/// Directory name of the per-user cache root.
const CACHE_DIR_NAME: &str = ".tranco";

/// Configuration for a list handle.
///
/// All fields are public; construct with [`Default`] and override what the
/// caller needs:
///
/// ```
/// use tranco::ListConfig;
///
/// let config = ListConfig {
///     cache_root: std::env::temp_dir().join("tranco-cache"),
///     ..ListConfig::default()
/// };
/// # drop(config);
/// ```
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Base URL for the resolution and download endpoints.
    pub base_url: String,
    /// Directory downloaded CSV files are cached under.
    pub cache_root: PathBuf,
    /// Whether to render a byte progress bar during downloads.
    pub progress: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_root: default_cache_root(),
            progress: true,
        }
    }
}

/// Resolves the default cache root: `.tranco` under the user's home
/// directory, falling back to the system temp directory when no home
/// directory is available.
#[must_use]
pub fn default_cache_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CACHE_DIR_NAME)
}
