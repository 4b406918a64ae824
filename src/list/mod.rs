//! The list handle: construct-then-query lifecycle over one published list.
//!
//! [`TrancoList`] composes identifier resolution, the idempotent download,
//! and the memoized rank lookup into a single value. Construction blocks
//! until the list CSV is present on disk (or fails); after that, rank
//! queries only touch the local file and the in-memory table.

mod rank;

pub use rank::{RankError, RankTable};

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::ListConfig;
use crate::download::{DownloadError, ListDownloader};
use crate::resolver::{ListIdResolver, ResolveError};
use crate::user_agent;

/// Enumerated size tags for published list snapshots.
///
/// Renders as the size segment of the download URL path and of the cache
/// file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ListScale {
    /// Top 1,000 domains.
    Top1k,
    /// Top 10,000 domains.
    Top10k,
    /// Top 100,000 domains.
    Top100k,
    /// Top 1,000,000 domains (the standard published list).
    Top1m,
    /// The full unabridged list.
    Full,
}

impl ListScale {
    /// The URL path segment and cache-file tag for this scale.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top1k => "1000",
            Self::Top10k => "10000",
            Self::Top100k => "100000",
            Self::Top1m => "1000000",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ListScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which list snapshot to use: date, subdomain policy, and scale.
///
/// Immutable once constructed; determines both the identifier query and the
/// cache file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSpec {
    date: String,
    include_subdomains: bool,
    scale: ListScale,
}

impl ListSpec {
    /// Creates a spec for the list published on `date` (`YYYY-MM-DD`).
    ///
    /// `include_subdomains` selects the FQDN list over the
    /// registered-domains (SLD) list.
    #[must_use]
    pub fn new(date: impl Into<String>, include_subdomains: bool, scale: ListScale) -> Self {
        Self {
            date: date.into(),
            include_subdomains,
            scale,
        }
    }

    /// The requested list date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether the FQDN list (subdomains included) was requested.
    #[must_use]
    pub fn include_subdomains(&self) -> bool {
        self.include_subdomains
    }

    /// The requested list scale.
    #[must_use]
    pub fn scale(&self) -> ListScale {
        self.scale
    }

    /// The list-type tag used in cache file names: `fqdn` when subdomains
    /// are included, `sld` otherwise.
    #[must_use]
    pub fn list_type(&self) -> &'static str {
        if self.include_subdomains { "fqdn" } else { "sld" }
    }

    /// The cache file name for this spec and a resolved identifier.
    fn file_name(&self, id: &str) -> String {
        format!(
            "{}_{}_{}_{}.csv",
            self.date,
            self.list_type(),
            self.scale.as_str(),
            id
        )
    }
}

/// Errors that can occur while constructing a list handle.
#[derive(Debug, Error)]
pub enum ListError {
    /// Identifier resolution failed; no download was attempted.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The initial download failed; the handle is not returned.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// A handle on one published list: resolved, downloaded, and queryable.
///
/// One value owns one spec, one resolved identifier, and one rank table.
/// Not designed for shared use: `rank` takes `&mut self`, and two instances
/// pointed at the same cache path may download redundantly (the rename is
/// atomic, so the cache file itself never corrupts).
#[derive(Debug)]
pub struct TrancoList {
    spec: ListSpec,
    id: String,
    config: ListConfig,
    ranks: RankTable,
}

impl TrancoList {
    /// Resolves the list identifier, downloads the CSV if it is not cached,
    /// and returns a ready handle, using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when resolution or the initial download fails.
    ///
    /// # Panics
    ///
    /// Panics when the cache directory cannot be created; an unusable cache
    /// root has no meaningful fallback.
    pub async fn new(spec: ListSpec) -> Result<Self, ListError> {
        Self::with_config(spec, ListConfig::default()).await
    }

    /// Same as [`new`](Self::new) with an explicit configuration (base URL,
    /// cache root, progress display).
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when resolution or the initial download fails.
    ///
    /// # Panics
    ///
    /// Panics when the cache directory cannot be created.
    #[allow(clippy::expect_used)]
    #[instrument(skip(spec, config), fields(date = %spec.date, scale = %spec.scale))]
    pub async fn with_config(spec: ListSpec, config: ListConfig) -> Result<Self, ListError> {
        debug!("obtaining tranco list id");
        let client = build_client();

        let resolver = ListIdResolver::new(client.clone(), config.base_url.clone());
        let id = resolver.resolve(&spec.date, spec.include_subdomains).await?;

        std::fs::create_dir_all(&config.cache_root)
            .expect("failed to create list cache directory");

        let path = cache_file_path(&config.cache_root, &spec, &id);
        let url = download_url(&config.base_url, &id, spec.scale);

        debug!(id = %id, "downloading tranco list");
        ListDownloader::new(client, config.progress)
            .ensure_downloaded(&url, &path)
            .await?;
        debug!(id = %id, "tranco list ready");

        Ok(Self {
            ranks: RankTable::new(path),
            spec,
            id,
            config,
        })
    }

    /// Returns the rank of `domain`.
    ///
    /// The first lookup scans the cached CSV; every line read on the way is
    /// memoized, so repeated queries are answered from memory.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::NotFound`] when the domain is absent from the
    /// entire list and [`RankError::Io`] when the cache file is unreadable.
    pub async fn rank(&mut self, domain: &str) -> Result<i64, RankError> {
        self.ranks.rank(domain).await
    }

    /// The download URL for this list, for inspection.
    #[must_use]
    pub fn url(&self) -> String {
        download_url(&self.config.base_url, &self.id, self.spec.scale)
    }

    /// The cache file path for this list.
    ///
    /// Pure: identical inputs give an identical path on every call, which
    /// is what lets file presence stand in for download bookkeeping.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        cache_file_path(&self.config.cache_root, &self.spec, &self.id)
    }

    /// The resolved list identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The spec this handle was constructed from.
    #[must_use]
    pub fn spec(&self) -> &ListSpec {
        &self.spec
    }
}

/// Builds the shared HTTP client carrying the project User-Agent.
///
/// No timeouts are configured: full-list downloads are large and
/// long-running, and there is no retry layer to pair a deadline with.
///
/// Panics if the client builder fails with this static configuration,
/// which should never happen in practice.
#[allow(clippy::expect_used)]
fn build_client() -> Client {
    Client::builder()
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
        .build()
        .expect("failed to build HTTP client with static configuration")
}

/// Builds the download URL for an identifier and scale.
///
/// The identifier is an opaque token; percent-encoding keeps it safe as a
/// path segment whatever the endpoint handed back.
fn download_url(base_url: &str, id: &str, scale: ListScale) -> String {
    format!(
        "{}/download/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(id),
        scale.as_str()
    )
}

/// The deterministic cache path for a (spec, identifier) pair.
fn cache_file_path(cache_root: &Path, spec: &ListSpec, id: &str) -> PathBuf {
    cache_root.join(spec.file_name(id))
}
