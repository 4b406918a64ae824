//! Tranco Rank Lookup Library
//!
//! This library answers "how popular is this domain?" using the Tranco
//! top-sites list. A [`TrancoList`] handle is constructed from a date, a
//! subdomain policy, and a list scale; construction resolves the published
//! list identifier, downloads the CSV into a local cache (once), and then
//! rank queries run against the cached file with in-memory memoization.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`resolver`] - List-identifier resolution against the daily list API
//! - [`download`] - Idempotent CSV download with rename-based durability
//! - [`list`] - The list handle: spec, orchestration, and rank lookups
//! - [`config`] - Injectable configuration (base URL, cache root)
//!
//! # Example
//!
//! ```no_run
//! use tranco::{ListScale, ListSpec, TrancoList};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = ListSpec::new("2024-05-01", false, ListScale::Top1m);
//! let mut list = TrancoList::new(spec).await?;
//! let rank = list.rank("example.com").await?;
//! println!("example.com is ranked {rank}");
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod list;
pub mod resolver;
mod user_agent;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::ListConfig;
pub use download::{DownloadError, ListDownloader};
pub use list::{ListError, ListScale, ListSpec, RankError, RankTable, TrancoList};
pub use resolver::{ListIdResolver, ResolveError};

/// Returns the crate version string (static build metadata).
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
