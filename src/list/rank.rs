//! Memoized rank lookups over a cached list file.
//!
//! The table records every `(domain, rank)` pair seen while scanning, so one
//! lookup can satisfy many later ones. A miss always re-reads the file from
//! the first line; the backing file is immutable once downloaded, which is
//! what makes the memoization sound. See DESIGN.md for the re-scan and
//! malformed-line policies, both preserved deliberately.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument, trace};

/// Errors that can occur during a rank lookup.
#[derive(Debug, Error)]
pub enum RankError {
    /// The domain does not appear anywhere in the list file.
    #[error("domain {domain} not found in tranco list")]
    NotFound {
        /// The domain that was queried.
        domain: String,
    },

    /// The list file could not be opened or read.
    #[error("error reading list file {path}: {source}")]
    Io {
        /// The list file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl RankError {
    /// Creates a not-found error for a queried domain.
    #[must_use]
    pub fn not_found(domain: impl Into<String>) -> Self {
        Self::NotFound {
            domain: domain.into(),
        }
    }

    /// Creates an IO error for the list file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// In-memory memo of `(domain, rank)` pairs backed by one list file.
///
/// The table starts empty and only grows; entries are never evicted or
/// invalidated. Domains match exactly and case-sensitively, as stored in
/// the file.
#[derive(Debug)]
pub struct RankTable {
    path: PathBuf,
    ranks: HashMap<String, i64>,
}

impl RankTable {
    /// Creates an empty table over the list file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ranks: HashMap::new(),
        }
    }

    /// The list file this table scans.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the rank of `domain`, scanning the file on a memo miss.
    ///
    /// The scan restarts from the first line on every miss and stops at the
    /// first match; every line read on the way is memoized, hit or not, so
    /// the file is never touched again for those domains. Malformed lines
    /// are absorbed as zero-rank entries rather than surfaced as errors.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::NotFound`] when the whole file holds no entry
    /// for `domain`, and [`RankError::Io`] when the file cannot be read.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn rank(&mut self, domain: &str) -> Result<i64, RankError> {
        if let Some(rank) = self.ranks.get(domain) {
            return Ok(*rank);
        }

        let file = File::open(&self.path)
            .await
            .map_err(|e| RankError::io(self.path.clone(), e))?;
        debug!(path = %self.path.display(), "scanning list file");

        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| RankError::io(self.path.clone(), e))?
        {
            let (rank, current) = parse_line(line.trim());
            trace!(domain = %current, rank, "scanned line");
            self.ranks.insert(current.clone(), rank);
            if current == domain {
                return Ok(rank);
            }
        }

        Err(RankError::not_found(domain))
    }
}

/// Splits a `rank,domain` line into its pair.
///
/// A line that does not split into exactly two fields yields the sentinel
/// `(0, "")`; a non-numeric rank field yields rank `0` with the domain
/// kept. Both cases are memoized like well-formed lines.
fn parse_line(line: &str) -> (i64, String) {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return (0, String::new());
    }

    let domain = parts[1].to_string();
    let rank = parts[0].parse::<i64>().unwrap_or(0);
    (rank, domain)
}
