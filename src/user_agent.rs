//! Shared User-Agent string for resolution and download HTTP traffic.
//!
//! Single source for project URL and UA format so identifier resolution and
//! list download requests present consistent identification (good
//! citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/ar-hale/tranco";

/// Shared User-Agent for all outgoing requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("tranco/{version} (list-rank-client; +{PROJECT_UA_URL})")
}
