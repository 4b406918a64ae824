//! Error types for list-identifier resolution.
//!
//! This module defines structured errors for the daily list id lookup,
//! providing context-rich error messages for debugging and user feedback.

use thiserror::Error;

/// Errors that can occur while resolving a list identifier.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network-level error reaching the resolution endpoint (DNS,
    /// connection refused, TLS errors, etc.)
    #[error("network error resolving list id from {url}: {source}")]
    Network {
        /// The resolution URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-200 status.
    #[error("HTTP status code {status} resolving list id from {url}")]
    HttpStatus {
        /// The resolution URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The endpoint has no list published for the requested date.
    #[error("no list id for {date}, api returns null")]
    NoList {
        /// The requested list date.
        date: String,
    },

    /// The endpoint reported an internal error in the response body.
    #[error("no list id for {date}, api returns 500 Internal Server Error")]
    ServerError {
        /// The requested list date.
        date: String,
    },

    /// The response body could not be read.
    #[error("error reading list id response from {url}: {source}")]
    Body {
        /// The resolution URL.
        url: String,
        /// The underlying read error.
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL is malformed.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The base URL that failed to parse.
        url: String,
    },
}

impl ResolveError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a no-list error for a date the API has no snapshot for.
    pub fn no_list(date: impl Into<String>) -> Self {
        Self::NoList { date: date.into() }
    }

    /// Creates a server-error for a date the API failed on.
    pub fn server_error(date: impl Into<String>) -> Self {
        Self::ServerError { date: date.into() }
    }

    /// Creates a body read error.
    pub fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>) -> Self {
        Self::InvalidBaseUrl { url: url.into() }
    }
}
