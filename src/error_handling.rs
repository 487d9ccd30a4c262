//! Error types for the collaborator layer.
//!
//! The core scoring and scanning functions never fail: invalid input is
//! represented as zero-trust Invalid results and unparseable markup triggers
//! the extraction fallback. The error types here belong to the layer around
//! the core: fetching pages and initializing the process.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the page-fetch collaborator.
///
/// These never reach the core; the CLI translates them into its own output
/// before any scanning happens.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} fetching {url}")]
    Status {
        /// The HTTP status code received.
        status: u16,
        /// The URL that was fetched.
        url: String,
    },

    /// The response body exceeded the configured size limit.
    #[error("Response body too large ({size} bytes, limit {limit})")]
    BodyTooLarge {
        /// Actual body size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}
