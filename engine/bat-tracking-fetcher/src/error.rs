//! Error types for leaderboard retrieval

use thiserror::Error;

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while building or issuing a leaderboard query.
///
/// A malformed response body is deliberately not represented here: the
/// decoder degrades it to an empty result so one bad window cannot abort a
/// multi-window aggregation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Caller contract violation, raised before any network I/O
    #[error("player type must be 'batter' or 'pitcher', got {0:?}")]
    InvalidPlayerType(String),

    /// Network-level failure (connect, timeout, body read)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("leaderboard request failed with status {status}: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
