//! Ticker feed error types
//!
//! Every failure of an upstream poll is expressed as a `FeedError`.
//! Its `Display` text is what the dashboard shows as `last_error`.

use thiserror::Error;

/// Failures while fetching or decoding the 24h ticker feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-2xx status
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// No answer within the configured request timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Body could not be read or is not a ticker array
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for feed operations
pub type FeedResult<T> = std::result::Result<T, FeedError>;
