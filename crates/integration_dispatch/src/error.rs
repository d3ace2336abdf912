//! Dispatch error types

use thiserror::Error;

/// Errors that can occur when calling the dispatch backend
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Backend answered with a non-success status
    #[error("Request failed with HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Body or reason phrase
        message: String,
    },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Too many requests
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided)
        retry_after_secs: Option<u64>,
    },

    /// Invalid request input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
