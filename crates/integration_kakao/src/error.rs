//! Kakao API error types

use thiserror::Error;

/// Errors that can occur when calling the Kakao APIs
#[derive(Debug, Error)]
pub enum KakaoError {
    /// Connection to the Kakao service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API key rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response from the Kakao service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit (daily quota) exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Address could not be resolved to a usable coordinate
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Directions service found no route
    #[error("No route found (code {result_code}): {message}")]
    NoRoute {
        /// Kakao `result_code` (0 means success)
        result_code: i64,
        /// Kakao `result_msg`
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl KakaoError {
    /// Map a transport error, distinguishing timeouts
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }

    /// Map a non-success HTTP status
    pub(crate) fn from_status(status: reqwest::StatusCode, retry_after: Option<u64>) -> Self {
        match status {
            reqwest::StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded {
                retry_after_secs: retry_after,
            },
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized(format!("HTTP {status}"))
            },
            _ => Self::RequestFailed(format!("HTTP {status}")),
        }
    }
}
