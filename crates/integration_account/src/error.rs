//! Account error types

use thiserror::Error;

/// Errors that can occur when calling the account backend
#[derive(Debug, Error)]
pub enum AccountError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Missing or rejected credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Backend refused the request; `message` is the server's explanation
    #[error("{message} (HTTP {status})")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided `message`, or the reason phrase
        message: String,
    },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_leads_with_server_message() {
        let err = AccountError::Rejected {
            status: 409,
            message: "이미 등록된 주소입니다".to_string(),
        };
        assert_eq!(err.to_string(), "이미 등록된 주소입니다 (HTTP 409)");
    }
}
