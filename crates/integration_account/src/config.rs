//! Account backend configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the account backend client
#[derive(Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Base URL of the account backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token of the signed-in user
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/auth".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AccountConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            base_url: "http://127.0.0.1:1".to_string(),
            access_token: Some(SecretString::from("test-access-token".to_string())),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Endpoint URL for a path below the base URL
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AccountConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/auth");
        assert!(config.access_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint() {
        let config = AccountConfig {
            base_url: "http://api.local/auth/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("/me"), "http://api.local/auth/me");
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", AccountConfig::for_testing());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-access-token"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = AccountConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
