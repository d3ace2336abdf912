//! Kakao API configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::KakaoError;

/// Configuration shared by the Kakao geocoding and directions clients
#[derive(Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// Base URL for the Kakao Local API (geocoding)
    #[serde(default = "default_local_base_url")]
    pub local_base_url: String,

    /// Base URL for the Kakao Mobility API (directions)
    #[serde(default = "default_mobility_base_url")]
    pub mobility_base_url: String,

    /// REST API key, sent as `Authorization: KakaoAK <key>`
    #[serde(default, skip_serializing)]
    pub rest_api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Geocoding cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Route search priority (RECOMMEND, TIME or DISTANCE)
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_local_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

fn default_mobility_base_url() -> String {
    "https://apis-navi.kakaomobility.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_cache_ttl_minutes() -> u64 {
    60
}

fn default_priority() -> String {
    "RECOMMEND".to_string()
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            local_base_url: default_local_base_url(),
            mobility_base_url: default_mobility_base_url(),
            rest_api_key: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            priority: default_priority(),
        }
    }
}

impl std::fmt::Debug for KakaoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoConfig")
            .field("local_base_url", &self.local_base_url)
            .field("mobility_base_url", &self.mobility_base_url)
            .field("rest_api_key", &self.rest_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .field("priority", &self.priority)
            .finish()
    }
}

impl KakaoConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            rest_api_key: Some(SecretString::from("test-rest-api-key".to_string())),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Point both APIs at the same base URL (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.local_base_url = base_url.to_string();
        self.mobility_base_url = base_url.to_string();
        self
    }

    /// Check if geocoding results are cached
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Time-to-live of cached geocoding results
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }

    /// Value of the `Authorization` header for every Kakao request
    pub(crate) fn authorization(&self) -> Result<SecretString, KakaoError> {
        let key = self
            .rest_api_key
            .as_ref()
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or_else(|| KakaoError::ConfigurationError("rest_api_key is required".to_string()))?;
        Ok(SecretString::from(format!("KakaoAK {}", key.expose_secret())))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.local_base_url.is_empty() {
            return Err("local_base_url must not be empty".to_string());
        }

        if self.mobility_base_url.is_empty() {
            return Err("mobility_base_url must not be empty".to_string());
        }

        if self.rest_api_key.is_none() {
            return Err("rest_api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !matches!(self.priority.as_str(), "RECOMMEND" | "TIME" | "DISTANCE") {
            return Err(format!(
                "priority must be RECOMMEND, TIME or DISTANCE, got {}",
                self.priority
            ));
        }

        Ok(())
    }
}
