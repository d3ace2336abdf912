//! Kakao Local address geocoding client
//!
//! Converts free-form Korean addresses to map coordinates using the
//! `/v2/local/search/address.json` endpoint. Results are cached (moka, TTL
//! from config) to keep repeated searches for the same destination cheap.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use moka::future::Cache;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::scalar::Scalar;

/// Trait for address geocoders
#[async_trait]
pub trait AddressGeocoder: Send + Sync {
    /// Resolve a free-form address to the coordinate of its first candidate
    async fn geocode(&self, address: &str) -> Result<Coordinate, KakaoError>;
}

/// Kakao Local geocoding client
pub struct KakaoGeocodingClient {
    client: Client,
    config: KakaoConfig,
    authorization: SecretString,
    cache: Option<Cache<String, Coordinate>>,
}

impl std::fmt::Debug for KakaoGeocodingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoGeocodingClient")
            .field("base_url", &self.config.local_base_url)
            .field("caching", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl KakaoGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &KakaoConfig) -> Result<Self, KakaoError> {
        let authorization = config.authorization()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TaxiCall/0.1")
            .build()
            .map_err(|e| KakaoError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(config.cache_ttl())
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            authorization,
            cache,
        })
    }

    /// Parse the raw address search response and pick the first usable candidate
    fn parse_address_response(body: &str, address: &str) -> Result<Coordinate, KakaoError> {
        let raw: RawAddressResponse =
            serde_json::from_str(body).map_err(|e| KakaoError::ParseError(e.to_string()))?;

        let document = raw
            .documents
            .first()
            .ok_or_else(|| KakaoError::AddressNotFound(address.to_string()))?;

        document.coordinate().ok_or_else(|| {
            warn!(%address, "First geocoding candidate has no usable coordinate");
            KakaoError::AddressNotFound(address.to_string())
        })
    }
}

#[async_trait]
impl AddressGeocoder for KakaoGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, KakaoError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(KakaoError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        if let Some(cache) = &self.cache {
            if let Some(coordinate) = cache.get(address).await {
                debug!(%address, "Geocoding cache hit");
                return Ok(coordinate);
            }
        }

        let url = format!("{}/v2/local/search/address.json", self.config.local_base_url);
        let params = [("query", address), ("analyze_type", "similar")];

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                self.authorization.expose_secret(),
            )
            .query(&params)
            .send()
            .await
            .map_err(|e| KakaoError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(KakaoError::from_status(status, retry_after));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KakaoError::ParseError(e.to_string()))?;

        let coordinate = Self::parse_address_response(&body, address)?;

        if let Some(cache) = &self.cache {
            cache.insert(address.to_string(), coordinate).await;
        }
        debug!(%address, x = coordinate.x(), y = coordinate.y(), "Geocoded address");

        Ok(coordinate)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawAddressResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    x: Option<Scalar>,
    y: Option<Scalar>,
    address: Option<RawPoint>,
    road_address: Option<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    x: Option<Scalar>,
    y: Option<Scalar>,
}

impl RawPoint {
    fn coordinate(&self) -> Option<Coordinate> {
        to_coordinate(self.x.as_ref(), self.y.as_ref())
    }
}

impl RawDocument {
    /// Top-level `x`/`y`, falling back to the nested address records
    fn coordinate(&self) -> Option<Coordinate> {
        to_coordinate(self.x.as_ref(), self.y.as_ref())
            .or_else(|| self.address.as_ref().and_then(RawPoint::coordinate))
            .or_else(|| self.road_address.as_ref().and_then(RawPoint::coordinate))
    }
}

fn to_coordinate(x: Option<&Scalar>, y: Option<&Scalar>) -> Option<Coordinate> {
    let x = x?.as_f64()?;
    let y = y?.as_f64()?;
    Coordinate::new(x, y).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_coordinates() {
        let json = r#"{
            "meta": { "total_count": 1 },
            "documents": [{
                "address_name": "인천 미추홀구 용현동 292-7",
                "address_type": "REGION_ADDR",
                "x": "126.651415033662",
                "y": "37.4482020408321"
            }]
        }"#;
        let c = KakaoGeocodingClient::parse_address_response(json, "용현동").unwrap();
        assert!((c.x() - 126.651_415_033_662).abs() < 1e-9);
        assert!((c.y() - 37.448_202_040_832_1).abs() < 1e-9);
    }

    #[test]
    fn test_parse_numeric_coordinates() {
        let json = r#"{ "documents": [{ "x": 126.7, "y": 37.45 }] }"#;
        let c = KakaoGeocodingClient::parse_address_response(json, "x").unwrap();
        assert_eq!(c, Coordinate::new(126.7, 37.45).unwrap());
    }

    #[test]
    fn test_parse_falls_back_to_nested_address() {
        let json = r#"{ "documents": [{ "address": { "x": "126.6", "y": "37.4" } }] }"#;
        let c = KakaoGeocodingClient::parse_address_response(json, "x").unwrap();
        assert_eq!(c, Coordinate::new(126.6, 37.4).unwrap());
    }

    #[test]
    fn test_parse_empty_documents() {
        let json = r#"{ "meta": { "total_count": 0 }, "documents": [] }"#;
        let result = KakaoGeocodingClient::parse_address_response(json, "없는주소");
        assert!(matches!(result, Err(KakaoError::AddressNotFound(_))));
    }

    #[test]
    fn test_parse_missing_documents_field() {
        let result = KakaoGeocodingClient::parse_address_response("{}", "x");
        assert!(matches!(result, Err(KakaoError::AddressNotFound(_))));
    }

    #[test]
    fn test_parse_unusable_coordinate() {
        let json = r#"{ "documents": [{ "x": "east", "y": "37.4" }] }"#;
        let result = KakaoGeocodingClient::parse_address_response(json, "x");
        assert!(matches!(result, Err(KakaoError::AddressNotFound(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = KakaoGeocodingClient::parse_address_response("not json", "x");
        assert!(matches!(result, Err(KakaoError::ParseError(_))));
    }

    #[test]
    fn test_new_requires_key() {
        let result = KakaoGeocodingClient::new(&KakaoConfig::default());
        assert!(matches!(result, Err(KakaoError::ConfigurationError(_))));
    }
}
