//! Dispatch backend HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::models::{NearbyTaxiRequest, NearbyTaxiResponse};

/// Trait for taxi dispatch backends
#[async_trait]
pub trait DispatchClient: Send + Sync {
    /// Ask for the taxis nearest to a trip ending at `destination_address`
    async fn nearby_taxi(
        &self,
        destination_address: &str,
    ) -> Result<NearbyTaxiResponse, DispatchError>;
}

/// HTTP implementation of [`DispatchClient`]
#[derive(Debug, Clone)]
pub struct HttpDispatchClient {
    client: Client,
    config: DispatchConfig,
}

impl HttpDispatchClient {
    /// Create a new dispatch client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DispatchConfig) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TaxiCall/0.1")
            .build()
            .map_err(|e| DispatchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn map_transport(&self, err: &reqwest::Error) -> DispatchError {
        if err.is_timeout() {
            DispatchError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DispatchError::ConnectionFailed(err.to_string())
        }
    }
}

#[async_trait]
impl DispatchClient for HttpDispatchClient {
    #[instrument(skip(self))]
    async fn nearby_taxi(
        &self,
        destination_address: &str,
    ) -> Result<NearbyTaxiResponse, DispatchError> {
        if destination_address.trim().is_empty() {
            return Err(DispatchError::InvalidRequest(
                "destination_address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/taxi/nearby", self.config.trimmed_base_url());
        let request = NearbyTaxiRequest {
            destination_address: destination_address.to_string(),
        };

        debug!("Requesting nearby taxi");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(DispatchError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Dispatch backend rejected request");
            return Err(DispatchError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::ParseError(e.to_string()))?;

        let quote: NearbyTaxiResponse =
            serde_json::from_str(&body).map_err(|e| DispatchError::ParseError(e.to_string()))?;

        debug!(
            candidates = quote.taxi.len(),
            duration = quote.duration,
            fare = quote.fare,
            "Received dispatch quote"
        );

        Ok(quote)
    }
}
