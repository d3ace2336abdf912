//! Dispatch adapter - Implements DispatchPort using integration_dispatch

use std::sync::Arc;

use application::{ApplicationError, DispatchPort, DispatchQuote, TaxiCandidate};
use async_trait::async_trait;
use domain::Address;
use integration_dispatch::{
    DispatchClient, DispatchConfig, DispatchError, DispatchedTaxi, HttpDispatchClient,
    NearbyTaxiResponse,
};
use tracing::{debug, instrument, warn};

/// Adapter for the taxi dispatch backend
pub struct DispatchAdapter {
    client: Arc<dyn DispatchClient>,
}

impl std::fmt::Debug for DispatchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchAdapter")
            .field("client", &"DispatchClient")
            .finish()
    }
}

impl DispatchAdapter {
    /// Create the adapter with an HTTP dispatch client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &DispatchConfig) -> Result<Self, ApplicationError> {
        let client = HttpDispatchClient::new(config).map_err(map_dispatch_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create the adapter around any dispatch client
    #[must_use]
    pub fn with_client(client: Arc<dyn DispatchClient>) -> Self {
        Self { client }
    }
}

fn map_dispatch_error(err: DispatchError) -> ApplicationError {
    match err {
        DispatchError::Timeout { timeout_secs } => {
            ApplicationError::Timeout(format!("dispatch after {timeout_secs}s"))
        },
        DispatchError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

fn to_candidate(taxi: DispatchedTaxi) -> TaxiCandidate {
    TaxiCandidate {
        license_number: taxi.license_number,
        driver_name: taxi.driver_name,
        driver_phone: taxi.driver_phone,
    }
}

fn to_quote(response: NearbyTaxiResponse) -> DispatchQuote {
    DispatchQuote {
        taxis: response.taxi.into_iter().map(to_candidate).collect(),
        duration_secs: response.duration,
        fare: response.fare,
    }
}

#[async_trait]
impl DispatchPort for DispatchAdapter {
    #[instrument(skip(self), fields(destination = %destination))]
    async fn nearby_taxi(&self, destination: &Address) -> Result<DispatchQuote, ApplicationError> {
        let response = match self.client.nearby_taxi(destination.as_str()).await {
            Ok(response) => response,
            Err(DispatchError::ParseError(reason)) => {
                warn!(%reason, "Dispatch answer could not be decoded");
                return Ok(DispatchQuote::default());
            },
            Err(e) => return Err(map_dispatch_error(e)),
        };

        debug!(candidates = response.taxi.len(), "Dispatch answered");
        Ok(to_quote(response))
    }
}
