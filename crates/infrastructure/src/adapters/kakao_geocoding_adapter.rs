//! Geocoding adapter - Implements GeocodingPort using integration_kakao

use std::sync::Arc;

use application::{ApplicationError, GeocodingPort};
use async_trait::async_trait;
use domain::{Address, Coordinate};
use integration_kakao::{AddressGeocoder, KakaoConfig, KakaoError, KakaoGeocodingClient};
use tracing::{debug, instrument};

/// Adapter for address geocoding via the Kakao Local API
pub struct KakaoGeocodingAdapter {
    client: Arc<dyn AddressGeocoder>,
}

impl std::fmt::Debug for KakaoGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoGeocodingAdapter")
            .field("client", &"AddressGeocoder")
            .finish()
    }
}

impl KakaoGeocodingAdapter {
    /// Create the adapter with a Kakao Local client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to
    /// initialize.
    pub fn new(config: &KakaoConfig) -> Result<Self, ApplicationError> {
        let client = KakaoGeocodingClient::new(config).map_err(map_kakao_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create the adapter around any geocoder
    #[must_use]
    pub fn with_client(client: Arc<dyn AddressGeocoder>) -> Self {
        Self { client }
    }
}

/// Map a Kakao error onto the application error space
pub(crate) fn map_kakao_error(err: KakaoError) -> ApplicationError {
    match err {
        KakaoError::Timeout { timeout_secs } => {
            ApplicationError::Timeout(format!("kakao after {timeout_secs}s"))
        },
        KakaoError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        KakaoError::Unauthorized(msg) => ApplicationError::NotAuthorized(msg),
        KakaoError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for KakaoGeocodingAdapter {
    #[instrument(skip(self), fields(address = %address))]
    async fn geocode(&self, address: &Address) -> Result<Option<Coordinate>, ApplicationError> {
        match self.client.geocode(address.as_str()).await {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(KakaoError::AddressNotFound(reason) | KakaoError::ParseError(reason)) => {
                debug!(%reason, "Address did not resolve");
                Ok(None)
            },
            Err(e) => Err(map_kakao_error(e)),
        }
    }
}
