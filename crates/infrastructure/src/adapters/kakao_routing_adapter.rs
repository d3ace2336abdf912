//! Routing adapter - Implements RoutingPort using integration_kakao

use std::sync::Arc;

use application::{ApplicationError, RoutingPort};
use async_trait::async_trait;
use domain::{RoadSegment, RouteRequest};
use integration_kakao::{DirectionsClient, KakaoConfig, KakaoDirectionsClient, KakaoError};
use tracing::{debug, instrument};

use super::kakao_geocoding_adapter::map_kakao_error;

/// Adapter for driving directions via the Kakao Mobility API
pub struct KakaoRoutingAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for KakaoRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoRoutingAdapter")
            .field("client", &"DirectionsClient")
            .finish()
    }
}

impl KakaoRoutingAdapter {
    /// Create the adapter with a Kakao Mobility client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to
    /// initialize.
    pub fn new(config: &KakaoConfig) -> Result<Self, ApplicationError> {
        let client = KakaoDirectionsClient::new(config).map_err(map_kakao_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create the adapter around any directions client
    #[must_use]
    pub fn with_client(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingPort for KakaoRoutingAdapter {
    #[instrument(skip(self), fields(origin = %request.origin, destination = %request.destination))]
    async fn route(&self, request: &RouteRequest) -> Result<Vec<RoadSegment>, ApplicationError> {
        match self
            .client
            .get_route(request.origin, request.destination)
            .await
        {
            Ok(route) => {
                debug!(
                    roads = route.roads.len(),
                    distance_meters = ?route.distance_meters,
                    "Route received"
                );
                Ok(route.roads)
            },
            // The workflow reports an empty road list as "route not found"
            Err(e @ (KakaoError::NoRoute { .. } | KakaoError::ParseError(_))) => {
                debug!(reason = %e, "No usable route");
                Ok(Vec::new())
            },
            Err(e) => Err(map_kakao_error(e)),
        }
    }
}
