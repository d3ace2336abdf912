//! Kakao Mobility directions client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, RoadSegment};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::scalar::Scalar;

/// A driving route as returned by the directions service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrivingRoute {
    /// Roads of the first section, in travel order
    pub roads: Vec<RoadSegment>,
    /// Total distance in meters, when reported
    pub distance_meters: Option<u64>,
    /// Total driving time in seconds, when reported
    pub duration_secs: Option<u64>,
}

/// Trait for directions providers
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request a driving route between two points
    async fn get_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DrivingRoute, KakaoError>;
}

/// Kakao Mobility directions client
pub struct KakaoDirectionsClient {
    client: Client,
    config: KakaoConfig,
    authorization: SecretString,
}

impl std::fmt::Debug for KakaoDirectionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoDirectionsClient")
            .field("base_url", &self.config.mobility_base_url)
            .field("priority", &self.config.priority)
            .finish_non_exhaustive()
    }
}

impl KakaoDirectionsClient {
    /// Create a new directions client
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

        Ok(Self {
            client,
            config: config.clone(),
            authorization,
        })
    }

    /// Parse a directions response body
    ///
    /// Only the first route and its first section are used. A missing
    /// structure or a non-zero `result_code` is reported as `NoRoute`.
    fn parse_directions_response(body: &str) -> Result<DrivingRoute, KakaoError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| KakaoError::ParseError(e.to_string()))?;

        let route = raw.routes.into_iter().next().ok_or_else(|| KakaoError::NoRoute {
            result_code: -1,
            message: "response contains no routes".to_string(),
        })?;

        let result_code = route.result_code.unwrap_or(0);
        if result_code != 0 {
            return Err(KakaoError::NoRoute {
                result_code,
                message: route.result_msg.unwrap_or_default(),
            });
        }

        let section = route.sections.into_iter().next().ok_or_else(|| KakaoError::NoRoute {
            result_code,
            message: "route contains no sections".to_string(),
        })?;

        let roads = section
            .roads
            .into_iter()
            .map(|road| {
                road.vertexes
                    .iter()
                    .map(Scalar::as_f64)
                    .collect::<Option<Vec<f64>>>()
                    .map(RoadSegment::new)
                    .ok_or_else(|| {
                        warn!("Road segment contains a non-numeric vertex scalar");
                        KakaoError::ParseError("non-numeric vertex in road segment".to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let summary = route.summary.unwrap_or_default();
        Ok(DrivingRoute {
            roads,
            distance_meters: summary.distance,
            duration_secs: summary.duration,
        })
    }
}

#[async_trait]
impl DirectionsClient for KakaoDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn get_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DrivingRoute, KakaoError> {
        let url = format!("{}/v1/directions", self.config.mobility_base_url);
        let origin_param = origin.to_query_pair();
        let destination_param = destination.to_query_pair();
        let params = [
            ("origin", origin_param.as_str()),
            ("destination", destination_param.as_str()),
            ("priority", self.config.priority.as_str()),
        ];

        debug!("Requesting driving route");

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

        let route = Self::parse_directions_response(&body)?;
        debug!(
            roads = route.roads.len(),
            distance = ?route.distance_meters,
            "Received driving route"
        );

        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    result_code: Option<i64>,
    result_msg: Option<String>,
    summary: Option<RawSummary>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSummary {
    distance: Option<u64>,
    duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    roads: Vec<RawRoad>,
}

#[derive(Debug, Deserialize)]
struct RawRoad {
    #[serde(default)]
    vertexes: Vec<Scalar>,
}
