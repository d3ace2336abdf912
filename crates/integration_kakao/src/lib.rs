//! Kakao map integration for TaxiCall
//!
//! Provides address geocoding via the
//! [Kakao Local API](https://developers.kakao.com/docs/latest/ko/local/dev-guide)
//! and driving directions via the
//! [Kakao Mobility directions API](https://developers.kakaomobility.com).
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern of the other integration crates.
//! [`AddressGeocoder`] resolves free-text addresses, implemented by
//! [`KakaoGeocodingClient`]. [`DirectionsClient`] requests a driving route,
//! implemented by [`KakaoDirectionsClient`]. Both authenticate with the same
//! REST API key from [`KakaoConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_kakao::{DirectionsClient, KakaoConfig, KakaoDirectionsClient};
//!
//! let config = KakaoConfig::default();
//! let client = KakaoDirectionsClient::new(&config)?;
//!
//! let route = client
//!     .get_route(Coordinate::inha_university(), Coordinate::new(126.7, 37.45)?)
//!     .await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod scalar;

pub use config::KakaoConfig;
pub use directions::{DirectionsClient, DrivingRoute, KakaoDirectionsClient};
pub use error::KakaoError;
pub use geocoding::{AddressGeocoder, KakaoGeocodingClient};
