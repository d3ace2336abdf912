//! Geocoding port
//!
//! Resolves a user-entered address to a map coordinate.

use async_trait::async_trait;
use domain::{Address, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to the coordinate of its best candidate
    ///
    /// Returns `Ok(None)` when the service answered but had no usable
    /// coordinate for the address. Transport and service failures are errors.
    async fn geocode(&self, address: &Address) -> Result<Option<Coordinate>, ApplicationError>;
}
