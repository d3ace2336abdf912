//! Routing port
//!
//! Requests a driving route between two coordinates.

use async_trait::async_trait;
use domain::{RoadSegment, RouteRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Road segments of the route, in travel order
    ///
    /// An empty list means the service found no route.
    async fn route(&self, request: &RouteRequest) -> Result<Vec<RoadSegment>, ApplicationError>;
}
