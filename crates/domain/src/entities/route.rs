//! Driving route entities
//!
//! The directions service returns a route as a list of road segments, each
//! carrying a flat array of interleaved longitude/latitude scalars. This
//! module turns that into the ordered polyline the map renders.

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// A route request from a fixed origin to a resolved destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Pickup point
    pub origin: Coordinate,
    /// Geocoded destination
    pub destination: Coordinate,
}

impl RouteRequest {
    /// Create a new route request
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// One road of a route section, as returned by the directions service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    /// Interleaved `[x0, y0, x1, y1, ...]` scalars
    pub vertexes: Vec<f64>,
}

impl RoadSegment {
    /// Create a segment from raw vertex scalars
    #[must_use]
    pub const fn new(vertexes: Vec<f64>) -> Self {
        Self { vertexes }
    }

    /// Number of complete points in this segment
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.vertexes.len() / 2
    }

    /// Pair the scalars into points, preserving order
    ///
    /// A trailing unpaired scalar is ignored.
    pub fn points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.vertexes
            .chunks_exact(2)
            .map(|pair| Coordinate::new_unchecked(pair[0], pair[1]))
    }
}

/// Flatten road segments into a single polyline
///
/// Segments are concatenated in response order.
#[must_use]
pub fn flatten_polyline(segments: &[RoadSegment]) -> Vec<Coordinate> {
    let capacity = segments.iter().map(RoadSegment::point_count).sum();
    let mut polyline = Vec::with_capacity(capacity);
    for segment in segments {
        polyline.extend(segment.points());
    }
    polyline
}

/// A renderable route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Pickup point
    pub origin: Coordinate,
    /// Destination point
    pub destination: Coordinate,
    /// Ordered path to draw on the map
    pub polyline: Vec<Coordinate>,
}

impl RouteResult {
    /// Build a route from the directions response segments
    ///
    /// Returns `None` when the segments yield no drawable point.
    #[must_use]
    pub fn from_segments(request: &RouteRequest, segments: &[RoadSegment]) -> Option<Self> {
        let polyline = flatten_polyline(segments);
        if polyline.is_empty() {
            return None;
        }
        Some(Self {
            origin: request.origin,
            destination: request.destination,
            polyline,
        })
    }

    /// Number of points in the polyline
    #[must_use]
    pub fn len(&self) -> usize {
        self.polyline.len()
    }

    /// Whether the polyline is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polyline.is_empty()
    }
}
