//! Map coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A point on the map, as used by the geocoding and routing services
///
/// `x` is the longitude and `y` the latitude, matching the field names of
/// the upstream APIs and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (-180 to 180)
    x: f64,
    /// Latitude in degrees (-90 to 90)
    y: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if longitude is not in
    /// [-180, 180] or latitude is not in [-90, 90] (NaN is rejected too).
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y) {
            return Err(DomainError::InvalidCoordinate { x, y });
        }
        Ok(Self { x, y })
    }

    /// Create a coordinate without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Longitude
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Latitude
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Render as the `"x,y"` pair the directions API expects
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Inha University main gate, the fixed pickup point of the service
    #[must_use]
    pub const fn inha_university() -> Self {
        Self::new_unchecked(126.651_415_033_662, 37.448_202_040_832_1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let c = Coordinate::new(126.7, 37.45).expect("valid coordinate");
        assert!((c.x() - 126.7).abs() < f64::EPSILON);
        assert!((c.y() - 37.45).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(180.0, 90.0).is_ok());
        assert!(Coordinate::new(-180.0, -90.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(Coordinate::new(181.0, 0.0).is_err());
        assert!(Coordinate::new(-181.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(Coordinate::new(0.0, 91.0).is_err());
        assert!(Coordinate::new(0.0, -91.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 37.0).is_err());
        assert!(Coordinate::new(126.0, f64::NAN).is_err());
    }

    #[test]
    fn test_query_pair() {
        let c = Coordinate::new(126.65, 37.44).expect("valid");
        assert_eq!(c.to_query_pair(), "126.65,37.44");
    }

    #[test]
    fn test_display() {
        let c = Coordinate::new(126.65, 37.44).expect("valid");
        assert_eq!(c.to_string(), "(126.650000, 37.440000)");
    }

    #[test]
    fn test_serialization_uses_x_y() {
        let c = Coordinate::new(126.65, 37.44).expect("valid");
        let json = serde_json::to_string(&c).expect("serialize");
        assert_eq!(json, r#"{"x":126.65,"y":37.44}"#);

        let back: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }

    #[test]
    fn test_inha_university_origin() {
        let origin = Coordinate::inha_university();
        assert!((origin.x() - 126.651_415_033_662).abs() < 1e-9);
        assert!((origin.y() - 37.448_202_040_832_1).abs() < 1e-9);
        assert!(Coordinate::new(origin.x(), origin.y()).is_ok());
    }
}
