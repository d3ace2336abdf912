//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate outside the valid longitude/latitude range
    #[error("Invalid coordinate: x={x}, y={y}")]
    InvalidCoordinate { x: f64, y: f64 },

    /// Address is empty or otherwise unusable
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// State transition would break a snapshot invariant
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}
