//! Application-level errors

use std::fmt;

use domain::{DomainError, RequestId, StatusMessage};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External call did not complete in time
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// User not authorized
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Step of the taxi-call workflow that talks to an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// Address to coordinate
    Geocode,
    /// Origin/destination to road segments
    Route,
    /// Destination address to taxi assignment
    Dispatch,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Geocode => "geocode",
            Self::Route => "route",
            Self::Dispatch => "dispatch",
        };
        f.write_str(name)
    }
}

/// Why a taxi-call request did not end with an assigned taxi
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The destination could not be resolved to a coordinate
    #[error("Geocoding failed: {0}")]
    Geocode(String),

    /// No usable route between origin and destination
    #[error("Route not found: {0}")]
    Route(String),

    /// No taxi could be assigned
    #[error("Dispatch failed: {0}")]
    Dispatch(String),

    /// Network or unexpected upstream failure
    #[error("{stage} call failed: {message}")]
    Transport {
        /// Step that failed
        stage: WorkflowStage,
        /// Underlying error
        message: String,
    },

    /// An external call exceeded its time budget
    #[error("{stage} call timed out")]
    Timeout {
        /// Step that timed out
        stage: WorkflowStage,
    },

    /// A newer request (or a reset) replaced this one; its results were discarded
    #[error("Request {request_id} was superseded")]
    Superseded {
        /// The discarded request
        request_id: RequestId,
    },
}

impl WorkflowError {
    /// Status line shown for this error, if the request is still current
    #[must_use]
    pub fn status(&self) -> Option<StatusMessage> {
        match self {
            Self::Validation(_) => Some(StatusMessage::EmptyDestination),
            Self::Geocode(_) => Some(StatusMessage::AddressNotFound),
            Self::Route(_) => Some(StatusMessage::RouteNotFound),
            Self::Dispatch(_) => Some(StatusMessage::NoNearbyTaxi),
            Self::Transport { .. } => Some(StatusMessage::Failed),
            Self::Timeout { .. } => Some(StatusMessage::TimedOut),
            Self::Superseded { .. } => None,
        }
    }

    /// Wrap a port failure raised during `stage`
    pub(crate) fn from_port(stage: WorkflowStage, err: &ApplicationError) -> Self {
        match err {
            ApplicationError::Timeout(_) => Self::Timeout { stage },
            other => Self::Transport {
                stage,
                message: other.to_string(),
            },
        }
    }
}
