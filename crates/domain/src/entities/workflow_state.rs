//! Taxi call workflow state
//!
//! A [`WorkflowState`] is an immutable snapshot of what the call screen
//! shows: the status line, the drawn route, and the assigned taxi. New
//! snapshots are derived from old ones; they are never mutated in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{RouteResult, TaxiAssignment};
use crate::errors::DomainError;
use crate::value_objects::RequestId;

/// User-facing status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusMessage {
    /// A search is in flight
    Searching,
    /// Route drawn, dispatch pending
    RouteFound,
    /// Nearest taxi assigned
    TaxiCalled {
        /// ETA in whole minutes
        eta_minutes: u32,
    },
    /// Dispatch returned no taxi
    NoNearbyTaxi,
    /// Submit attempted with an empty destination
    EmptyDestination,
    /// Geocoder could not resolve the destination
    AddressNotFound,
    /// Directions service returned no usable route
    RouteNotFound,
    /// An external call exceeded its time budget
    TimedOut,
    /// Transport or unexpected failure
    Failed,
}

impl StatusMessage {
    /// Whether this status reports a failure
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(
            self,
            Self::Searching | Self::RouteFound | Self::TaxiCalled { .. }
        )
    }

    /// Localized text shown to the user
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Searching => "경로를 검색하는 중입니다.".to_string(),
            Self::RouteFound => "경로가 성공적으로 생성되었습니다.".to_string(),
            Self::TaxiCalled { eta_minutes } => {
                format!("가장 가까운 택시가 호출되었습니다. 소요 시간: {eta_minutes} 분")
            },
            Self::NoNearbyTaxi => "가까운 택시를 찾지 못했습니다.".to_string(),
            Self::EmptyDestination => "도착지를 입력하세요.".to_string(),
            Self::AddressNotFound => "주소를 다시 확인하세요.".to_string(),
            Self::RouteNotFound => "경로를 찾을 수 없습니다. 다시 시도해주세요.".to_string(),
            Self::TimedOut => "요청 시간이 초과되었습니다. 다시 시도해주세요.".to_string(),
            Self::Failed => {
                "경로를 찾는 도중 오류가 발생했습니다. 다시 시도해주세요.".to_string()
            },
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Snapshot of the call screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Search that produced this snapshot, if any
    pub request_id: Option<RequestId>,
    /// Current status line
    pub status: Option<StatusMessage>,
    /// Route drawn on the map
    pub route: Option<RouteResult>,
    /// Assigned taxi; only present together with `route`
    pub taxi: Option<TaxiAssignment>,
    /// Taxi ETA in whole minutes
    pub eta_minutes: Option<u32>,
}

impl WorkflowState {
    /// Whether this is the empty form
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Same route and taxi, new status line
    #[must_use]
    pub fn with_status(&self, request_id: Option<RequestId>, status: StatusMessage) -> Self {
        Self {
            request_id: request_id.or(self.request_id),
            status: Some(status),
            ..self.clone()
        }
    }

    /// Fresh snapshot showing a newly found route and no taxi
    #[must_use]
    pub fn with_route(request_id: RequestId, route: RouteResult) -> Self {
        Self {
            request_id: Some(request_id),
            status: Some(StatusMessage::RouteFound),
            route: Some(route),
            taxi: None,
            eta_minutes: None,
        }
    }

    /// Attach the assigned taxi to the current route
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if no route is drawn.
    pub fn with_taxi(&self, taxi: TaxiAssignment) -> Result<Self, DomainError> {
        if self.route.is_none() {
            return Err(DomainError::InvalidStateTransition(
                "a taxi can only be shown together with a route".to_string(),
            ));
        }
        let eta_minutes = taxi.eta_minutes();
        Ok(Self {
            request_id: self.request_id,
            status: Some(StatusMessage::TaxiCalled { eta_minutes }),
            route: self.route.clone(),
            taxi: Some(taxi),
            eta_minutes: Some(eta_minutes),
        })
    }
}
