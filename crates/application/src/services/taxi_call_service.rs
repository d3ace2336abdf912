//! Taxi-call workflow controller
//!
//! Runs geocode, route and dispatch strictly in sequence and publishes an
//! immutable [`WorkflowState`] snapshot after every step. Observers follow
//! the snapshots through a `watch` channel.
//!
//! Every search gets a monotonic [`RequestId`]. A snapshot is only published
//! while its request is still the latest one issued, so when searches
//! overlap the last submitted search wins regardless of which one settles
//! last. Each external call is bounded by [`WorkflowConfig::call_timeout`].

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::{
    Address, Coordinate, RequestId, RouteRequest, RouteResult, StatusMessage, WorkflowState,
};
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::error::{ApplicationError, WorkflowError, WorkflowStage};
use crate::ports::{DispatchPort, GeocodingPort, RoutingPort};

/// Default time budget for a single external call in seconds
const DEFAULT_CALL_TIMEOUT_SECS: u64 = 10;

/// Workflow settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowConfig {
    /// Fixed pickup point every route starts from
    pub origin: Coordinate,
    /// Time budget for each external call
    pub call_timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            origin: Coordinate::inha_university(),
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        }
    }
}

/// Orchestrates a taxi call and owns the published workflow state
pub struct TaxiCallService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    dispatcher: Arc<dyn DispatchPort>,
    config: WorkflowConfig,
    sequence: AtomicU64,
    state: watch::Sender<WorkflowState>,
}

impl std::fmt::Debug for TaxiCallService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxiCallService")
            .field("config", &self.config)
            .field("sequence", &self.sequence.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl TaxiCallService {
    /// Create a controller with the default configuration
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        dispatcher: Arc<dyn DispatchPort>,
    ) -> Self {
        Self::with_config(geocoder, router, dispatcher, WorkflowConfig::default())
    }

    /// Create a controller with explicit settings
    #[must_use]
    pub fn with_config(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        dispatcher: Arc<dyn DispatchPort>,
        config: WorkflowConfig,
    ) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self {
            geocoder,
            router,
            dispatcher,
            config,
            sequence: AtomicU64::new(0),
            state,
        }
    }

    /// Current settings
    #[must_use]
    pub const fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Latest published snapshot
    #[must_use]
    pub fn current_state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Follow published snapshots; intermediate ones may be skipped by slow readers
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Clear the state back to the empty form
    ///
    /// Any request still in flight is superseded and its results dropped.
    pub fn reset(&self) {
        let superseded = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(WorkflowState::default());
        debug!(superseded, "Workflow state reset");
    }

    /// Run the full workflow for a destination
    ///
    /// Returns the final snapshot on success. Every failure has already been
    /// published as a status line by the time it is returned, except
    /// [`WorkflowError::Superseded`], whose results are discarded.
    ///
    /// # Errors
    ///
    /// See [`WorkflowError`] for the failure kinds.
    #[instrument(skip(self))]
    pub async fn request_taxi(&self, destination: &str) -> Result<WorkflowState, WorkflowError> {
        let address = match Address::new(destination) {
            Ok(address) => address,
            Err(e) => {
                debug!("Rejected empty destination");
                self.state.send_modify(|state| {
                    *state = state.with_status(None, StatusMessage::EmptyDestination);
                });
                return Err(WorkflowError::Validation(e.to_string()));
            },
        };

        let id = self.next_request_id();
        info!(request_id = %id, destination = %address, "Taxi call started");
        self.publish(id, |state| state.with_status(Some(id), StatusMessage::Searching))?;

        match self.run(id, &address).await {
            Ok(state) => {
                info!(request_id = %id, eta_minutes = ?state.eta_minutes, "Taxi call completed");
                Ok(state)
            },
            Err(err @ WorkflowError::Superseded { .. }) => {
                debug!(request_id = %id, "Discarding results of superseded request");
                Err(err)
            },
            Err(err) => {
                warn!(request_id = %id, error = %err, "Taxi call failed");
                match err.status() {
                    Some(status) => {
                        self.publish(id, |state| state.with_status(Some(id), status))?;
                        Err(err)
                    },
                    None => Err(err),
                }
            },
        }
    }

    async fn run(&self, id: RequestId, address: &Address) -> Result<WorkflowState, WorkflowError> {
        let destination = self
            .bounded(WorkflowStage::Geocode, self.geocoder.geocode(address))
            .await?;
        self.ensure_current(id)?;
        let destination = destination
            .ok_or_else(|| WorkflowError::Geocode(format!("no coordinate for {address}")))?;
        debug!(request_id = %id, %destination, "Destination geocoded");

        let request = RouteRequest::new(self.config.origin, destination);
        let segments = self
            .bounded(WorkflowStage::Route, self.router.route(&request))
            .await?;
        self.ensure_current(id)?;
        let route = RouteResult::from_segments(&request, &segments)
            .ok_or_else(|| WorkflowError::Route("route has no road points".to_string()))?;
        debug!(request_id = %id, points = route.len(), "Route found");

        let route_state = self.publish(id, |_| WorkflowState::with_route(id, route))?;

        let quote = self
            .bounded(WorkflowStage::Dispatch, self.dispatcher.nearby_taxi(address))
            .await?;
        self.ensure_current(id)?;
        let taxi = quote
            .nearest_assignment()
            .ok_or_else(|| WorkflowError::Dispatch("no nearby taxi".to_string()))?;

        let final_state = route_state
            .with_taxi(taxi)
            .map_err(|e| WorkflowError::Dispatch(e.to_string()))?;
        self.publish(id, |_| final_state)
    }

    fn next_request_id(&self) -> RequestId {
        RequestId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_current(&self, id: RequestId) -> bool {
        self.sequence.load(Ordering::SeqCst) == id.value()
    }

    fn ensure_current(&self, id: RequestId) -> Result<(), WorkflowError> {
        if self.is_current(id) {
            Ok(())
        } else {
            Err(WorkflowError::Superseded { request_id: id })
        }
    }

    /// Replace the snapshot if `id` is still the latest request
    ///
    /// The staleness check runs under the channel lock, so a snapshot can
    /// never land after a newer request has published its own.
    fn publish(
        &self,
        id: RequestId,
        update: impl FnOnce(&WorkflowState) -> WorkflowState,
    ) -> Result<WorkflowState, WorkflowError> {
        let mut published = None;
        self.state.send_if_modified(|state| {
            if !self.is_current(id) {
                return false;
            }
            let next = update(state);
            *state = next.clone();
            published = Some(next);
            true
        });
        published.ok_or(WorkflowError::Superseded { request_id: id })
    }

    async fn bounded<T>(
        &self,
        stage: WorkflowStage,
        call: impl Future<Output = Result<T, ApplicationError>>,
    ) -> Result<T, WorkflowError> {
        match timeout(self.config.call_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(WorkflowError::from_port(stage, &e)),
            Err(_) => Err(WorkflowError::Timeout { stage }),
        }
    }
}
