//! Domain entities - Route, taxi, workflow snapshot, and profile data

mod route;
mod taxi_assignment;
mod user_profile;
mod workflow_state;

pub use route::{RoadSegment, RouteRequest, RouteResult, flatten_polyline};
pub use taxi_assignment::{TaxiAssignment, eta_minutes};
pub use user_profile::{NewAddress, NewProtector, ProfileEntry, Protector, UserProfile};
pub use workflow_state::{StatusMessage, WorkflowState};
