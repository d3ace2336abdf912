//! Application services - Use case implementations

mod call_screen;
mod profile_service;
mod taxi_call_service;

pub use call_screen::{CallForm, CallScreen, CancelDialog, DEFAULT_STARTING_ADDRESS};
pub use profile_service::{NEW_ENTRIES_KEY, ProfileService};
pub use taxi_call_service::{TaxiCallService, WorkflowConfig};
