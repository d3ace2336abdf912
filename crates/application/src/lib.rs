//! Application layer - Use cases and orchestration
//!
//! Contains the taxi-call workflow controller, the cancel confirmation flow,
//! the profile use cases, and the port definitions that infrastructure
//! adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, WorkflowError, WorkflowStage};
pub use ports::*;
pub use services::*;
