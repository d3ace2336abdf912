//! Domain layer for TaxiCall
//!
//! Contains the coordinate and route value types, the taxi assignment,
//! the workflow state snapshot, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
