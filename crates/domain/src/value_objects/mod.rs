//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod coordinate;
mod request_id;

pub use address::Address;
pub use coordinate::Coordinate;
pub use request_id::RequestId;
