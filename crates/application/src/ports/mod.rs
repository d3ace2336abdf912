//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod account_port;
mod dispatch_port;
mod geocoding_port;
mod key_value_store;
mod routing_port;

#[cfg(test)]
pub use account_port::MockAccountPort;
pub use account_port::AccountPort;
#[cfg(test)]
pub use dispatch_port::MockDispatchPort;
pub use dispatch_port::{DispatchPort, DispatchQuote, TaxiCandidate};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use key_value_store::MockKeyValueStorePort;
pub use key_value_store::KeyValueStorePort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
