//! Taxi dispatch integration for TaxiCall
//!
//! Asks the dispatch backend for the taxi nearest to a trip. The backend
//! keys the lookup on the destination address string and answers with the
//! candidate taxis, the expected pickup time, and the fare estimate.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_dispatch::{DispatchClient, DispatchConfig, HttpDispatchClient};
//!
//! let client = HttpDispatchClient::new(&DispatchConfig::default())?;
//! let quote = client.nearby_taxi("인천광역시 미추홀구 용현동 292-7").await?;
//!
//! if let Some(taxi) = quote.nearest() {
//!     println!("{} in {}s", taxi.license_number, quote.duration);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DispatchClient, HttpDispatchClient};
pub use config::DispatchConfig;
pub use error::DispatchError;
pub use models::{DispatchedTaxi, NearbyTaxiRequest, NearbyTaxiResponse};
