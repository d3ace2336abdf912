//! Taxi dispatch port
//!
//! Defines the interface for asking the dispatch backend for the taxi
//! nearest to a trip.

use async_trait::async_trait;
use domain::{Address, TaxiAssignment};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A taxi offered by the dispatch backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiCandidate {
    /// Vehicle license plate
    pub license_number: String,
    /// Driver's name
    pub driver_name: String,
    /// Driver's phone number
    pub driver_phone: String,
}

/// Dispatch answer for one trip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchQuote {
    /// Candidate taxis, nearest first
    pub taxis: Vec<TaxiCandidate>,
    /// Expected pickup time in seconds
    pub duration_secs: u64,
    /// Fare estimate in KRW
    pub fare: u64,
}

impl DispatchQuote {
    /// Assignment built from the nearest candidate, if any
    #[must_use]
    pub fn nearest_assignment(&self) -> Option<TaxiAssignment> {
        self.taxis.first().map(|taxi| TaxiAssignment {
            license_number: taxi.license_number.clone(),
            driver_name: taxi.driver_name.clone(),
            driver_phone: taxi.driver_phone.clone(),
            eta_seconds: self.duration_secs,
            fare: self.fare,
        })
    }
}

/// Port for taxi dispatch
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DispatchPort: Send + Sync {
    /// Ask for taxis near a trip, keyed by the destination address as entered
    async fn nearby_taxi(&self, destination: &Address) -> Result<DispatchQuote, ApplicationError>;
}
