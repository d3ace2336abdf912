//! Taxi assignment entity

use std::fmt;

use serde::{Deserialize, Serialize};

/// The taxi the dispatch service assigned to a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiAssignment {
    /// Vehicle license plate
    pub license_number: String,
    /// Driver's name
    pub driver_name: String,
    /// Driver's phone number, as returned by the service
    pub driver_phone: String,
    /// Estimated time until the taxi arrives, in seconds
    pub eta_seconds: u64,
    /// Estimated fare in KRW
    pub fare: u64,
}

impl TaxiAssignment {
    /// ETA rounded up to whole minutes
    #[must_use]
    pub fn eta_minutes(&self) -> u32 {
        eta_minutes(self.eta_seconds)
    }

    /// Lines of the taxi info panel shown under the map
    #[must_use]
    pub fn panel_lines(&self) -> Vec<String> {
        vec![
            format!("택시 번호: {}", self.license_number),
            format!("기사님 이름: {}", self.driver_name),
            format!("기사님 전화번호: {}", self.driver_phone),
            format!("택시 도착 예정 시간: {} 분 후", self.eta_minutes()),
            format!("예상 요금: {} 원", self.fare),
        ]
    }
}

impl fmt::Display for TaxiAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.panel_lines().join("\n"))
    }
}

/// Convert a duration in seconds to whole minutes, rounding up
///
/// Saturates at `u32::MAX` minutes.
#[must_use]
pub fn eta_minutes(seconds: u64) -> u32 {
    u32::try_from(seconds.div_ceil(60)).unwrap_or(u32::MAX)
}
