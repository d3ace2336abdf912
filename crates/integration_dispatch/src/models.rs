//! Dispatch wire types

use serde::{Deserialize, Deserializer, Serialize, de};

/// Body of `POST /taxi/nearby`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyTaxiRequest {
    /// Destination exactly as the user typed it
    pub destination_address: String,
}

/// A taxi offered by the dispatch backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchedTaxi {
    /// Vehicle license plate
    pub license_number: String,
    /// Driver's name
    pub driver_name: String,
    /// Driver's phone number
    pub driver_phone: String,
}

/// Response of `POST /taxi/nearby`
///
/// The backend spells the fare field `fair`; both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyTaxiResponse {
    /// Candidate taxis, nearest first
    #[serde(default)]
    pub taxi: Vec<DispatchedTaxi>,
    /// Expected pickup time in seconds, fractions rounded up
    #[serde(default, deserialize_with = "whole_seconds")]
    pub duration: u64,
    /// Fare estimate in won
    #[serde(default, alias = "fair")]
    pub fare: u64,
}

/// A duration as sent by the backend: integer, fractional, or numeric text
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Number(f64),
    Text(String),
}

fn whole_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = match RawSeconds::deserialize(deserializer)? {
        RawSeconds::Number(n) => n,
        RawSeconds::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| <D::Error as de::Error>::custom(format!("duration is not a number: {s}")))?,
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(<D::Error as de::Error>::custom(format!("duration out of range: {seconds}")));
    }

    // `as` saturates at u64::MAX for oversized values
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = seconds.ceil() as u64;
    Ok(whole)
}

impl NearbyTaxiResponse {
    /// The nearest taxi, if any was offered
    #[must_use]
    pub fn nearest(&self) -> Option<&DispatchedTaxi> {
        self.taxi.first()
    }
}
