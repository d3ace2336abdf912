//! Free-text address value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A user-supplied address, trimmed and guaranteed non-empty
///
/// The content is opaque: it is passed verbatim to the geocoder and the
/// dispatch service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address {
    value: String,
}

impl Address {
    /// Create a new address
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the input is blank.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let raw = address.into();
        let value = raw.trim();
        if value.is_empty() {
            return Err(DomainError::InvalidAddress(
                "Address must not be empty".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for Address {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
