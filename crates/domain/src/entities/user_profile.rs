//! User profile entities
//!
//! The account service owns the profile; the client only reads it and
//! registers additional addresses and protectors.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Guardian notified about the user's trips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protector {
    /// Protector's name
    pub name: String,
    /// Protector's email
    pub email: String,
}

/// Profile as returned by the account service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login identifier
    pub login_id: String,
    /// Display name
    pub name: String,
    /// Gender as stored by the service
    pub gender: String,
    /// Phone number as stored by the service
    pub phone: String,
    /// Age in years, if known
    pub age: Option<u32>,
    /// Primary protector
    pub represent_protector: Option<Protector>,
    /// Primary address
    pub represent_address: Option<String>,
}

/// An additional address registered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    /// Label, e.g. "집"
    pub address_name: String,
    /// Road-name address
    pub road_address: String,
    /// Unit / floor details
    pub detail_address: String,
}

impl NewAddress {
    /// Check the required fields
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the label or road address is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.address_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "address_name must not be empty".to_string(),
            ));
        }
        if self.road_address.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "road_address must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// An additional protector registered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProtector {
    /// Protector's name
    pub protector_name: String,
    /// Protector's email
    pub protector_email: String,
}

impl NewProtector {
    /// Check the required fields
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the name is blank or the
    /// email is not plausibly an address.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.protector_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "protector_name must not be empty".to_string(),
            ));
        }
        let email = self.protector_email.trim();
        let Some((local, domain)) = email.split_once('@') else {
            return Err(DomainError::ValidationError(format!(
                "protector_email is not an email address: {email}"
            )));
        };
        if local.is_empty() || !domain.contains('.') {
            return Err(DomainError::ValidationError(format!(
                "protector_email is not an email address: {email}"
            )));
        }
        Ok(())
    }
}

/// An entry in the locally persisted list of newly added profile data
///
/// Stored untagged so the persisted JSON is just the submitted object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileEntry {
    /// A registered address
    Address(NewAddress),
    /// A registered protector
    Protector(NewProtector),
}

impl ProfileEntry {
    /// One-line description for listings
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Address(a) => {
                format!("주소지 {}: {} {}", a.address_name, a.road_address, a.detail_address)
                    .trim_end()
                    .to_string()
            },
            Self::Protector(p) => format!("보호자 {} <{}>", p.protector_name, p.protector_email),
        }
    }
}
