//! Account port
//!
//! Reads the user profile and registers additional profile data with the
//! account backend.

use async_trait::async_trait;
use domain::{NewAddress, NewProtector, UserProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the account/profile backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Fetch the signed-in user's profile
    async fn fetch_profile(&self) -> Result<UserProfile, ApplicationError>;

    /// Register an additional address
    async fn add_address(&self, address: &NewAddress) -> Result<(), ApplicationError>;

    /// Register an additional protector
    async fn add_protector(&self, protector: &NewProtector) -> Result<(), ApplicationError>;
}
