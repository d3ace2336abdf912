//! Account adapter - Implements AccountPort using integration_account

use std::sync::Arc;

use application::{AccountPort, ApplicationError};
use async_trait::async_trait;
use domain::{NewAddress, NewProtector, UserProfile};
use integration_account::{AccountClient, AccountConfig, AccountError, HttpAccountClient};
use tracing::instrument;

/// Adapter for the account backend
pub struct AccountAdapter {
    client: Arc<dyn AccountClient>,
}

impl std::fmt::Debug for AccountAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountAdapter")
            .field("client", &"AccountClient")
            .finish()
    }
}

impl AccountAdapter {
    /// Create the adapter with an HTTP account client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &AccountConfig) -> Result<Self, ApplicationError> {
        let client = HttpAccountClient::new(config).map_err(map_account_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create the adapter around any account client
    #[must_use]
    pub fn with_client(client: Arc<dyn AccountClient>) -> Self {
        Self { client }
    }
}

/// Rejections carry the server's own message so the user sees it verbatim
fn map_account_error(err: AccountError) -> ApplicationError {
    match err {
        AccountError::Unauthorized(msg) => ApplicationError::NotAuthorized(msg),
        AccountError::Rejected { message, .. } => ApplicationError::ExternalService(message),
        AccountError::Timeout { timeout_secs } => {
            ApplicationError::Timeout(format!("account after {timeout_secs}s"))
        },
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl AccountPort for AccountAdapter {
    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<UserProfile, ApplicationError> {
        self.client.fetch_profile().await.map_err(map_account_error)
    }

    #[instrument(skip(self, address))]
    async fn add_address(&self, address: &NewAddress) -> Result<(), ApplicationError> {
        self.client
            .add_address(address)
            .await
            .map_err(map_account_error)
    }

    #[instrument(skip(self, protector))]
    async fn add_protector(&self, protector: &NewProtector) -> Result<(), ApplicationError> {
        self.client
            .add_protector(protector)
            .await
            .map_err(map_account_error)
    }
}
