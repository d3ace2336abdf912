//! Account backend HTTP client

use std::time::Duration;

use async_trait::async_trait;
use domain::{NewAddress, NewProtector, UserProfile};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::config::AccountConfig;
use crate::error::AccountError;
use crate::models::{RawErrorBody, RawMeResponse};

/// Trait for account backends
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Fetch the signed-in user's profile
    async fn fetch_profile(&self) -> Result<UserProfile, AccountError>;

    /// Register an additional address
    async fn add_address(&self, address: &NewAddress) -> Result<(), AccountError>;

    /// Register an additional protector
    async fn add_protector(&self, protector: &NewProtector) -> Result<(), AccountError>;
}

/// HTTP implementation of [`AccountClient`]
#[derive(Clone)]
pub struct HttpAccountClient {
    client: Client,
    config: AccountConfig,
}

impl std::fmt::Debug for HttpAccountClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAccountClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpAccountClient {
    /// Create a new account client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &AccountConfig) -> Result<Self, AccountError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TaxiCall/0.1")
            .build()
            .map_err(|e| AccountError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, AccountError> {
        let token = self
            .config
            .access_token
            .as_ref()
            .ok_or_else(|| AccountError::Unauthorized("no access token configured".to_string()))?;
        Ok(request.bearer_auth(token.expose_secret()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AccountError> {
        let response = self.authorized(request)?.send().await.map_err(|e| {
            if e.is_timeout() {
                AccountError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                AccountError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RawErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        warn!(status = status.as_u16(), %message, "Account backend rejected request");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AccountError::Unauthorized(message));
        }
        Err(AccountError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<UserProfile, AccountError> {
        let request = self.client.get(self.config.endpoint("/me"));
        let response = self.send(request).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AccountError::ParseError(e.to_string()))?;
        let raw: RawMeResponse =
            serde_json::from_str(&body).map_err(|e| AccountError::ParseError(e.to_string()))?;

        let profile = UserProfile::from(raw);
        debug!(login_id = %profile.login_id, "Fetched profile");
        Ok(profile)
    }

    #[instrument(skip(self, address), fields(name = %address.address_name))]
    async fn add_address(&self, address: &NewAddress) -> Result<(), AccountError> {
        let request = self
            .client
            .post(self.config.endpoint("/new/addresses"))
            .json(address);
        self.send(request).await?;
        debug!("Registered address");
        Ok(())
    }

    #[instrument(skip(self, protector), fields(name = %protector.protector_name))]
    async fn add_protector(&self, protector: &NewProtector) -> Result<(), AccountError> {
        let request = self
            .client
            .post(self.config.endpoint("/new/protectors"))
            .json(protector);
        self.send(request).await?;
        debug!("Registered protector");
        Ok(())
    }
}
