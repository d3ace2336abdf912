//! Key-value store port
//!
//! Small persistent string store for client-side state that must survive
//! restarts (e.g. the list of newly registered profile entries).

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persistent key-value storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value; `None` if the key was never set
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Insert or replace a value
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}
