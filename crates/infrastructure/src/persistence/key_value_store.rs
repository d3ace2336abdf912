//! SQLite key-value store implementation
//!
//! Implements the `KeyValueStorePort` port using SQLite.

use std::sync::Arc;

use application::{ApplicationError, KeyValueStorePort};
use async_trait::async_trait;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based string key-value store
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    /// Create a new SQLite key-value store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStorePort for SqliteKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![key, value],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Stored value");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::persistence::create_pool;

    fn setup_test_db() -> Arc<ConnectionPool> {
        Arc::new(create_pool(&StorageConfig::in_memory()).unwrap())
    }

    #[tokio::test]
    async fn get_missing_key() {
        let store = SqliteKeyValueStore::new(setup_test_db());
        assert_eq!(store.get("newData").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = SqliteKeyValueStore::new(setup_test_db());
        store.set("newData", "[]").await.unwrap();
        assert_eq!(store.get("newData").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = SqliteKeyValueStore::new(setup_test_db());
        store.set("newData", "[1]").await.unwrap();
        store.set("newData", "[1,2]").await.unwrap();
        assert_eq!(
            store.get("newData").await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            path: dir.path().join("kv.db").to_string_lossy().into_owned(),
            max_connections: 2,
        };

        {
            let store = SqliteKeyValueStore::new(Arc::new(create_pool(&config).unwrap()));
            store.set("newData", r#"[{"a":1}]"#).await.unwrap();
        }

        let store = SqliteKeyValueStore::new(Arc::new(create_pool(&config).unwrap()));
        assert_eq!(
            store.get("newData").await.unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = SqliteKeyValueStore::new(setup_test_db());
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }
}
