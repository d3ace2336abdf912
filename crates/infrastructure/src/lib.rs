//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Kakao, dispatch and account adapters, configuration loading,
//! logging setup, and the SQLite key-value store.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig, StorageConfig, WorkflowAppConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteKeyValueStore, create_pool};
pub use telemetry::{TelemetryError, init_logging};
