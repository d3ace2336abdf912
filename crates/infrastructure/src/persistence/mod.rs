//! Persistence module
//!
//! SQLite-backed string key-value storage.

pub mod connection;
pub mod key_value_store;
pub mod migrations;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use key_value_store::SqliteKeyValueStore;
