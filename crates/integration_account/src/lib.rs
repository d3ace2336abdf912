//! Account backend integration for TaxiCall
//!
//! Reads the signed-in user's profile (`GET /me`) and registers additional
//! addresses and protectors (`POST /new/addresses`, `POST /new/protectors`).
//! Requests are authenticated with a bearer token.

mod client;
mod config;
mod error;
mod models;

pub use client::{AccountClient, HttpAccountClient};
pub use config::AccountConfig;
pub use error::AccountError;
