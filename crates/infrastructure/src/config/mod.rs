//! Application configuration
//!
//! Split into focused sub-modules:
//! - `workflow`: pickup point and per-call time budget
//! - `storage`: SQLite key-value store settings
//! - `logging`: log filter and output format
//!
//! The Kakao, dispatch and account sections reuse the config structs of
//! their integration crates.
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `TAXICALL_*` environment variables, where a double underscore
//! separates section and key (`TAXICALL_KAKAO__REST_API_KEY`).

mod logging;
mod storage;
mod workflow;

use std::path::Path;

use integration_account::AccountConfig;
use integration_dispatch::DispatchConfig;
use integration_kakao::KakaoConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;
pub use workflow::WorkflowAppConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "TAXICALL";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Kakao Local / Mobility API configuration
    #[serde(default)]
    pub kakao: KakaoConfig,

    /// Dispatch backend configuration
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Account backend configuration
    #[serde(default)]
    pub account: AccountConfig,

    /// Workflow configuration
    #[serde(default)]
    pub workflow: WorkflowAppConfig,

    /// Key-value store configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (if given) and the environment
    ///
    /// Without a path, `config.toml` in the working directory is used when it
    /// exists. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., TAXICALL_DISPATCH__BASE_URL)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        debug!(?app, "Configuration loaded");
        Ok(app)
    }

    /// Validate every section
    ///
    /// Returns all problems found, prefixed with their section name.
    ///
    /// # Errors
    ///
    /// Returns the list of problems if any section is invalid.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let checks = [
            ("kakao", self.kakao.validate()),
            ("dispatch", self.dispatch.validate()),
            ("account", self.account.validate()),
            ("workflow", self.workflow.validate()),
            ("storage", self.storage.validate()),
        ];

        let problems: Vec<String> = checks
            .into_iter()
            .filter_map(|(section, result)| result.err().map(|e| format!("{section}: {e}")))
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
