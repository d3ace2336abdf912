//! Workflow configuration.

use std::time::Duration;

use application::WorkflowConfig;
use domain::Coordinate;
use serde::{Deserialize, Serialize};

/// Taxi-call workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowAppConfig {
    /// Pickup longitude
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,

    /// Pickup latitude
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,

    /// Pickup label shown on the call screen
    #[serde(default = "default_starting_address")]
    pub starting_address: String,

    /// Time budget for each external call in seconds
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,
}

fn default_origin_x() -> f64 {
    Coordinate::inha_university().x()
}

fn default_origin_y() -> f64 {
    Coordinate::inha_university().y()
}

fn default_starting_address() -> String {
    application::DEFAULT_STARTING_ADDRESS.to_string()
}

const fn default_call_timeout_secs() -> u64 {
    10
}

impl Default for WorkflowAppConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            starting_address: default_starting_address(),
            call_timeout_secs: default_call_timeout_secs(),
        }
    }
}

impl WorkflowAppConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is off the map or the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        Coordinate::new(self.origin_x, self.origin_y).map_err(|e| e.to_string())?;

        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Controller settings
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is off the map.
    pub fn to_workflow_config(&self) -> Result<WorkflowConfig, String> {
        self.validate()?;
        Ok(WorkflowConfig {
            origin: Coordinate::new(self.origin_x, self.origin_y).map_err(|e| e.to_string())?,
            call_timeout: Duration::from_secs(self.call_timeout_secs),
        })
    }
}
