//! Adapter configuration.
//!
//! An [`AdapterConfig`] carries the raw user settings: connection string(s),
//! driver type or path, and extra database options. Validation happens when
//! the config is turned into an [`Adapter`](crate::Adapter).

mod options;
mod params;

pub use options::{adapter_options, AdapterOption, OptionKind};
pub use params::{ConnectionParameters, PAIR_DELIMITER};

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Raw adapter settings.
///
/// Deserializes from kebab-case keys (`conn-str`, `driver-type`,
/// `driver-path`, `db-kwargs-str`); unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AdapterConfig {
    /// Connection strings; exactly one is required
    pub conn_str: Vec<String>,
    /// Name of a registered driver (`postgresql`, `sqlite`, ...)
    pub driver_type: Option<String>,
    /// Path to a driver shared library
    pub driver_path: Option<PathBuf>,
    /// `;`-separated `key=value` database options
    pub db_kwargs_str: Option<String>,
}

impl AdapterConfig {
    /// Create a configuration for a single connection string.
    pub fn new(conn_str: impl Into<String>) -> Self {
        Self {
            conn_str: vec![conn_str.into()],
            ..Default::default()
        }
    }

    /// Set the driver type.
    pub fn with_driver_type(mut self, driver_type: impl Into<String>) -> Self {
        self.driver_type = Some(driver_type.into());
        self
    }

    /// Set the driver library path.
    pub fn with_driver_path(mut self, driver_path: impl Into<PathBuf>) -> Self {
        self.driver_path = Some(driver_path.into());
        self
    }

    /// Set the extra database options string.
    pub fn with_db_kwargs(mut self, db_kwargs: impl Into<String>) -> Self {
        self.db_kwargs_str = Some(db_kwargs.into());
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the JSON is invalid or a key has
    /// the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a configuration from connection strings and a flat map of host
    /// options. Unknown options are ignored.
    pub fn from_options(conn_str: Vec<String>, options: &IndexMap<String, String>) -> Self {
        Self {
            conn_str,
            driver_type: options.get("driver-type").cloned(),
            driver_path: options.get("driver-path").map(PathBuf::from),
            db_kwargs_str: options.get("db-kwargs-str").cloned(),
        }
    }
}
