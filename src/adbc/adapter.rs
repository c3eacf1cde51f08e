//! Adapter implementation.
//!
//! The `Adapter` holds validated configuration and opens connections.

use crate::adbc::Connection;
use crate::config::{adapter_options, AdapterConfig, AdapterOption, ConnectionParameters};
use crate::driver::{self, DriverReference};
use crate::error::{ConfigError, ConnectionError};
use std::fmt;

/// Validated adapter configuration.
///
/// # Example
///
/// ```
/// use adbc_adapter::{Adapter, AdapterConfig};
///
/// let adapter = Adapter::new(
///     AdapterConfig::new("file.db")
///         .with_driver_type("sqlite")
///         .with_db_kwargs("adbc.sqlite.query.batch_rows=1024"),
/// )?;
/// assert_eq!(adapter.conn_str(), "file.db");
/// # Ok::<(), adbc_adapter::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct Adapter {
    conn_str: String,
    driver: DriverReference,
    parameters: ConnectionParameters,
}

impl Adapter {
    /// Validate a configuration.
    ///
    /// Checks, in order: exactly one connection string, a driver type or
    /// driver path (the path wins when both are set), and well-formed
    /// extra database options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first check that failed.
    pub fn new(config: AdapterConfig) -> Result<Self, ConfigError> {
        let AdapterConfig {
            mut conn_str,
            driver_type,
            driver_path,
            db_kwargs_str,
        } = config;

        if conn_str.len() != 1 {
            return Err(ConfigError::ConnectionStringCount { received: conn_str });
        }
        let conn_str = conn_str.remove(0);

        let driver = DriverReference::resolve(driver_type.as_deref(), driver_path)
            .ok_or(ConfigError::MissingDriver)?;

        let parameters = match db_kwargs_str.as_deref() {
            Some(kwargs) => kwargs.parse()?,
            None => ConnectionParameters::new(),
        };

        tracing::debug!(%driver, parameters = parameters.len(), "Adapter configured");

        Ok(Self {
            conn_str,
            driver,
            parameters,
        })
    }

    /// Load the driver and open a connection.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::DriverNotInstalled` if the driver type has
    /// no loadable library and `ConnectionError::ConnectFailed` if the
    /// driver rejects the connection.
    pub fn connect(&self) -> Result<Connection, ConnectionError> {
        let session = driver::connect(&self.driver, &self.conn_str, &self.parameters)?;
        Ok(Connection::from_session(Box::new(session)))
    }

    /// Options a host can present for this adapter.
    pub fn options() -> Vec<AdapterOption> {
        adapter_options()
    }

    /// The connection string.
    pub fn conn_str(&self) -> &str {
        &self.conn_str
    }

    /// The driver to load.
    pub fn driver(&self) -> &DriverReference {
        &self.driver
    }

    /// Extra database options.
    pub fn parameters(&self) -> &ConnectionParameters {
        &self.parameters
    }
}

// Connection strings may embed credentials and are never printed
impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("driver", &self.driver)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADBC adapter ({})", self.driver)
    }
}
