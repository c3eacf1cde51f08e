//! Driver session backed by the ADBC driver manager.
//!
//! Drivers are loaded dynamically: either from an explicit shared library
//! path or by library name through the registry.

use super::batches::BatchQueue;
use super::protocol::{DriverSession, LiveCursor};
use super::registry::{DriverReference, DriverType};
use crate::config::ConnectionParameters;
use crate::error::{ConnectionError, DriverError};
use adbc_core::options::{AdbcVersion, ObjectDepth, OptionDatabase, OptionValue};
use adbc_core::{Connection as _, Database as _, Driver as _, Statement as _};
use adbc_driver_manager::{ManagedConnection, ManagedDatabase, ManagedDriver, ManagedStatement};
use arrow_array::{RecordBatch, RecordBatchReader};
use arrow_schema::{ArrowError, SchemaRef};
use std::path::Path;

/// ADBC API version requested from loaded drivers.
const ADBC_VERSION: AdbcVersion = AdbcVersion::V110;

/// A connected driver manager session.
///
/// Fields drop in declaration order: the connection is released before the
/// database and the driver.
pub struct ManagedSession {
    connection: ManagedConnection,
    _database: ManagedDatabase,
    _driver: ManagedDriver,
}

impl std::fmt::Debug for ManagedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedSession").finish_non_exhaustive()
    }
}

/// Load the referenced driver and open a connection.
///
/// # Arguments
///
/// * `reference` - Driver library path or registered driver type
/// * `uri` - Connection string, passed under the driver's URI option
/// * `params` - Extra database options
///
/// # Errors
///
/// Returns `ConnectionError::DriverNotInstalled` when a registered driver
/// type is unsupported or its library cannot be loaded, and
/// `ConnectionError::ConnectFailed` for every other failure.
pub fn connect(
    reference: &DriverReference,
    uri: &str,
    params: &ConnectionParameters,
) -> Result<ManagedSession, ConnectionError> {
    let (mut driver, uri_option) = match reference {
        DriverReference::Path(path) => (load_from_path(path)?, OptionDatabase::Uri),
        DriverReference::Type(driver_type) => load_from_registry(driver_type)?,
    };

    let options = database_options(uri_option, uri, params);

    let database = driver.new_database_with_opts(options).map_err(|e| {
        tracing::warn!(error = %e.message, "Failed to create ADBC database");
        ConnectionError::ConnectFailed(e.message)
    })?;

    let connection = database.new_connection().map_err(|e| {
        tracing::warn!(error = %e.message, "Failed to open ADBC connection");
        ConnectionError::ConnectFailed(e.message)
    })?;

    tracing::info!(driver = %reference, "Connected through ADBC driver manager");

    Ok(ManagedSession {
        connection,
        _database: database,
        _driver: driver,
    })
}

fn load_from_path(path: &Path) -> Result<ManagedDriver, ConnectionError> {
    tracing::debug!(path = %path.display(), "Loading ADBC driver from path");

    ManagedDriver::load_dynamic_from_filename(path, None, ADBC_VERSION).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e.message, "Failed to load ADBC driver");
        ConnectionError::ConnectFailed(e.message)
    })
}

fn load_from_registry(
    driver_type: &DriverType,
) -> Result<(ManagedDriver, OptionDatabase), ConnectionError> {
    let spec = driver_type
        .spec()
        .ok_or_else(|| ConnectionError::DriverNotInstalled {
            component: driver_type.component(),
            message: format!("unsupported driver type '{}'", driver_type),
        })?;

    tracing::debug!(library = spec.library, "Loading ADBC driver by name");

    let driver = ManagedDriver::load_dynamic_from_name(spec.library, spec.entrypoint, ADBC_VERSION)
        .map_err(|e| {
            tracing::warn!(library = spec.library, error = %e.message, "ADBC driver is not installed");
            ConnectionError::DriverNotInstalled {
                component: spec.library.to_string(),
                message: e.message,
            }
        })?;

    Ok((driver, spec.uri_option))
}

/// Database options: the connection string under `uri_option` first, then
/// the extra parameters. A `uri` parameter never overrides the connection
/// string.
fn database_options(
    uri_option: OptionDatabase,
    uri: &str,
    params: &ConnectionParameters,
) -> Vec<(OptionDatabase, OptionValue)> {
    let mut options = vec![(uri_option.clone(), OptionValue::String(uri.to_string()))];
    options.extend(
        params
            .to_database_options()
            .into_iter()
            .filter(|(key, _)| *key != uri_option && *key != OptionDatabase::Uri),
    );
    options
}

impl DriverSession for ManagedSession {
    fn open_cursor(&mut self) -> Result<Box<dyn LiveCursor>, DriverError> {
        let statement = self.connection.new_statement()?;
        Ok(Box::new(ManagedCursor::new(statement)))
    }

    fn get_objects(&self) -> Result<Vec<RecordBatch>, DriverError> {
        tracing::debug!("Reading catalog objects");

        let reader = self
            .connection
            .get_objects(ObjectDepth::All, None, None, None, None, None)?;
        let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;
        Ok(batches)
    }
}

/// Cursor over one ADBC statement.
///
/// The whole result is read into a [`BatchQueue`] when the statement
/// executes.
pub struct ManagedCursor {
    statement: Option<ManagedStatement>,
    batches: BatchQueue,
}

impl ManagedCursor {
    fn new(statement: ManagedStatement) -> Self {
        Self {
            statement: Some(statement),
            batches: BatchQueue::new(),
        }
    }
}

impl LiveCursor for ManagedCursor {
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        let statement = self.statement.as_mut().ok_or(DriverError::CursorClosed)?;

        tracing::debug!(sql_len = sql.len(), "Executing statement");

        statement.set_sql_query(sql)?;
        let reader = statement.execute()?;
        let schema = reader.schema();
        self.batches.load(schema, reader);
        Ok(())
    }

    fn schema(&self) -> Option<SchemaRef> {
        self.batches.schema()
    }

    fn fetch_all(&mut self) -> Result<Vec<RecordBatch>, DriverError> {
        self.batches.fetch_all()
    }

    fn fetch_many(&mut self, max_rows: usize) -> Result<Vec<RecordBatch>, DriverError> {
        self.batches.fetch_many(max_rows)
    }

    fn close(&mut self) {
        if self.statement.take().is_some() {
            tracing::debug!("Closing cursor");
        }
        self.batches.close();
    }

    fn is_closed(&self) -> bool {
        self.batches.is_closed()
    }
}
