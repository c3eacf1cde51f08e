//! Driver session abstraction traits.
//!
//! The [`Connection`](crate::Connection) and [`ResultCursor`](crate::ResultCursor)
//! talk to the database only through these traits. The production
//! implementation sits on top of the ADBC driver manager; tests substitute
//! mocks.

use crate::error::DriverError;
use arrow_array::RecordBatch;
use arrow_schema::SchemaRef;

/// A live database connection owned by exactly one `Connection`.
pub trait DriverSession {
    /// Open a new cursor on this connection.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver cannot allocate a statement.
    fn open_cursor(&mut self) -> Result<Box<dyn LiveCursor>, DriverError>;

    /// Read the full object hierarchy (catalogs, schemas, tables, columns).
    ///
    /// # Returns
    ///
    /// The record batches produced by ADBC `GetObjects` at full depth, with
    /// no filters applied.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver call or batch reading fails.
    fn get_objects(&self) -> Result<Vec<RecordBatch>, DriverError>;
}

/// A live cursor owned by exactly one `ResultCursor`.
pub trait LiveCursor {
    /// Submit a SQL statement.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if preparation or execution fails.
    fn execute(&mut self, sql: &str) -> Result<(), DriverError>;

    /// Result schema of the last executed statement, `None` before a
    /// successful execute or after close.
    fn schema(&self) -> Option<SchemaRef>;

    /// Fetch every remaining row.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the cursor is closed or a batch cannot be read.
    fn fetch_all(&mut self) -> Result<Vec<RecordBatch>, DriverError>;

    /// Fetch at most `max_rows` of the remaining rows.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the cursor is closed or a batch cannot be read.
    fn fetch_many(&mut self, max_rows: usize) -> Result<Vec<RecordBatch>, DriverError>;

    /// Release the cursor. Idempotent.
    fn close(&mut self);

    /// Whether `close` has been called.
    fn is_closed(&self) -> bool;
}
