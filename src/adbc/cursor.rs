//! Result cursor over a live driver cursor.
//!
//! A [`ResultCursor`] owns exactly one live cursor and closes it when
//! dropped, so the driver-side handle is released on every exit path.

use crate::driver::LiveCursor;
use crate::error::{DriverError, QueryError};
use crate::types::TypeMapper;
use arrow::compute::concat_batches;
use arrow_array::RecordBatch;
use arrow_schema::SchemaRef;
use serde::Serialize;

/// Name and short type label of a result column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub type_label: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
        }
    }
}

/// Cursor over the rows produced by one statement.
///
/// Created by [`Connection::execute`](crate::Connection::execute) only when
/// the statement returned result columns.
///
/// # Example
///
/// ```no_run
/// # use adbc_adapter::{Adapter, AdapterConfig};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let adapter = Adapter::new(AdapterConfig::new(":memory:").with_driver_type("sqlite"))?;
/// let mut connection = adapter.connect()?;
///
/// if let Some(cursor) = connection.execute("SELECT 1 AS a UNION ALL SELECT 2")? {
///     let mut cursor = cursor.set_limit(1);
///     let batch = cursor.fetchall()?;
///     assert_eq!(batch.num_rows(), 1);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResultCursor {
    /// Live driver cursor, closed on drop
    cursor: Box<dyn LiveCursor>,
    /// Maximum rows returned by `fetchall`, `None` for all rows
    limit: Option<usize>,
}

impl ResultCursor {
    /// Take ownership of a live cursor.
    pub(crate) fn new(cursor: Box<dyn LiveCursor>) -> Self {
        Self {
            cursor,
            limit: None,
        }
    }

    /// Submit `sql` on the owned cursor.
    pub(crate) fn execute(&mut self, sql: &str) -> Result<(), QueryError> {
        self.cursor.execute(sql).map_err(|e| {
            tracing::warn!(error = %e, "Statement execution failed");
            QueryError::ExecutionFailed(e.to_string())
        })
    }

    /// Column names and short type labels, in result order.
    ///
    /// Duplicate names are kept.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingResultMetadata` if the cursor carries no
    /// result schema.
    pub fn columns(&self) -> Result<Vec<ColumnDescriptor>, QueryError> {
        let schema = self
            .cursor
            .schema()
            .ok_or(QueryError::MissingResultMetadata)?;

        Ok(schema
            .fields()
            .iter()
            .map(|field| {
                ColumnDescriptor::new(field.name(), TypeMapper::short_label(field.data_type()))
            })
            .collect())
    }

    /// Limit the rows returned by [`fetchall`](Self::fetchall).
    pub fn set_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Current row limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Result schema, `None` once closed.
    pub fn schema(&self) -> Option<SchemaRef> {
        self.cursor.schema()
    }

    /// Fetch the remaining rows as a single record batch.
    ///
    /// With a limit set, at most that many rows are returned; the rest stay
    /// queued for later calls. The driver's full result is already held in
    /// memory once `execute` returns, because the ADBC reader borrows its
    /// statement and cannot outlive the execute call.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the cursor is closed or the driver fails
    /// while reading.
    pub fn fetchall(&mut self) -> Result<RecordBatch, QueryError> {
        if self.cursor.is_closed() {
            return Err(QueryError::CursorClosed);
        }

        let batches = match self.limit {
            Some(limit) => self.cursor.fetch_many(limit),
            None => self.cursor.fetch_all(),
        }
        .map_err(fetch_error)?;

        let schema = match batches.first() {
            Some(batch) => batch.schema(),
            None => self
                .cursor
                .schema()
                .ok_or(QueryError::MissingResultMetadata)?,
        };

        let batch = concat_batches(&schema, &batches)
            .map_err(|e| QueryError::FetchFailed(e.to_string()))?;

        tracing::debug!(rows = batch.num_rows(), limit = ?self.limit, "Fetched result");
        Ok(batch)
    }

    /// Release the live cursor. Later fetches fail.
    pub fn close(&mut self) {
        self.cursor.close();
    }

    /// Whether the live cursor has been released.
    pub fn is_closed(&self) -> bool {
        self.cursor.is_closed()
    }
}

fn fetch_error(err: DriverError) -> QueryError {
    tracing::warn!(error = %err, "Fetching results failed");
    match err {
        DriverError::CursorClosed => QueryError::CursorClosed,
        other => QueryError::FetchFailed(other.to_string()),
    }
}

impl Drop for ResultCursor {
    fn drop(&mut self) {
        self.cursor.close();
    }
}

impl std::fmt::Debug for ResultCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCursor")
            .field("limit", &self.limit)
            .field("closed", &self.cursor.is_closed())
            .finish()
    }
}
