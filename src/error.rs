//! Error types for adbc-adapter.
//!
//! Errors are organized by the boundary that raises them: configuration
//! (adapter construction), connection (driver loading and connect), and
//! query (execute, fetch and catalog introspection). Failures coming from
//! the driver manager travel inside the crate as [`DriverError`] and are
//! translated at the connect and execute/fetch boundaries.

use std::fmt;
use thiserror::Error;

/// Top-level error type encompassing all possible errors.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Driver loading and connection errors
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Query execution, fetch and catalog errors
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors raised while validating adapter configuration, before any I/O.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Zero or several connection strings were supplied
    #[error("The ADBC adapter expects exactly one connection string. It received: {received:?}")]
    ConnectionStringCount { received: Vec<String> },

    /// Neither a driver type nor a driver path was supplied
    #[error(
        "The ADBC adapter expects either a driver type or a driver path and neither was provided."
    )]
    MissingDriver,

    /// A connection parameter is not of the form `key=value`
    #[error("Invalid connection parameter '{pair}': expected key=value")]
    MalformedParameter { pair: String },

    /// Adapter configuration could not be deserialized
    #[error("Failed to parse adapter configuration: {0}")]
    ParseError(String),

    /// Log file could not be opened
    #[error("Failed to open log file {path}: {message}")]
    LogFile { path: String, message: String },
}

/// Errors raised while loading a driver or connecting to the database.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The requested driver type has no loadable implementation
    #[error(
        "If a driver path is not provided then the required driver must be installed: {component} ({message})"
    )]
    DriverNotInstalled { component: String, message: String },

    /// The driver manager failed to open a database or connection
    #[error("{0}")]
    ConnectFailed(String),
}

/// Errors raised while executing statements, fetching results or reading
/// the catalog.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Statement could not be prepared or executed
    #[error("{0}")]
    ExecutionFailed(String),

    /// Result batches could not be fetched
    #[error("{0}")]
    FetchFailed(String),

    /// The live cursor has already been closed
    #[error("Cursor is closed")]
    CursorClosed,

    /// Column metadata requested from a cursor without a result set
    #[error("Result set metadata is not available")]
    MissingResultMetadata,

    /// Catalog introspection failed
    #[error("Failed to read the database catalog: {0}")]
    Catalog(String),

    /// Catalog record batches did not have the expected shape
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors related to decoding catalog record batches.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A required column is missing
    #[error("Expected column '{0}' in catalog result")]
    MissingColumn(String),

    /// A column has an unexpected Arrow type
    #[error("Column '{column}' has unexpected type {data_type}")]
    UnexpectedType { column: String, data_type: String },
}

/// Failures reported by the driver layer before translation.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error reported by the ADBC driver or driver manager
    #[error("{}", .0.message)]
    Adbc(#[from] adbc_core::error::Error),

    /// Error raised while reading Arrow record batches
    #[error(transparent)]
    Arrow(#[from] arrow_schema::ArrowError),

    /// Operation on a cursor that has already been closed
    #[error("Cursor is closed")]
    CursorClosed,
}

/// Error classification used by hosts to pick a title and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or missing adapter configuration
    Config,
    /// Requested driver has no resolvable implementation
    ModuleMissing,
    /// Driver connect failed
    Connection,
    /// Execute, fetch or catalog failed
    Query,
    /// Caller misuse of the cursor contract
    Internal,
}

impl ErrorKind {
    /// Fixed user-facing title for errors of this kind.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::Config => "Could not initialize the ADBC adapter.",
            ErrorKind::ModuleMissing => "Could not load the ADBC driver.",
            ErrorKind::Connection => "Could not connect to your database.",
            ErrorKind::Query => "Encountered an error while executing your query.",
            ErrorKind::Internal => "Internal adapter error.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Config => write!(f, "CONFIG"),
            ErrorKind::ModuleMissing => write!(f, "MODULE_MISSING"),
            ErrorKind::Connection => write!(f, "CONNECTION"),
            ErrorKind::Query => write!(f, "QUERY"),
            ErrorKind::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl AdapterError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::Config(e) => e.kind(),
            AdapterError::Connection(e) => e.kind(),
            AdapterError::Query(e) => e.kind(),
        }
    }

    /// Fixed user-facing title.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

impl ConfigError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Config
    }

    /// Fixed user-facing title.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

impl ConnectionError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectionError::DriverNotInstalled { .. } => ErrorKind::ModuleMissing,
            ConnectionError::ConnectFailed(_) => ErrorKind::Connection,
        }
    }

    /// Fixed user-facing title.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

impl QueryError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::MissingResultMetadata => ErrorKind::Internal,
            _ => ErrorKind::Query,
        }
    }

    /// Fixed user-facing title.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
