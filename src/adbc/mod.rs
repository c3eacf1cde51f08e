//! Adapter, connection and cursor interface.
//!
//! # Architecture
//!
//! The interface is organized into three components:
//! - `Adapter` - Validated configuration and connection factory
//! - `Connection` - Live database connection for executing statements and
//!   reading the catalog
//! - `ResultCursor` - Rows and column metadata of one executed statement
//!
//! # Example
//!
//! ```no_run
//! use adbc_adapter::{Adapter, AdapterConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let adapter = Adapter::new(AdapterConfig::new(":memory:").with_driver_type("sqlite"))?;
//! let mut connection = adapter.connect()?;
//!
//! if let Some(mut cursor) = connection.execute("SELECT 1 AS a")? {
//!     for column in cursor.columns()? {
//!         println!("{} [{}]", column.name, column.type_label);
//!     }
//!     let batch = cursor.fetchall()?;
//!     println!("{} rows", batch.num_rows());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod connection;
pub mod cursor;

// Re-export commonly used types
pub use adapter::Adapter;
pub use connection::Connection;
pub use cursor::{ColumnDescriptor, ResultCursor};
