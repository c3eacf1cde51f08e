//! Mock driver traits for unit tests.

use super::protocol::{DriverSession, LiveCursor};
use crate::error::DriverError;
use arrow_array::RecordBatch;
use arrow_schema::SchemaRef;
use mockall::mock;

mock! {
    pub Cursor {}

    impl LiveCursor for Cursor {
        fn execute(&mut self, sql: &str) -> Result<(), DriverError>;
        fn schema(&self) -> Option<SchemaRef>;
        fn fetch_all(&mut self) -> Result<Vec<RecordBatch>, DriverError>;
        fn fetch_many(&mut self, max_rows: usize) -> Result<Vec<RecordBatch>, DriverError>;
        fn close(&mut self);
        fn is_closed(&self) -> bool;
    }
}

mock! {
    pub Session {}

    impl DriverSession for Session {
        fn open_cursor(&mut self) -> Result<Box<dyn LiveCursor>, DriverError>;
        fn get_objects(&self) -> Result<Vec<RecordBatch>, DriverError>;
    }
}
