//! Buffered record batches of one executed statement.
//!
//! ADBC hands back a reader that borrows its statement, so a cursor cannot
//! hold the reader across calls. The result is drained into a
//! [`BatchQueue`] right after execution and fetches are served from there.
//! Read errors are queued in place and surface from the fetch that reaches
//! them.

use crate::error::DriverError;
use arrow_array::RecordBatch;
use arrow_schema::{ArrowError, SchemaRef};
use std::collections::VecDeque;

/// Pending batches plus the result schema.
#[derive(Debug, Default)]
pub struct BatchQueue {
    schema: Option<SchemaRef>,
    pending: VecDeque<Result<RecordBatch, ArrowError>>,
    closed: bool,
}

impl BatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queued result with a freshly executed one.
    pub fn load<I>(&mut self, schema: SchemaRef, batches: I)
    where
        I: IntoIterator<Item = Result<RecordBatch, ArrowError>>,
    {
        self.schema = Some(schema);
        self.pending = batches.into_iter().collect();
    }

    /// Result schema, `None` before `load` or after close.
    pub fn schema(&self) -> Option<SchemaRef> {
        if self.closed {
            return None;
        }
        self.schema.clone()
    }

    fn next_batch(&mut self) -> Result<Option<RecordBatch>, DriverError> {
        if self.closed {
            return Err(DriverError::CursorClosed);
        }
        match self.pending.pop_front() {
            Some(batch) => Ok(Some(batch?)),
            None => Ok(None),
        }
    }

    /// Drain every queued batch.
    pub fn fetch_all(&mut self) -> Result<Vec<RecordBatch>, DriverError> {
        let mut batches = Vec::new();
        while let Some(batch) = self.next_batch()? {
            batches.push(batch);
        }
        Ok(batches)
    }

    /// Take at most `max_rows` rows. A batch straddling the limit is split
    /// and its tail stays at the front of the queue.
    pub fn fetch_many(&mut self, max_rows: usize) -> Result<Vec<RecordBatch>, DriverError> {
        let mut batches = Vec::new();
        let mut remaining = max_rows;

        while remaining > 0 {
            let Some(batch) = self.next_batch()? else {
                break;
            };

            if batch.num_rows() > remaining {
                let rest = batch.slice(remaining, batch.num_rows() - remaining);
                self.pending.push_front(Ok(rest));
                batches.push(batch.slice(0, remaining));
                break;
            }

            remaining -= batch.num_rows();
            batches.push(batch);
        }

        Ok(batches)
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.pending.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adbc::ResultCursor;
    use crate::driver::LiveCursor;
    use crate::error::QueryError;
    use arrow_array::{Array, Int64Array};
    use arrow_schema::{DataType, Field, Schema};
    use std::sync::Arc;

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, false)]))
    }

    fn batch(ids: Vec<i64>) -> RecordBatch {
        RecordBatch::try_new(schema(), vec![Arc::new(Int64Array::from(ids))]).unwrap()
    }

    fn loaded(batches: Vec<RecordBatch>) -> BatchQueue {
        let mut queue = BatchQueue::new();
        queue.load(schema(), batches.into_iter().map(Ok));
        queue
    }

    fn ids(batches: &[RecordBatch]) -> Vec<i64> {
        batches
            .iter()
            .flat_map(|b| {
                let column = b.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
                column.values().to_vec()
            })
            .collect()
    }

    /// Serves a preloaded queue through the cursor interface.
    struct QueuedCursor(BatchQueue);

    impl LiveCursor for QueuedCursor {
        fn execute(&mut self, _sql: &str) -> Result<(), DriverError> {
            Ok(())
        }
        fn schema(&self) -> Option<SchemaRef> {
            self.0.schema()
        }
        fn fetch_all(&mut self) -> Result<Vec<RecordBatch>, DriverError> {
            self.0.fetch_all()
        }
        fn fetch_many(&mut self, max_rows: usize) -> Result<Vec<RecordBatch>, DriverError> {
            self.0.fetch_many(max_rows)
        }
        fn close(&mut self) {
            self.0.close()
        }
        fn is_closed(&self) -> bool {
            self.0.is_closed()
        }
    }

    #[test]
    fn test_fetch_many_splits_batch() {
        let mut queue = loaded(vec![batch(vec![1, 2, 3])]);

        let first = queue.fetch_many(2).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(ids(&first), vec![1, 2]);

        let rest = queue.fetch_all().unwrap();
        assert_eq!(ids(&rest), vec![3]);
        assert!(queue.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_many_on_batch_boundary() {
        let mut queue = loaded(vec![batch(vec![1, 2]), batch(vec![3, 4])]);

        let first = queue.fetch_many(2).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(ids(&first), vec![1, 2]);

        // No empty tail is queued
        let rest = queue.fetch_all().unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(ids(&rest), vec![3, 4]);
    }

    #[test]
    fn test_fetch_many_zero_rows() {
        let mut queue = loaded(vec![batch(vec![1, 2, 3])]);

        assert!(queue.fetch_many(0).unwrap().is_empty());
        assert_eq!(ids(&queue.fetch_all().unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_fetch_many_across_empty_batches() {
        let mut queue = loaded(vec![
            batch(vec![]),
            batch(vec![1, 2]),
            batch(vec![]),
            batch(vec![3]),
        ]);

        let first = queue.fetch_many(2).unwrap();
        assert_eq!(ids(&first), vec![1, 2]);

        let second = queue.fetch_many(5).unwrap();
        assert_eq!(ids(&second), vec![3]);
        assert!(queue.fetch_many(5).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_many_more_than_available() {
        let mut queue = loaded(vec![batch(vec![1]), batch(vec![2, 3])]);

        let all = queue.fetch_many(100).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }

    #[test]
    fn test_closed_queue() {
        let mut queue = loaded(vec![batch(vec![1])]);
        assert!(queue.schema().is_some());

        queue.close();
        assert!(queue.is_closed());
        assert!(queue.schema().is_none());
        assert!(matches!(queue.fetch_all(), Err(DriverError::CursorClosed)));
        assert!(matches!(queue.fetch_many(1), Err(DriverError::CursorClosed)));
    }

    #[test]
    fn test_load_replaces_previous_result() {
        let mut queue = loaded(vec![batch(vec![1, 2])]);
        queue.load(schema(), vec![Ok(batch(vec![7]))]);

        assert_eq!(ids(&queue.fetch_all().unwrap()), vec![7]);
    }

    #[test]
    fn test_queued_read_error_surfaces_on_reaching_fetch() {
        let mut queue = BatchQueue::new();
        queue.load(
            schema(),
            vec![
                Ok(batch(vec![1, 2])),
                Err(ArrowError::ComputeError("stream broke".to_string())),
            ],
        );

        let mut cursor = ResultCursor::new(Box::new(QueuedCursor(queue))).set_limit(1);

        assert_eq!(cursor.fetchall().unwrap().num_rows(), 1);
        assert_eq!(cursor.fetchall().unwrap().num_rows(), 1);

        match cursor.fetchall() {
            Err(QueryError::FetchFailed(message)) => assert!(message.contains("stream broke")),
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }
}
