//! Driver layer.
//!
//! Resolves which ADBC driver to load and exposes a live connection and
//! cursors through the [`DriverSession`] and [`LiveCursor`] traits.

mod batches;
mod managed;
mod protocol;
mod registry;

#[cfg(test)]
pub(crate) mod mocks;

pub use batches::BatchQueue;
pub use managed::{connect, ManagedCursor, ManagedSession};
pub use protocol::{DriverSession, LiveCursor};
pub use registry::{DriverReference, DriverSpec, DriverType};
