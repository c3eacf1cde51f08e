//! Short type labels for result and catalog columns.

mod mapping;

pub use mapping::{TypeMapper, UNKNOWN_LABEL};
