//! Catalog tree of databases, schemas, relations and columns.
//!
//! The tree is rebuilt from the driver's `GetObjects` result on every
//! request; nothing is cached.

mod builder;
mod objects;

pub use builder::{build_catalog, is_excluded_database, EXCLUDED_DATABASES};
pub use objects::{parse_objects, ColumnObject, DatabaseObject, RelationObject, SchemaObject};

#[cfg(test)]
pub(crate) use objects::fixtures;

use serde::Serialize;

/// Type label of database nodes.
pub const DATABASE_LABEL: &str = "db";
/// Type label of schema nodes.
pub const SCHEMA_LABEL: &str = "s";
/// Type label of table nodes.
pub const TABLE_LABEL: &str = "t";
/// Type label of view nodes.
pub const VIEW_LABEL: &str = "v";

/// A node of the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Fully quoted, dot-joined path unique across the tree
    pub qualified_identifier: String,
    /// Quoted fragment to insert into generated SQL
    pub query_name: String,
    /// Unqualified display name
    pub label: String,
    /// `db`, `s`, `t`, `v` or a column type label
    pub type_label: String,
    /// Child nodes, empty for columns
    pub children: Vec<CatalogItem>,
}

/// Database catalog as a list of database nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    /// Find a top-level item by label.
    pub fn database(&self, label: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.label == label)
    }
}

impl CatalogItem {
    /// Find a direct child by label.
    pub fn child(&self, label: &str) -> Option<&CatalogItem> {
        self.children.iter().find(|item| item.label == label)
    }
}

/// Quote one identifier segment: wrap in `"` and double embedded `"`.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote each segment and join with `.`.
pub fn qualified_name(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| quote_identifier(segment))
        .collect::<Vec<_>>()
        .join(".")
}
