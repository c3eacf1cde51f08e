//! Catalog tree construction from decoded objects.

use super::objects::{ColumnObject, DatabaseObject, RelationObject, SchemaObject};
use super::{
    qualified_name, quote_identifier, Catalog, CatalogItem, DATABASE_LABEL, SCHEMA_LABEL,
    TABLE_LABEL, VIEW_LABEL,
};
use crate::types::TypeMapper;

/// Template databases never shown in the catalog.
pub const EXCLUDED_DATABASES: [&str; 2] = ["template0", "template1"];

/// Whether a database is hidden from the catalog.
pub fn is_excluded_database(name: &str) -> bool {
    EXCLUDED_DATABASES.contains(&name)
}

/// Build the catalog tree, dropping excluded databases. Sibling order
/// follows the input.
pub fn build_catalog(databases: &[DatabaseObject]) -> Catalog {
    let items = databases
        .iter()
        .filter(|db| !is_excluded_database(&db.name))
        .map(database_item)
        .collect();
    Catalog { items }
}

fn database_item(db: &DatabaseObject) -> CatalogItem {
    let id = quote_identifier(&db.name);
    CatalogItem {
        qualified_identifier: id.clone(),
        query_name: id,
        label: db.name.clone(),
        type_label: DATABASE_LABEL.to_string(),
        children: db
            .schemas
            .iter()
            .map(|schema| schema_item(&db.name, schema))
            .collect(),
    }
}

fn schema_item(db: &str, schema: &SchemaObject) -> CatalogItem {
    let id = qualified_name(&[db, schema.name.as_str()]);
    CatalogItem {
        qualified_identifier: id.clone(),
        query_name: id,
        label: schema.name.clone(),
        type_label: SCHEMA_LABEL.to_string(),
        children: schema
            .relations
            .iter()
            .map(|relation| relation_item(db, &schema.name, relation))
            .collect(),
    }
}

fn relation_item(db: &str, schema: &str, relation: &RelationObject) -> CatalogItem {
    let id = qualified_name(&[db, schema, relation.name.as_str()]);
    let type_label = if relation.table_type.eq_ignore_ascii_case("VIEW") {
        VIEW_LABEL
    } else {
        TABLE_LABEL
    };
    CatalogItem {
        qualified_identifier: id.clone(),
        query_name: id,
        label: relation.name.clone(),
        type_label: type_label.to_string(),
        children: relation
            .columns
            .iter()
            .map(|column| column_item(db, schema, &relation.name, column))
            .collect(),
    }
}

fn column_item(db: &str, schema: &str, relation: &str, column: &ColumnObject) -> CatalogItem {
    CatalogItem {
        qualified_identifier: qualified_name(&[db, schema, relation, column.name.as_str()]),
        query_name: quote_identifier(&column.name),
        label: column.name.clone(),
        type_label: TypeMapper::catalog_label(
            column.xdbc_data_type,
            column.xdbc_type_name.as_deref(),
        )
        .to_string(),
        children: Vec::new(),
    }
}
