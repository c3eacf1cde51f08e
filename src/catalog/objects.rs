//! Decoding of ADBC `GetObjects` results.
//!
//! `GetObjects` returns one row per catalog with the schemas, tables and
//! columns nested as lists of structs:
//!
//! ```text
//! catalog_name: utf8
//! catalog_db_schemas: list<struct<
//!     db_schema_name: utf8,
//!     db_schema_tables: list<struct<
//!         table_name: utf8,
//!         table_type: utf8,
//!         table_columns: list<struct<column_name: utf8, xdbc_data_type: int16, xdbc_type_name: utf8, ...>>,
//!         ...>>>>
//! ```
//!
//! Null lists decode as empty and null names as empty strings.

use crate::error::ConversionError;
use arrow_array::cast::AsArray;
use arrow_array::types::Int16Type;
use arrow_array::{Array, ArrayRef, RecordBatch, StructArray};
use arrow_schema::DataType;

/// A database (ADBC catalog) and its schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseObject {
    pub name: String,
    pub schemas: Vec<SchemaObject>,
}

/// A schema and its relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaObject {
    pub name: String,
    pub relations: Vec<RelationObject>,
}

/// A table or view and its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationObject {
    pub name: String,
    /// Driver-reported type such as `TABLE` or `VIEW`
    pub table_type: String,
    pub columns: Vec<ColumnObject>,
}

/// A column with its XDBC type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnObject {
    pub name: String,
    pub xdbc_data_type: Option<i16>,
    pub xdbc_type_name: Option<String>,
}

/// Decode `GetObjects` record batches into plain records, in driver order.
///
/// # Errors
///
/// Returns `ConversionError` if a required column is missing or has an
/// unexpected type.
pub fn parse_objects(batches: &[RecordBatch]) -> Result<Vec<DatabaseObject>, ConversionError> {
    let mut databases = Vec::new();

    for batch in batches {
        let rows = StructArray::from(batch.clone());
        for row in 0..rows.len() {
            databases.push(DatabaseObject {
                name: string_value(&rows, "catalog_name", row)?.unwrap_or_default(),
                schemas: parse_schemas(&rows, row)?,
            });
        }
    }

    Ok(databases)
}

fn parse_schemas(catalogs: &StructArray, row: usize) -> Result<Vec<SchemaObject>, ConversionError> {
    let Some(schemas) = list_value(catalogs, "catalog_db_schemas", row)? else {
        return Ok(Vec::new());
    };

    (0..schemas.len())
        .map(|i| {
            Ok(SchemaObject {
                name: string_value(&schemas, "db_schema_name", i)?.unwrap_or_default(),
                relations: parse_relations(&schemas, i)?,
            })
        })
        .collect()
}

fn parse_relations(
    schemas: &StructArray,
    row: usize,
) -> Result<Vec<RelationObject>, ConversionError> {
    let Some(tables) = list_value(schemas, "db_schema_tables", row)? else {
        return Ok(Vec::new());
    };

    (0..tables.len())
        .map(|i| {
            Ok(RelationObject {
                name: string_value(&tables, "table_name", i)?.unwrap_or_default(),
                table_type: string_value(&tables, "table_type", i)?.unwrap_or_default(),
                columns: parse_columns(&tables, i)?,
            })
        })
        .collect()
}

fn parse_columns(tables: &StructArray, row: usize) -> Result<Vec<ColumnObject>, ConversionError> {
    let Some(columns) = list_value(tables, "table_columns", row)? else {
        return Ok(Vec::new());
    };

    (0..columns.len())
        .map(|i| {
            Ok(ColumnObject {
                name: string_value(&columns, "column_name", i)?.unwrap_or_default(),
                xdbc_data_type: int16_value(&columns, "xdbc_data_type", i)?,
                xdbc_type_name: string_value(&columns, "xdbc_type_name", i)?,
            })
        })
        .collect()
}

/// Get a child column by name, or return an error.
fn child<'a>(array: &'a StructArray, name: &str) -> Result<&'a ArrayRef, ConversionError> {
    array
        .column_by_name(name)
        .ok_or_else(|| ConversionError::MissingColumn(name.to_string()))
}

fn unexpected_type(name: &str, data_type: &DataType) -> ConversionError {
    ConversionError::UnexpectedType {
        column: name.to_string(),
        data_type: data_type.to_string(),
    }
}

/// Get a string value, `None` when null.
fn string_value(
    array: &StructArray,
    name: &str,
    row: usize,
) -> Result<Option<String>, ConversionError> {
    let values = child(array, name)?;
    if values.is_null(row) {
        return Ok(None);
    }
    match values.data_type() {
        DataType::Utf8 => Ok(Some(values.as_string::<i32>().value(row).to_string())),
        DataType::LargeUtf8 => Ok(Some(values.as_string::<i64>().value(row).to_string())),
        dt => Err(unexpected_type(name, dt)),
    }
}

/// Get an int16 value; a missing column reads as null since drivers may
/// omit XDBC fields.
fn int16_value(array: &StructArray, name: &str, row: usize) -> Result<Option<i16>, ConversionError> {
    let Some(values) = array.column_by_name(name) else {
        return Ok(None);
    };
    if values.is_null(row) {
        return Ok(None);
    }
    values
        .as_primitive_opt::<Int16Type>()
        .map(|v| Some(v.value(row)))
        .ok_or_else(|| unexpected_type(name, values.data_type()))
}

/// Get the struct elements of a list-of-struct value, `None` when null.
fn list_value(
    array: &StructArray,
    name: &str,
    row: usize,
) -> Result<Option<StructArray>, ConversionError> {
    let values = child(array, name)?;
    let list = values
        .as_list_opt::<i32>()
        .ok_or_else(|| unexpected_type(name, values.data_type()))?;
    if list.is_null(row) {
        return Ok(None);
    }

    let items = list.value(row);
    items
        .as_struct_opt()
        .cloned()
        .map(Some)
        .ok_or_else(|| unexpected_type(name, items.data_type()))
}
