//! Type mapping from Arrow and XDBC types to short display labels.

use arrow_schema::{DataType, IntervalUnit, TimeUnit};

/// Label used for any type without a fixed mapping.
pub const UNKNOWN_LABEL: &str = "?";

/// Type mapper for rendering column types as short labels.
///
/// Result columns carry an Arrow [`DataType`]; catalog columns carry an XDBC
/// type code and/or a backend type name, which are first translated to an
/// Arrow type and then labelled the same way.
pub struct TypeMapper;

impl TypeMapper {
    /// Map an Arrow type to its 1–4 character label.
    ///
    /// Total: every type without a fixed mapping renders as `"?"`.
    pub fn short_label(data_type: &DataType) -> &'static str {
        match data_type {
            DataType::Null => "nul",
            DataType::Boolean => "t/f",

            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => "##",

            DataType::Float16 | DataType::Float32 | DataType::Float64 => "#.#",

            DataType::Decimal32(_, _)
            | DataType::Decimal64(_, _)
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => "#.##",

            DataType::Time32(_) | DataType::Time64(_) => "t",
            DataType::Timestamp(_, _) => "dt",
            DataType::Date32 | DataType::Date64 => "d",
            DataType::Interval(_) => "mdn",

            DataType::Binary | DataType::LargeBinary | DataType::BinaryView => "010",
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => "s",

            _ => UNKNOWN_LABEL,
        }
    }

    /// Map an XDBC (`java.sql.Types`) code to an Arrow type.
    ///
    /// Returns `None` for codes without an Arrow counterpart.
    pub fn from_xdbc(code: i16) -> Option<DataType> {
        let data_type = match code {
            0 => DataType::Null,                                  // NULL
            -7 | 16 => DataType::Boolean,                         // BIT, BOOLEAN
            -6 => DataType::Int8,                                 // TINYINT
            5 => DataType::Int16,                                 // SMALLINT
            4 => DataType::Int32,                                 // INTEGER
            -5 => DataType::Int64,                                // BIGINT
            7 => DataType::Float32,                               // REAL
            6 | 8 => DataType::Float64,                           // FLOAT, DOUBLE
            2 | 3 => DataType::Decimal128(38, 10),                // NUMERIC, DECIMAL
            1 | 12 | -15 | -9 => DataType::Utf8,                  // CHAR, VARCHAR, NCHAR, NVARCHAR
            -1 | -16 | 2005 | 2011 => DataType::LargeUtf8,        // LONG(N)VARCHAR, (N)CLOB
            -2 | -3 => DataType::Binary,                          // BINARY, VARBINARY
            -4 | 2004 => DataType::LargeBinary,                   // LONGVARBINARY, BLOB
            91 => DataType::Date32,                               // DATE
            92 | 2013 => DataType::Time64(TimeUnit::Microsecond), // TIME, TIME_WITH_TIMEZONE
            93 => DataType::Timestamp(TimeUnit::Microsecond, None), // TIMESTAMP
            2014 => DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
            _ => return None,
        };
        Some(data_type)
    }

    /// Map a backend type name (`INTEGER`, `varchar(20)`, `timestamptz`, ...)
    /// to an Arrow type.
    ///
    /// Matching is case-insensitive and ignores type parameters.
    pub fn from_type_name(type_name: &str) -> Option<DataType> {
        let type_lower = type_name.to_lowercase();
        let base_type = type_lower.split('(').next().unwrap_or(&type_lower).trim();

        let data_type = match base_type {
            "null" | "void" => DataType::Null,
            "bool" | "boolean" | "bit" => DataType::Boolean,
            "tinyint" | "int1" | "byte" => DataType::Int8,
            "smallint" | "int2" | "short" | "smallserial" => DataType::Int16,
            "int" | "int4" | "integer" | "mediumint" | "serial" => DataType::Int32,
            "bigint" | "int8" | "long" | "bigserial" | "hugeint" => DataType::Int64,
            "utinyint" => DataType::UInt8,
            "usmallint" => DataType::UInt16,
            "uinteger" => DataType::UInt32,
            "ubigint" => DataType::UInt64,
            "real" | "float4" => DataType::Float32,
            "float" | "float8" | "double" | "double precision" => DataType::Float64,
            "decimal" | "numeric" | "dec" | "number" => DataType::Decimal128(38, 10),
            "char" | "character" | "bpchar" | "varchar" | "character varying" | "nchar"
            | "nvarchar" | "string" | "name" => DataType::Utf8,
            "text" | "clob" | "json" | "jsonb" | "uuid" => DataType::LargeUtf8,
            "binary" | "varbinary" => DataType::Binary,
            "blob" | "bytea" | "longblob" => DataType::LargeBinary,
            "date" => DataType::Date32,
            "time" | "timetz" | "time with time zone" | "time without time zone" => {
                DataType::Time64(TimeUnit::Microsecond)
            }
            "timestamp" | "datetime" | "timestamp_ntz" | "timestamp without time zone" => {
                DataType::Timestamp(TimeUnit::Microsecond, None)
            }
            "timestamptz" | "timestamp_ltz" | "timestamp_tz" | "timestamp with time zone" => {
                DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into()))
            }
            "interval" => DataType::Interval(IntervalUnit::MonthDayNano),
            _ => return None,
        };
        Some(data_type)
    }

    /// Label for a catalog column, given the XDBC fields reported by
    /// `get_objects`.
    ///
    /// The XDBC code wins when it is recognized; otherwise the type name is
    /// tried; otherwise the column renders as `"?"`.
    pub fn catalog_label(xdbc_data_type: Option<i16>, xdbc_type_name: Option<&str>) -> &'static str {
        xdbc_data_type
            .and_then(Self::from_xdbc)
            .or_else(|| xdbc_type_name.and_then(Self::from_type_name))
            .map(|data_type| Self::short_label(&data_type))
            .unwrap_or(UNKNOWN_LABEL)
    }
}
