//! Registry of known ADBC drivers.
//!
//! Maps a driver type name to the shared library the driver manager should
//! load, the entry point it exports and the database option that receives
//! the connection string.

use adbc_core::options::OptionDatabase;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Driver selected by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverType {
    /// Arrow Flight SQL
    FlightSql,
    /// PostgreSQL
    PostgreSql,
    /// Snowflake
    Snowflake,
    /// SQLite
    Sqlite,
    /// DuckDB (the DuckDB library ships its own ADBC entry point)
    DuckDb,
    /// A name outside the registry; fails when connecting
    Unsupported(String),
}

/// How to load a registered driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSpec {
    /// Library name passed to the driver manager's name-based lookup
    pub library: &'static str,
    /// Exported init symbol, `None` for the default `AdbcDriverInit`
    pub entrypoint: Option<&'static [u8]>,
    /// Option that receives the connection string
    pub uri_option: OptionDatabase,
}

impl DriverType {
    /// Drivers in the registry, in presentation order.
    pub const SUPPORTED: [DriverType; 5] = [
        DriverType::FlightSql,
        DriverType::PostgreSql,
        DriverType::Snowflake,
        DriverType::Sqlite,
        DriverType::DuckDb,
    ];

    /// Registry entry for this driver, `None` when unsupported.
    pub fn spec(&self) -> Option<DriverSpec> {
        let spec = match self {
            DriverType::FlightSql => DriverSpec {
                library: "adbc_driver_flightsql",
                entrypoint: None,
                uri_option: OptionDatabase::Uri,
            },
            DriverType::PostgreSql => DriverSpec {
                library: "adbc_driver_postgresql",
                entrypoint: None,
                uri_option: OptionDatabase::Uri,
            },
            DriverType::Snowflake => DriverSpec {
                library: "adbc_driver_snowflake",
                entrypoint: None,
                uri_option: OptionDatabase::Uri,
            },
            DriverType::Sqlite => DriverSpec {
                library: "adbc_driver_sqlite",
                entrypoint: None,
                uri_option: OptionDatabase::Uri,
            },
            DriverType::DuckDb => DriverSpec {
                library: "duckdb",
                entrypoint: Some(&b"duckdb_adbc_init"[..]),
                uri_option: OptionDatabase::Other("path".to_string()),
            },
            DriverType::Unsupported(_) => return None,
        };
        Some(spec)
    }

    /// Component name reported when the driver cannot be loaded: the
    /// library the registry loads, or the conventional ADBC library name for
    /// unsupported types.
    pub fn component(&self) -> String {
        match self.spec() {
            Some(spec) => spec.library.to_string(),
            None => format!("adbc_driver_{}", self),
        }
    }

    /// Look up a driver by name (case-insensitive). Unknown names are kept
    /// as [`DriverType::Unsupported`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        match name.to_lowercase().as_str() {
            "flightsql" => DriverType::FlightSql,
            "postgresql" => DriverType::PostgreSql,
            "snowflake" => DriverType::Snowflake,
            "sqlite" => DriverType::Sqlite,
            "duckdb" => DriverType::DuckDb,
            _ => DriverType::Unsupported(name.to_string()),
        }
    }
}

impl FromStr for DriverType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DriverType::from_name(s))
    }
}

impl fmt::Display for DriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverType::FlightSql => write!(f, "flightsql"),
            DriverType::PostgreSql => write!(f, "postgresql"),
            DriverType::Snowflake => write!(f, "snowflake"),
            DriverType::Sqlite => write!(f, "sqlite"),
            DriverType::DuckDb => write!(f, "duckdb"),
            DriverType::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

/// Which driver to load: an explicit library path or a registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverReference {
    /// Shared library on disk
    Path(PathBuf),
    /// Driver from the registry
    Type(DriverType),
}

impl DriverReference {
    /// Resolve the reference from optional user settings.
    ///
    /// The path wins when both are given; empty values count as absent.
    pub fn resolve(driver_type: Option<&str>, driver_path: Option<PathBuf>) -> Option<Self> {
        if let Some(path) = driver_path.filter(|p| !p.as_os_str().is_empty()) {
            return Some(DriverReference::Path(path));
        }

        driver_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| DriverReference::Type(DriverType::from_name(t)))
    }
}

impl fmt::Display for DriverReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverReference::Path(path) => write!(f, "{}", path.display()),
            DriverReference::Type(driver) => write!(f, "{}", driver),
        }
    }
}
