//! Logging configuration.
//!
//! The library only emits `tracing` events. A host that wants them printed
//! calls [`init_logging`] once; nothing is installed at load time.
//!
//! ## Configuration priority
//!
//! 1. [`LogConfig::level`] (highest)
//! 2. `RUST_LOG` environment variable
//! 3. Default: `adbc_adapter=info`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=adbc_adapter=debug ./my_sql_client
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "adbc_adapter=info";

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level: "OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE".
    pub level: Option<String>,
    /// Log file path, opened in append mode. If unset, logs go to stderr.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Log to stderr at `level`.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            file: None,
        }
    }

    fn is_off(&self) -> bool {
        self.level
            .as_deref()
            .is_some_and(|level| level.eq_ignore_ascii_case("off"))
    }

    fn filter(&self) -> Result<EnvFilter, ConfigError> {
        match self.level.as_deref() {
            Some(level) => EnvFilter::try_new(format!("adbc_adapter={}", level.to_lowercase()))
                .map_err(|e| ConfigError::ParseError(format!("invalid log level '{}': {}", level, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Install a global `tracing` subscriber.
///
/// # Returns
///
/// `true` if a subscriber was installed, `false` if logging is `OFF` or a
/// global subscriber already exists.
///
/// # Errors
///
/// Returns `ConfigError` if the level is invalid or the log file cannot be
/// opened.
pub fn init_logging(config: &LogConfig) -> Result<bool, ConfigError> {
    if config.is_off() {
        return Ok(false);
    }

    let filter = config.filter()?;

    let installed = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::LogFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_timer(SystemTime),
                )
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_timer(SystemTime),
            )
            .try_init()
            .is_ok(),
    };

    Ok(installed)
}
