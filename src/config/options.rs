//! Option descriptors a host can render as adapter settings.

use crate::driver::DriverType;
use serde::Serialize;

/// Kind of value an option accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OptionKind {
    /// One of a fixed set of choices
    Select { choices: Vec<String> },
    /// A filesystem path to a file
    Path,
    /// Free text
    Text,
}

/// Description of one adapter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterOption {
    /// Option name as used in configuration (`driver-type`, ...)
    pub name: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Accepted value
    #[serde(flatten)]
    pub kind: OptionKind,
}

/// Options understood by the adapter besides the connection string.
pub fn adapter_options() -> Vec<AdapterOption> {
    vec![
        AdapterOption {
            name: "driver-type",
            description: "ADBC driver to use. Either this or driver-path must be provided.",
            kind: OptionKind::Select {
                choices: DriverType::SUPPORTED
                    .iter()
                    .map(|driver| driver.to_string())
                    .collect(),
            },
        },
        AdapterOption {
            name: "driver-path",
            description: "Path to an ADBC driver shared library. Takes precedence over driver-type.",
            kind: OptionKind::Path,
        },
        AdapterOption {
            name: "db-kwargs-str",
            description: "Extra database options as key=value pairs separated by ';'.",
            kind: OptionKind::Text,
        },
    ]
}
