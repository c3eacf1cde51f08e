//! Connection parameter parsing.
//!
//! Extra database options are supplied as a flat `key=value` list separated
//! by `;`, e.g. `username=admin;password=secret;adbc.postgresql.batch_size_hint_bytes=65536`.

use crate::error::ConfigError;
use adbc_core::options::{OptionDatabase, OptionValue};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Separator between `key=value` pairs.
pub const PAIR_DELIMITER: char = ';';

/// Keys whose values are never printed.
const REDACTED_KEYS: &[&str] = &["password", "token", "secret"];

/// Ordered database options passed to the driver when connecting.
///
/// Insertion order is preserved so options reach the driver in the order the
/// user wrote them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionParameters(IndexMap<String, String>);

impl ConnectionParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert the parameters into driver manager database options.
    ///
    /// `uri`, `username` and `password` map onto the standard ADBC option
    /// keys; every other key is forwarded verbatim.
    pub fn to_database_options(&self) -> Vec<(OptionDatabase, OptionValue)> {
        self.iter()
            .map(|(key, value)| {
                let option = match key {
                    "uri" => OptionDatabase::Uri,
                    "username" => OptionDatabase::Username,
                    "password" => OptionDatabase::Password,
                    other => OptionDatabase::Other(other.to_string()),
                };
                (option, OptionValue::String(value.to_string()))
            })
            .collect()
    }
}

impl FromStr for ConnectionParameters {
    type Err = ConfigError;

    /// Parse a `;`-separated `key=value` list.
    ///
    /// Values may contain `=`; only the first one splits key from value.
    /// Empty segments (such as a trailing `;`) are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use adbc_adapter::config::ConnectionParameters;
    /// # use std::str::FromStr;
    /// let params = ConnectionParameters::from_str("username=admin;password=secret")?;
    /// assert_eq!(params.get("username"), Some("admin"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = ConnectionParameters::new();

        for pair in s.split(PAIR_DELIMITER) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let (key, value) =
                pair.split_once('=')
                    .ok_or_else(|| ConfigError::MalformedParameter {
                        pair: pair.to_string(),
                    })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::MalformedParameter {
                    pair: pair.to_string(),
                });
            }

            params.insert(key, value.trim());
        }

        Ok(params)
    }
}

// Custom Debug implementation that hides credential values
impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            let lower = key.to_lowercase();
            if REDACTED_KEYS.iter().any(|k| lower.contains(k)) {
                map.entry(&key, &"***");
            } else {
                map.entry(&key, &value);
            }
        }
        map.finish()
    }
}
