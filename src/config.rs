// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration for a curtain.
//!
//! A configuration block has three recognized keys:
//!
//! | Key | Required | Rule |
//! |-----|----------|------|
//! | `host` | yes | non-empty string |
//! | `token` | yes | string of exactly 32 characters |
//! | `name` | no | string, defaults to [`DEFAULT_NAME`] |
//!
//! Any other key is kept as-is in [`CoverConfig::extra`].
//!
//! # Examples
//!
//! ```
//! use miio_cover::CoverConfig;
//!
//! let config = CoverConfig::from_yaml_str(
//!     "platform: xiaomi_cover\nhost: 10.0.0.5\ntoken: abcdefabcdefabcdefabcdefabcdef12\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.host, "10.0.0.5");
//! assert_eq!(config.name, "Xiaomi Miio Device");
//! assert!(config.extra.contains_key("platform"));
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::types::Token;

/// Name used when the configuration does not provide one.
pub const DEFAULT_NAME: &str = "Xiaomi Miio Device";

/// Validated configuration for one curtain.
///
/// Deserializing a `CoverConfig` performs the full validation; a value of
/// this type always has a non-empty host and a 32-character token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverConfig {
    /// Network address of the device.
    #[serde(deserialize_with = "non_empty_host")]
    pub host: String,
    /// Authentication token.
    pub token: Token,
    /// Display name of the cover entity.
    #[serde(default = "default_name", deserialize_with = "string_like")]
    pub name: String,
    /// Unrecognized keys, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CoverConfig {
    /// Creates a configuration from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host is empty or the token is not 32
    /// characters long.
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(Self {
            host,
            token: Token::new(token)?,
            name: DEFAULT_NAME.to_string(),
            extra: Map::new(),
        })
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Validates a raw configuration value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the value is not a mapping, a
    /// required key is missing, or a key fails validation.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` on a syntax error, otherwise the
    /// validation error.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` on a syntax error, otherwise the
    /// validation error.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_yaml::from_str(input).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// Accepts strings and coerces numbers and booleans to their text form.
fn string_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringLike {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(match StringLike::deserialize(deserializer)? {
        StringLike::Text(s) => s,
        StringLike::Number(n) => n.to_string(),
        StringLike::Bool(b) => b.to_string(),
    })
}

fn non_empty_host<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let host = string_like(deserializer)?;
    if host.is_empty() {
        return Err(de::Error::custom(ConfigError::EmptyHost));
    }
    Ok(host)
}
