// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device authentication token.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConfigError;

/// Number of characters in a miio token.
const TOKEN_LENGTH: usize = 32;

/// Characters of the token shown in logs.
const VISIBLE_PREFIX: usize = 5;

/// Shared secret used by the device client to authenticate with the device.
///
/// The `Debug` and `Display` implementations only reveal the first five
/// characters so the token can be logged safely.
///
/// Serialization is not redacted: serializing a token, or a
/// [`CoverConfig`](crate::CoverConfig) holding one, writes the full secret so
/// the configuration can be stored and reloaded. Deserialization checks the
/// length.
///
/// # Examples
///
/// ```
/// use miio_cover::types::Token;
///
/// let token = Token::new("abcdefabcdefabcdefabcdefabcdef12").unwrap();
/// assert_eq!(token.redacted(), "abcde...");
/// assert!(Token::new("too-short").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Token(String);

impl Token {
    /// Creates a token, checking that it is exactly 32 characters long.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTokenLength` otherwise.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let length = token.chars().count();
        if length != TOKEN_LENGTH {
            return Err(ConfigError::InvalidTokenLength(length));
        }
        Ok(Self(token))
    }

    /// Returns the full token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first characters of the token followed by `...`.
    #[must_use]
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(VISIBLE_PREFIX).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.redacted())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl TryFrom<String> for Token {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "abcdefabcdefabcdefabcdefabcdef12";

    #[test]
    fn accepts_exactly_32_chars() {
        assert_eq!(Token::new(VALID).unwrap().as_str(), VALID);
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(
            Token::new(&VALID[..31]),
            Err(ConfigError::InvalidTokenLength(31))
        );
        assert_eq!(
            Token::new(format!("{VALID}0")),
            Err(ConfigError::InvalidTokenLength(33))
        );
        assert_eq!(Token::new(""), Err(ConfigError::InvalidTokenLength(0)));
    }

    #[test]
    fn length_counts_characters() {
        let token: String = "é".repeat(32);
        assert!(Token::new(token).is_ok());
    }

    #[test]
    fn debug_is_redacted() {
        let token = Token::new(VALID).unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "Token(abcde...)");
        assert!(!debug.contains("abcdef12"));
        assert_eq!(token.to_string(), "abcde...");
    }

    #[test]
    fn serializes_full_secret() {
        let token = Token::new(VALID).unwrap();
        assert_eq!(serde_json::to_value(&token).unwrap(), serde_json::json!(VALID));
    }

    #[test]
    fn deserialize_checks_length() {
        let token: Token = serde_json::from_value(serde_json::json!(VALID)).unwrap();
        assert_eq!(token.as_str(), VALID);

        let err = serde_json::from_value::<Token>(serde_json::json!("abc")).unwrap_err();
        assert_eq!(err.to_string(), "token must be exactly 32 characters, got 3");
    }
}
