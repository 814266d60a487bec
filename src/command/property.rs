// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property query.

use serde_json::{Value, json};

use super::Command;
use crate::error::ParseError;

/// Reads the curtain's property set.
///
/// The reply is an ordered array of three values. Index 1 is the current
/// position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyQuery;

impl PropertyQuery {
    /// Method name understood by the device.
    pub const METHOD: &'static str = "get_prop";

    /// Index of the position in the reply.
    pub const POSITION_INDEX: usize = 1;

    /// Extracts the position from a `get_prop` reply.
    ///
    /// The value may be a JSON integer or an integer-valued string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reply is not an array, is too short, or
    /// the position is not an integer.
    pub fn parse_position(reply: &Value) -> Result<i32, ParseError> {
        let values = reply.as_array().ok_or_else(|| {
            ParseError::UnexpectedFormat(format!("expected property array, got {reply}"))
        })?;

        let raw = values
            .get(Self::POSITION_INDEX)
            .ok_or_else(|| ParseError::MissingField("position".to_string()))?;

        let invalid = |message: String| ParseError::InvalidValue {
            field: "position".to_string(),
            message,
        };

        match raw {
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| invalid(format!("{n} is not a valid integer"))),
            Value::String(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|e| invalid(format!("{s:?}: {e}"))),
            other => Err(invalid(format!("unexpected value {other}"))),
        }
    }
}

impl Command for PropertyQuery {
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn params(&self) -> Value {
        json!([0, 1, 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_shape() {
        assert_eq!(PropertyQuery.method(), "get_prop");
        assert_eq!(PropertyQuery.params(), json!([0, 1, 2]));
    }

    #[test]
    fn position_from_index_one() {
        assert_eq!(PropertyQuery::parse_position(&json!([1, 63, 0])).unwrap(), 63);
        assert_eq!(PropertyQuery::parse_position(&json!([1, "17", 0])).unwrap(), 17);
        assert_eq!(PropertyQuery::parse_position(&json!([0, -1, 0])).unwrap(), -1);
    }

    #[test]
    fn rejects_bad_replies() {
        assert!(matches!(
            PropertyQuery::parse_position(&json!({"result": 1})),
            Err(ParseError::UnexpectedFormat(_))
        ));
        assert!(matches!(
            PropertyQuery::parse_position(&json!([1])),
            Err(ParseError::MissingField(_))
        ));
        assert!(matches!(
            PropertyQuery::parse_position(&json!([1, 2.5, 0])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            PropertyQuery::parse_position(&json!([1, null, 0])),
            Err(ParseError::InvalidValue { .. })
        ));
    }
}
