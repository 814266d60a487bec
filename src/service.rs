// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover services exposed to the host.
//!
//! | Service | Parameters |
//! |---------|------------|
//! | `set_cover_position` | `position` (0-100), optional `entity_id` |
//! | `open_cover` | optional `entity_id` |
//! | `close_cover` | optional `entity_id` |
//! | `stop_cover` | optional `entity_id` |
//!
//! `entity_id` accepts a single id, a comma-separated list, or an array.
//! Each id must have the `domain.object_id` form. When it is absent or
//! empty the call targets every registered cover.
//!
//! `position` accepts an integer, a whole-number float, or a numeric string.
//!
//! # Examples
//!
//! ```
//! use miio_cover::service::{CoverService, ServiceCall};
//! use serde_json::json;
//!
//! let call = ServiceCall::parse(
//!     "set_cover_position",
//!     json!({"entity_id": "cover.bedroom", "position": 42}),
//! )
//! .unwrap();
//!
//! assert_eq!(call.service(), CoverService::SetCoverPosition);
//! assert_eq!(call.entity_ids(), Some(&["cover.bedroom".to_string()][..]));
//! assert_eq!(call.position().map(|p| p.value()), Some(42));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ServiceError;
use crate::types::Position;

/// Domain the services are registered under.
pub const DOMAIN: &str = "cover";

/// Key selecting target entities.
pub const ATTR_ENTITY_ID: &str = "entity_id";

/// Key carrying the target position.
pub const ATTR_POSITION: &str = "position";

/// The four cover services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverService {
    /// Move to a target position.
    SetCoverPosition,
    /// Drive open.
    OpenCover,
    /// Drive closed.
    CloseCover,
    /// Halt.
    StopCover,
}

impl CoverService {
    /// All cover services, in registration order.
    pub const ALL: [Self; 4] = [
        Self::SetCoverPosition,
        Self::OpenCover,
        Self::CloseCover,
        Self::StopCover,
    ];

    /// Returns the service name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetCoverPosition => "set_cover_position",
            Self::OpenCover => "open_cover",
            Self::CloseCover => "close_cover",
            Self::StopCover => "stop_cover",
        }
    }
}

impl fmt::Display for CoverService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverService {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownService(s.to_string()))
    }
}

/// A validated service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCall {
    service: CoverService,
    entity_ids: Option<Vec<String>>,
    position: Option<Position>,
}

impl ServiceCall {
    /// Creates a call with no parameters, targeting every cover.
    ///
    /// Use [`set_position`](Self::set_position) for `set_cover_position`.
    #[must_use]
    pub fn new(service: CoverService) -> Self {
        Self {
            service,
            entity_ids: None,
            position: None,
        }
    }

    /// Creates a `set_cover_position` call targeting every cover.
    #[must_use]
    pub fn set_position(position: Position) -> Self {
        Self {
            service: CoverService::SetCoverPosition,
            entity_ids: None,
            position: Some(position),
        }
    }

    /// Restricts the call to the given entity ids.
    ///
    /// An empty list targets every cover.
    #[must_use]
    pub fn with_entity_ids<I, S>(mut self, entity_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = entity_ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_lowercase())
            .filter(|id| !id.is_empty())
            .collect();
        self.entity_ids = if ids.is_empty() { None } else { Some(ids) };
        self
    }

    /// Validates a service name and its data mapping.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UnknownService` for an unknown name,
    /// `ServiceError::InvalidData` if the data is not a mapping or holds an
    /// unexpected key or unusable value, `ServiceError::MissingParameter` if
    /// `set_cover_position` lacks a position, and
    /// `ServiceError::InvalidParameter` for malformed entity ids or a
    /// position on any other service.
    pub fn parse(service: &str, data: Value) -> Result<Self, ServiceError> {
        let service: CoverService = service.parse()?;
        let data = if data.is_null() {
            ServiceData::default()
        } else {
            serde_json::from_value::<ServiceData>(data)
                .map_err(|e| ServiceError::InvalidData(e.to_string()))?
        };

        let position = match (service, data.position) {
            (CoverService::SetCoverPosition, Some(position)) => Some(position),
            (CoverService::SetCoverPosition, None) => {
                return Err(ServiceError::MissingParameter(ATTR_POSITION));
            }
            (_, Some(_)) => {
                return Err(ServiceError::InvalidParameter {
                    name: ATTR_POSITION.to_string(),
                    message: format!("not accepted by {service}"),
                });
            }
            (_, None) => None,
        };

        let call = Self {
            service,
            entity_ids: None,
            position,
        }
        .with_entity_ids(data.entity_id);

        if let Some(bad) = call
            .entity_ids()
            .and_then(|ids| ids.iter().find(|id| !is_valid_entity_id(id)))
        {
            return Err(ServiceError::InvalidParameter {
                name: ATTR_ENTITY_ID.to_string(),
                message: format!("{bad:?} is not a valid entity id"),
            });
        }

        Ok(call)
    }

    /// Returns the requested service.
    #[must_use]
    pub const fn service(&self) -> CoverService {
        self.service
    }

    /// Returns the targeted entity ids, or `None` for every cover.
    #[must_use]
    pub fn entity_ids(&self) -> Option<&[String]> {
        self.entity_ids.as_deref()
    }

    /// Returns the target position of a `set_cover_position` call.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns `true` if the call targets the given entity.
    #[must_use]
    pub fn targets(&self, entity_id: &str) -> bool {
        self.entity_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == entity_id))
    }
}

/// Data mapping of a cover service call.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceData {
    #[serde(default, deserialize_with = "string_or_vec")]
    entity_id: Vec<String>,
    #[serde(default, deserialize_with = "coerce_position")]
    position: Option<Position>,
}

/// Accepts a single string, a comma-separated string, a list, or null.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrVec>::deserialize(deserializer)? {
        Some(StringOrVec::One(s)) => s.split(',').map(str::to_string).collect(),
        Some(StringOrVec::Many(ids)) => ids,
        None => Vec::new(),
    })
}

/// Accepts an integer, a whole-number float, or a numeric string in 0-100.
#[allow(clippy::cast_possible_truncation)]
fn coerce_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPosition {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Option::<RawPosition>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawPosition::Int(value)) => value,
        Some(RawPosition::Float(value)) if value.fract().abs() < f64::EPSILON => value as i64,
        Some(RawPosition::Float(value)) => {
            return Err(de::Error::custom(format!(
                "position {value} is not a whole number"
            )));
        }
        Some(RawPosition::Text(text)) => text.trim().parse::<i64>().map_err(|e| {
            <D::Error as de::Error>::custom(format!("position {text:?} is not an integer: {e}"))
        })?,
    };

    Position::try_from(value).map(Some).map_err(de::Error::custom)
}

/// Checks the `domain.object_id` form: two non-empty parts of lowercase
/// letters, digits and underscores.
fn is_valid_entity_id(entity_id: &str) -> bool {
    let valid_part = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    };

    entity_id
        .split_once('.')
        .is_some_and(|(domain, object_id)| valid_part(domain) && valid_part(object_id))
}
