// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `miio_cover` library.
//!
//! Failures fall into three groups the host has to tell apart:
//!
//! - [`Error::Config`]: the configuration block is malformed. Raised before
//!   any device contact.
//! - [`Error::NotReady`]: the device could not be reached or rejected the
//!   token while the cover was being set up. The host may retry setup later.
//! - Everything else: runtime failures of a single command or refresh.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration block failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The device could not be set up; the host may retry later.
    #[error("device at {host} is not ready: {source}")]
    NotReady {
        /// Address of the device that failed.
        host: String,
        /// The underlying protocol failure.
        #[source]
        source: ProtocolError,
    },

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while interpreting a device reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A service call was malformed.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// No registered cover has the requested entity id.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// The cover does not support the requested operation.
    #[error("cover does not support {capability}")]
    CapabilityNotSupported {
        /// The operation that is not supported.
        capability: &'static str,
    },
}

impl Error {
    /// Returns `true` if this is a setup failure the host should retry.
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }

    /// Returns `true` if this is a configuration failure.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Errors raised while validating a configuration block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration failed validation: a key is missing, has the
    /// wrong type, or holds an unusable value.
    #[error("{0}")]
    Invalid(String),

    /// The host is an empty string.
    #[error("host must not be empty")]
    EmptyHost,

    /// The token does not have exactly 32 characters.
    #[error("token must be exactly 32 characters, got {0}")]
    InvalidTokenLength(usize),

    /// The configuration document could not be parsed.
    #[error("malformed configuration document: {0}")]
    Malformed(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },
}

/// Errors reported by a device client.
///
/// Client implementations map their transport failures onto these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The device rejected the token.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The device answered with an error object.
    #[error("device returned error {code}: {message}")]
    DeviceError {
        /// Error code reported by the device.
        code: i64,
        /// Error message reported by the device.
        message: String,
    },
}

/// Errors related to interpreting device replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Expected element is missing from the reply.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected reply format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors raised for malformed service calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service name is not one of the cover services.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// A required parameter is absent.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter holds an unusable value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Description of the problem.
        message: String,
    },

    /// The service data is not a mapping, holds an unexpected key, or holds
    /// a value that cannot be used.
    #[error("invalid service data: {0}")]
    InvalidData(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
