// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device client seam.
//!
//! The miio transport (UDP framing, token-derived encryption, handshake) is
//! provided by the embedding application. This crate only needs two things
//! from it:
//!
//! - [`Protocol`]: send a method name and a JSON argument array, get the
//!   decoded JSON reply back.
//! - [`Connector`]: build a [`Protocol`] client for a `(host, token)` pair.

use serde_json::Value;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::types::Token;

/// Decoded reply to a device call.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResponse {
    /// The `result` member of the device reply.
    result: Value,
}

impl CommandResponse {
    /// Creates a new response wrapping the decoded result.
    #[must_use]
    pub fn new(result: Value) -> Self {
        Self { result }
    }

    /// Returns the decoded result.
    #[must_use]
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Returns `true` if the device acknowledged with `["ok"]`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        match &self.result {
            Value::Array(values) => values.len() == 1 && values[0] == "ok",
            Value::String(s) => s == "ok",
            _ => false,
        }
    }
}

/// A connection to one device able to execute remote calls.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a raw call to the device and returns the decoded `result`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the call cannot be delivered or the device
    /// answers with an error.
    async fn send(&self, method: &str, params: Value) -> Result<Value, ProtocolError>;

    /// Sends a typed command to the device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the call fails.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.send(command.method(), command.params())
            .await
            .map(CommandResponse::new)
    }
}

/// Factory for device clients.
#[allow(async_fn_in_trait)]
pub trait Connector {
    /// The client type produced by this connector.
    type Client: Protocol;

    /// Creates a client for the device at `host`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the client cannot be created, for example
    /// because the address is invalid.
    async fn connect(&self, host: &str, token: &Token) -> Result<Self::Client, ProtocolError>;
}
