// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motor commands.

use serde_json::{Value, json};

use super::Command;
use crate::types::{OperationCode, Position};

/// Starts or stops the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationCommand(pub OperationCode);

impl OperationCommand {
    /// Method name understood by the device.
    pub const METHOD: &'static str = "setOperation";

    /// Drives the curtain open.
    #[must_use]
    pub const fn open() -> Self {
        Self(OperationCode::Open)
    }

    /// Drives the curtain closed.
    #[must_use]
    pub const fn close() -> Self {
        Self(OperationCode::Close)
    }

    /// Halts the motor.
    #[must_use]
    pub const fn stop() -> Self {
        Self(OperationCode::Stop)
    }
}

impl Command for OperationCommand {
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn params(&self) -> Value {
        json!([self.0.code()])
    }
}

/// Moves the curtain to a target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPositionCommand(pub Position);

impl SetPositionCommand {
    /// Method name understood by the device.
    pub const METHOD: &'static str = "setPosition";

    /// Creates a command targeting `position`.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self(position)
    }
}

impl Command for SetPositionCommand {
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn params(&self) -> Value {
        json!([self.0.value()])
    }
}
