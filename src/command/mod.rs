// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curtain command definitions.
//!
//! Every call to the device is a method name plus a JSON argument array.
//!
//! # Available Commands
//!
//! | Command Type | Method | Params |
//! |-------------|--------|--------|
//! | [`OperationCommand`] | `setOperation` | `[code]` (0 close, 1 stop, 2 open) |
//! | [`SetPositionCommand`] | `setPosition` | `[position]` |
//! | [`PropertyQuery`] | `get_prop` | `[0, 1, 2]` |
//!
//! # Examples
//!
//! ```
//! use miio_cover::command::{Command, OperationCommand, SetPositionCommand};
//! use miio_cover::types::Position;
//! use serde_json::json;
//!
//! let close = OperationCommand::close();
//! assert_eq!(close.method(), "setOperation");
//! assert_eq!(close.params(), json!([0]));
//!
//! let pos = SetPositionCommand::new(Position::new(42).unwrap());
//! assert_eq!(pos.params(), json!([42]));
//! ```

mod cover;
mod property;

pub use cover::{OperationCommand, SetPositionCommand};
pub use property::PropertyQuery;

use serde_json::Value;

/// A call that can be sent to the curtain.
pub trait Command {
    /// Returns the remote method name.
    fn method(&self) -> &'static str;

    /// Returns the JSON argument array.
    fn params(&self) -> Value;
}
