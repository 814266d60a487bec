// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for curtain control.
//!
//! Each type checks its range at construction time, so a value that reaches
//! the device has already been validated.
//!
//! # Types
//!
//! - [`Position`] - Target cover position (0-100%)
//! - [`OperationCode`] - Close/Stop/Open motor operation
//! - [`Token`] - 32-character device authentication token

mod operation;
mod position;
mod token;

pub use operation::OperationCode;
pub use position::Position;
pub use token::Token;
