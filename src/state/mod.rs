// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached cover state.
//!
//! The adapter never tracks motion. It only samples the position the device
//! reports, so [`CoverState`] holds the last sampled position and when it
//! was taken.

mod cover_state;

pub use cover_state::CoverState;
