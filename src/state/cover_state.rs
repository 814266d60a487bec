// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Position sample of a cover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known state of a cover.
///
/// `position` is stored exactly as reported by the device, so it is not
/// clamped to 0-100.
///
/// # Examples
///
/// ```
/// use miio_cover::state::CoverState;
///
/// let mut state = CoverState::new();
/// assert!(state.is_closed());
///
/// assert!(state.set_position(40));
/// assert_eq!(state.position(), 40);
/// assert!(!state.is_closed());
///
/// // Same value again is not a change
/// assert!(!state.set_position(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverState {
    position: i32,
    last_updated: Option<DateTime<Utc>>,
}

impl CoverState {
    /// Creates a state with position 0 that has never been refreshed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last reported position.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Returns `true` when the position is at or below zero.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.position <= 0
    }

    /// Returns when the position was last sampled.
    #[must_use]
    pub const fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Records a sampled position and stamps the sample time.
    ///
    /// Returns `true` if the position differs from the previous one.
    pub fn set_position(&mut self, position: i32) -> bool {
        let changed = self.position != position;
        self.position = position;
        self.last_updated = Some(Utc::now());
        changed
    }
}
