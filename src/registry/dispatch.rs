// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcome of a service call.

use crate::error::Error;

/// A cover whose command or follow-up refresh failed.
#[derive(Debug)]
pub struct DispatchFailure {
    /// The entity id of the cover.
    pub entity_id: String,
    /// The failure.
    pub error: Error,
}

/// What a service call did to each targeted cover.
///
/// Entity ids appear in registry order (sorted).
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Covers that accepted the command. Each one was then refreshed.
    pub commanded: Vec<String>,
    /// Covers that do not support the service.
    pub skipped: Vec<String>,
    /// Covers whose command failed.
    pub failed: Vec<DispatchFailure>,
    /// Commanded covers whose refresh afterwards failed. Their cached state
    /// predates the command.
    pub refresh_failed: Vec<DispatchFailure>,
}

impl DispatchReport {
    /// Returns `true` if every targeted cover that supports the service
    /// accepted the command, whether or not its refresh succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the number of covers the call reached.
    #[must_use]
    pub fn targeted(&self) -> usize {
        self.commanded.len() + self.skipped.len() + self.failed.len()
    }
}
