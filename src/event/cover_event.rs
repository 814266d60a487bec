// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover event types.

use serde::Serialize;

use crate::state::CoverState;

/// Events emitted by the cover registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoverEvent {
    /// A cover was registered.
    CoverAdded {
        /// The entity id assigned to the cover.
        entity_id: String,
    },

    /// A cover was removed from the registry.
    CoverRemoved {
        /// The entity id of the removed cover.
        entity_id: String,
    },

    /// A refresh changed the cached state.
    StateChanged {
        /// The entity id of the cover.
        entity_id: String,
        /// State before the refresh.
        old_state: CoverState,
        /// State after the refresh.
        new_state: CoverState,
    },

    /// A refresh failed; the cached state was kept.
    UpdateFailed {
        /// The entity id of the cover.
        entity_id: String,
        /// Description of the failure.
        error: String,
    },
}

impl CoverEvent {
    /// Returns the entity id associated with this event.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::CoverAdded { entity_id }
            | Self::CoverRemoved { entity_id }
            | Self::StateChanged { entity_id, .. }
            | Self::UpdateFailed { entity_id, .. } => entity_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_accessor() {
        let event = CoverEvent::UpdateFailed {
            entity_id: "cover.hall".to_string(),
            error: "timeout".to_string(),
        };
        assert_eq!(event.entity_id(), "cover.hall");
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = CoverEvent::CoverAdded {
            entity_id: "cover.hall".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "cover_added");
        assert_eq!(value["entity_id"], "cover.hall");
    }
}
