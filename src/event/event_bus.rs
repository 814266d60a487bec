// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast channel for cover events.

use tokio::sync::broadcast;

use super::CoverEvent;

/// Events buffered per subscriber before the oldest are dropped.
const EVENT_BUFFER: usize = 256;

/// Fans cover events out to every subscriber of a registry.
///
/// A subscriber that falls more than 256 events behind loses the oldest
/// ones and sees `RecvError::Lagged` on its next receive.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<CoverEvent>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self { sender }
    }

    /// Returns a receiver for every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CoverEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event; it is dropped when nobody is subscribed.
    pub fn publish(&self, event: CoverEvent) {
        tracing::trace!(entity_id = event.entity_id(), "Publishing cover event");
        // send only fails when there are no receivers
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
