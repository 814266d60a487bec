// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for cover state changes.
//!
//! The registry publishes a [`CoverEvent`] whenever a cover is added or
//! removed, whenever a refresh changes its cached state, and whenever a
//! refresh fails. The [`EventBus`] uses tokio's broadcast channel so any
//! number of subscribers receive every event.
//!
//! # Examples
//!
//! ```
//! use miio_cover::event::{CoverEvent, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(CoverEvent::CoverAdded {
//!     entity_id: "cover.bedroom".to_string(),
//! });
//! assert_eq!(rx.try_recv().unwrap().entity_id(), "cover.bedroom");
//! ```

mod cover_event;
mod event_bus;

pub use cover_event::CoverEvent;
pub use event_bus::EventBus;
