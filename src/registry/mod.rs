// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of set-up covers.
//!
//! The [`CoverRegistry`] is the context object the host passes around
//! instead of process-wide state. It provides:
//!
//! - **Registration**: covers are keyed by device host and get an entity id
//!   derived from their name (`cover.<slug>`)
//! - **Service dispatch**: routes [`ServiceCall`](crate::service::ServiceCall)s
//!   to the targeted covers and refreshes each cover that accepted the command
//! - **Polling**: refreshes every cover and publishes
//!   [`CoverEvent`](crate::event::CoverEvent)s for changes and failures
//!
//! # Examples
//!
//! ```ignore
//! use miio_cover::registry::CoverRegistry;
//! use miio_cover::service::{CoverService, ServiceCall};
//!
//! let registry = CoverRegistry::new();
//! let entity_id = registry.register("10.0.0.5", cover).await;
//!
//! let call = ServiceCall::new(CoverService::OpenCover).with_entity_ids([&entity_id]);
//! let report = registry.handle_service(&call).await;
//! assert_eq!(report.commanded, vec![entity_id]);
//! ```

mod cover_registry;
mod dispatch;
mod entity_id;

pub use cover_registry::{CoverRegistry, DEFAULT_SCAN_INTERVAL};
pub use dispatch::{DispatchFailure, DispatchReport};
pub use entity_id::slugify;
