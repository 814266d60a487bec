// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `miio_cover` - Xiaomi curtain motors as home-automation covers.
//!
//! This library turns a Xiaomi miio curtain motor into a cover entity:
//! it validates the platform configuration, forwards open/close/stop/set
//! position to the device, and polls the device for its position.
//!
//! The miio transport itself is not part of this crate. The host supplies a
//! [`Connector`] that builds a [`Protocol`] client for a `(host, token)`
//! pair; everything here speaks in method names and JSON argument arrays.
//!
//! # Device Calls
//!
//! | Operation | Method | Params |
//! |-----------|--------|--------|
//! | open | `setOperation` | `[2]` |
//! | close | `setOperation` | `[0]` |
//! | stop | `setOperation` | `[1]` |
//! | set position | `setPosition` | `[p]` |
//! | refresh | `get_prop` | `[0, 1, 2]`, position at index 1 |
//!
//! # Quick Start
//!
//! ```ignore
//! use miio_cover::registry::{CoverRegistry, DEFAULT_SCAN_INTERVAL};
//! use miio_cover::service::{CoverService, ServiceCall};
//! use miio_cover::setup_platform;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> miio_cover::Result<()> {
//!     let registry = CoverRegistry::new();
//!
//!     // `connector` is the host's miio client factory
//!     let entity_id = setup_platform(
//!         json!({"host": "10.0.0.5", "token": "abcdefabcdefabcdefabcdefabcdef12"}),
//!         &connector,
//!         &registry,
//!     )
//!     .await?;
//!
//!     let call = ServiceCall::new(CoverService::OpenCover).with_entity_ids([&entity_id]);
//!     registry.handle_service(&call).await;
//!
//!     registry.run_polling(DEFAULT_SCAN_INTERVAL).await;
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod command;
pub mod config;
pub mod cover;
pub mod error;
pub mod event;
pub mod platform;
pub mod protocol;
pub mod registry;
pub mod service;
pub mod state;
pub mod types;

#[cfg(test)]
mod testing;

pub use capabilities::{CoverFeatures, CoverFeaturesBuilder};
pub use command::{Command, OperationCommand, PropertyQuery, SetPositionCommand};
pub use config::{CoverConfig, DEFAULT_NAME};
pub use cover::{Cover, MiioCover};
pub use error::{
    ConfigError, Error, ParseError, ProtocolError, Result, ServiceError, ValueError,
};
pub use event::{CoverEvent, EventBus};
pub use platform::{setup_cover, setup_platform};
pub use protocol::{CommandResponse, Connector, Protocol};
pub use registry::{CoverRegistry, DispatchReport};
pub use service::{CoverService, ServiceCall};
pub use state::CoverState;
pub use types::{OperationCode, Position, Token};
