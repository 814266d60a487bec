// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entities.
//!
//! [`Cover`] is the capability interface the host drives: it reads the cached
//! position and forwards the four motor operations. [`MiioCover`] implements
//! it on top of a miio device client.
//!
//! Operations a device cannot perform keep their default implementation,
//! which returns [`Error::CapabilityNotSupported`], and are left out of
//! [`Cover::features`].

mod miio;

pub use miio::MiioCover;

use crate::capabilities::CoverFeatures;
use crate::error::{Error, Result, ServiceError};
use crate::service::{ATTR_POSITION, CoverService, ServiceCall};
use crate::state::CoverState;
use crate::types::Position;

/// A motorized cover the host can query and command.
#[allow(async_fn_in_trait)]
pub trait Cover {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the operations this cover supports.
    fn features(&self) -> CoverFeatures;

    /// Returns a snapshot of the cached state.
    fn state(&self) -> CoverState;

    /// Returns the cached position.
    fn current_position(&self) -> i32 {
        self.state().position()
    }

    /// Returns `true` if the cached position is at or below zero.
    fn is_closed(&self) -> bool {
        self.state().is_closed()
    }

    /// Drives the cover open.
    ///
    /// # Errors
    ///
    /// Returns error if the device call fails or opening is unsupported.
    async fn open_cover(&self) -> Result<()> {
        Err(Error::CapabilityNotSupported { capability: "open" })
    }

    /// Drives the cover closed.
    ///
    /// # Errors
    ///
    /// Returns error if the device call fails or closing is unsupported.
    async fn close_cover(&self) -> Result<()> {
        Err(Error::CapabilityNotSupported {
            capability: "close",
        })
    }

    /// Halts the cover.
    ///
    /// # Errors
    ///
    /// Returns error if the device call fails or stopping is unsupported.
    async fn stop_cover(&self) -> Result<()> {
        Err(Error::CapabilityNotSupported { capability: "stop" })
    }

    /// Moves the cover toward `position`.
    ///
    /// Does not change the cached state; the next [`update`](Self::update)
    /// does.
    ///
    /// # Errors
    ///
    /// Returns error if the device call fails or positioning is unsupported.
    async fn set_cover_position(&self, _position: Position) -> Result<()> {
        Err(Error::CapabilityNotSupported {
            capability: "set position",
        })
    }

    /// Queries the device and overwrites the cached state.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails or the reply cannot be parsed.
    async fn update(&self) -> Result<CoverState>;

    /// Executes the operation requested by a service call.
    ///
    /// # Errors
    ///
    /// Returns error if the operation fails, or
    /// `ServiceError::MissingParameter` for a position call without a
    /// position.
    async fn call_service(&self, call: &ServiceCall) -> Result<()> {
        match call.service() {
            CoverService::OpenCover => self.open_cover().await,
            CoverService::CloseCover => self.close_cover().await,
            CoverService::StopCover => self.stop_cover().await,
            CoverService::SetCoverPosition => {
                let position = call
                    .position()
                    .ok_or(ServiceError::MissingParameter(ATTR_POSITION))?;
                self.set_cover_position(position).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    /// A cover that can only be read, to exercise the default methods.
    struct ReadOnly {
        state: Mutex<CoverState>,
    }

    impl Cover for ReadOnly {
        fn name(&self) -> &str {
            "read only"
        }

        fn features(&self) -> CoverFeatures {
            CoverFeatures::default()
        }

        fn state(&self) -> CoverState {
            self.state.lock().clone()
        }

        async fn update(&self) -> Result<CoverState> {
            let mut state = self.state.lock();
            state.set_position(5);
            Ok(state.clone())
        }
    }

    #[tokio::test]
    async fn defaults_report_unsupported() {
        let cover = ReadOnly {
            state: Mutex::new(CoverState::new()),
        };

        assert!(matches!(
            cover.open_cover().await,
            Err(Error::CapabilityNotSupported { capability: "open" })
        ));
        assert!(matches!(
            cover.set_cover_position(Position::OPEN).await,
            Err(Error::CapabilityNotSupported { .. })
        ));
        assert!(matches!(
            cover.call_service(&ServiceCall::new(CoverService::StopCover)).await,
            Err(Error::CapabilityNotSupported { capability: "stop" })
        ));
    }

    #[tokio::test]
    async fn derived_readers_follow_state() {
        let cover = ReadOnly {
            state: Mutex::new(CoverState::new()),
        };
        assert!(cover.is_closed());

        cover.update().await.unwrap();
        assert_eq!(cover.current_position(), 5);
        assert!(!cover.is_closed());
    }

    #[tokio::test]
    async fn position_call_without_position_is_rejected() {
        let cover = ReadOnly {
            state: Mutex::new(CoverState::new()),
        };
        let call = ServiceCall::new(CoverService::SetCoverPosition);
        assert!(matches!(
            cover.call_service(&call).await,
            Err(Error::Service(_))
        ));
    }
}
