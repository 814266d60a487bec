// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover capability flags.
//!
//! Every [`Cover`](crate::cover::Cover) exposes the same set of methods.
//! [`CoverFeatures`] declares which of them do something meaningful for the
//! device, so the service dispatcher can skip the rest.

use crate::service::CoverService;

/// Operations a cover supports.
///
/// # Examples
///
/// ```
/// use miio_cover::CoverFeatures;
/// use miio_cover::service::CoverService;
///
/// let curtain = CoverFeatures::curtain();
/// assert!(curtain.supports(CoverService::SetCoverPosition));
///
/// let basic = CoverFeatures::builder().with_open().with_close().build();
/// assert!(!basic.supports(CoverService::StopCover));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
// Each flag is an independent feature of the motor.
#[allow(clippy::struct_excessive_bools)]
pub struct CoverFeatures {
    /// Can be driven open.
    pub open: bool,

    /// Can be driven closed.
    pub close: bool,

    /// Can be halted mid-travel.
    pub stop: bool,

    /// Accepts a target position.
    pub set_position: bool,
}

impl CoverFeatures {
    /// Features of a motorized curtain: open, close, stop and set position.
    #[must_use]
    pub const fn curtain() -> Self {
        Self {
            open: true,
            close: true,
            stop: true,
            set_position: true,
        }
    }

    /// Returns a builder starting with no features.
    #[must_use]
    pub fn builder() -> CoverFeaturesBuilder {
        CoverFeaturesBuilder::default()
    }

    /// Returns whether the given service is meaningful for this cover.
    #[must_use]
    pub const fn supports(&self, service: CoverService) -> bool {
        match service {
            CoverService::OpenCover => self.open,
            CoverService::CloseCover => self.close,
            CoverService::StopCover => self.stop,
            CoverService::SetCoverPosition => self.set_position,
        }
    }
}

/// Builder for custom feature sets.
#[derive(Debug, Default)]
pub struct CoverFeaturesBuilder {
    inner: CoverFeatures,
}

impl CoverFeaturesBuilder {
    /// Enables opening.
    #[must_use]
    pub fn with_open(mut self) -> Self {
        self.inner.open = true;
        self
    }

    /// Enables closing.
    #[must_use]
    pub fn with_close(mut self) -> Self {
        self.inner.close = true;
        self
    }

    /// Enables stopping.
    #[must_use]
    pub fn with_stop(mut self) -> Self {
        self.inner.stop = true;
        self
    }

    /// Enables positioning.
    #[must_use]
    pub fn with_set_position(mut self) -> Self {
        self.inner.set_position = true;
        self
    }

    /// Builds the feature set.
    #[must_use]
    pub fn build(self) -> CoverFeatures {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_supports_nothing() {
        let features = CoverFeatures::default();
        for service in CoverService::ALL {
            assert!(!features.supports(service));
        }
    }

    #[test]
    fn curtain_supports_everything() {
        let features = CoverFeatures::curtain();
        for service in CoverService::ALL {
            assert!(features.supports(service));
        }
    }

    #[test]
    fn builder_sets_flags() {
        let features = CoverFeatures::builder().with_stop().with_set_position().build();
        assert!(!features.open);
        assert!(!features.close);
        assert!(features.supports(CoverService::StopCover));
        assert!(features.supports(CoverService::SetCoverPosition));
    }
}
