// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motor operation codes.

/// Motor operation understood by the curtain's `setOperation` call.
///
/// # Examples
///
/// ```
/// use miio_cover::types::OperationCode;
///
/// assert_eq!(OperationCode::Close.code(), 0);
/// assert_eq!(OperationCode::Stop.code(), 1);
/// assert_eq!(OperationCode::Open.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationCode {
    /// Drive the curtain closed.
    Close,
    /// Halt the motor.
    Stop,
    /// Drive the curtain open.
    Open,
}

impl OperationCode {
    /// Returns the numeric code sent to the device.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Close => 0,
            Self::Stop => 1,
            Self::Open => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_device_contract() {
        assert_eq!(OperationCode::Close.code(), 0);
        assert_eq!(OperationCode::Stop.code(), 1);
        assert_eq!(OperationCode::Open.code(), 2);
    }
}
