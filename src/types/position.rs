// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover position type.

use std::fmt;

use crate::error::ValueError;

/// Target position of a cover as a percentage (0-100).
///
/// 0 is fully closed and 100 is fully open.
///
/// # Examples
///
/// ```
/// use miio_cover::types::Position;
///
/// let half = Position::new(50).unwrap();
/// assert_eq!(half.value(), 50);
///
/// assert_eq!(Position::CLOSED.value(), 0);
/// assert_eq!(Position::OPEN.value(), 100);
///
/// assert!(Position::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Fully closed.
    pub const CLOSED: Self = Self(0);

    /// Fully open.
    pub const OPEN: Self = Self(100);

    /// Creates a new position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Position {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_bounds() {
        assert!(Position::new(0).is_ok());
        assert!(Position::new(100).is_ok());
        assert!(Position::new(101).is_err());
    }

    #[test]
    fn position_from_i64() {
        assert_eq!(Position::try_from(42_i64).unwrap().value(), 42);
        assert_eq!(
            Position::try_from(-1_i64),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: -1
            })
        );
        assert!(Position::try_from(1000_i64).is_err());
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(75).unwrap().to_string(), "75%");
    }
}
