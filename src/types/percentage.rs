// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type for fan speed, humidity and filter life.

use std::fmt;

use crate::error::ValueError;

/// A whole percentage (0-100).
///
/// Used for the fan speed, the relative humidity and the remaining filter
/// life reported by the device.
///
/// # Examples
///
/// ```
/// use climate_hap::types::Percentage;
///
/// let speed = Percentage::new(40).unwrap();
/// assert_eq!(speed.value(), 40);
///
/// assert_eq!(Percentage::FULL.value(), 100);
/// assert!(Percentage::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const FULL: Self = Self(100);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage, clamping to the valid range.
    ///
    /// ```
    /// use climate_hap::types::Percentage;
    ///
    /// assert_eq!(Percentage::clamped(150).value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a percentage from a host-supplied number.
    ///
    /// The number is rounded to the nearest integer and clamped to 0-100.
    /// Returns `None` for NaN.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        // Safe: clamped to [0, 100] before the cast
        Some(Self(value.round().clamp(0.0, 100.0) as u8))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` for 0%.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_valid_values() {
        for v in 0..=100 {
            assert_eq!(Percentage::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn percentage_invalid_value() {
        assert!(Percentage::new(101).is_err());
    }

    #[test]
    fn percentage_from_f64() {
        assert_eq!(Percentage::from_f64(42.4), Some(Percentage::clamped(42)));
        assert_eq!(Percentage::from_f64(-3.0), Some(Percentage::ZERO));
        assert_eq!(Percentage::from_f64(250.0), Some(Percentage::FULL));
        assert_eq!(Percentage::from_f64(f64::NAN), None);
    }

    #[test]
    fn percentage_display() {
        assert_eq!(Percentage::clamped(75).to_string(), "75%");
    }

    #[test]
    fn percentage_serde_rejects_out_of_range() {
        let ok: Percentage = serde_json::from_str("55").unwrap();
        assert_eq!(ok.value(), 55);
        assert!(serde_json::from_str::<Percentage>("120").is_err());
    }
}
