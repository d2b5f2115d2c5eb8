// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature units and conversions.
//!
//! Device temperatures are stored in Celsius. The display unit only changes
//! how values are logged and how far apart climate react thresholds sit.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Converts degrees Fahrenheit to degrees Celsius.
///
/// ```
/// use climate_hap::types::to_celsius;
///
/// assert!((to_celsius(212.0) - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Converts degrees Celsius to degrees Fahrenheit, rounded to the nearest
/// whole degree.
///
/// ```
/// use climate_hap::types::to_fahrenheit;
///
/// assert_eq!(to_fahrenheit(22.0), 72.0);
/// ```
#[must_use]
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(1.8, 32.0).round()
}

/// Unit a device displays temperatures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the vendor symbol (`"C"` or `"F"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Returns `true` for Fahrenheit.
    #[must_use]
    pub const fn is_fahrenheit(&self) -> bool {
        matches!(self, Self::Fahrenheit)
    }

    /// One display degree expressed in Celsius.
    ///
    /// Climate react thresholds sit one step above and below the target.
    /// For a Fahrenheit display the step is sized to one Fahrenheit degree
    /// even though the stored value is Celsius.
    #[must_use]
    pub const fn step(&self) -> f64 {
        match self {
            Self::Celsius => 1.0,
            Self::Fahrenheit => 1.8,
        }
    }

    /// Formats a Celsius value for log output in this unit.
    #[must_use]
    pub fn display(&self, celsius: f64) -> String {
        match self {
            Self::Celsius => format!("{celsius}ºC"),
            Self::Fahrenheit => format!("{}ºF", to_fahrenheit(celsius)),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" | "CELSIUS" => Ok(Self::Celsius),
            "F" | "FAHRENHEIT" => Ok(Self::Fahrenheit),
            _ => Err(ValueError::InvalidTemperatureUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_rounds_to_whole_degrees() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(21.5), 71.0);
        assert_eq!(to_fahrenheit(23.9), 75.0);
    }

    #[test]
    fn celsius_conversion() {
        assert!((to_celsius(32.0)).abs() < 1e-9);
        assert!((to_celsius(77.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn unit_step() {
        assert!((TemperatureUnit::Celsius.step() - 1.0).abs() < f64::EPSILON);
        assert!((TemperatureUnit::Fahrenheit.step() - 1.8).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_parse() {
        assert_eq!("c".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!(
            "Fahrenheit".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Fahrenheit
        );
        assert!("K".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn unit_display_for_logging() {
        assert_eq!(TemperatureUnit::Celsius.display(22.5), "22.5ºC");
        assert_eq!(TemperatureUnit::Fahrenheit.display(22.0), "72ºF");
    }

    #[test]
    fn unit_serde_uses_vendor_symbol() {
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap(),
            "\"F\""
        );
    }
}
