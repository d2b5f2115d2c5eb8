// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode and swing types in the device's own vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode reported by the air conditioner.
///
/// The mode is only meaningful while the unit is active. `Fan` and `Dry`
/// are handled by their own services and take precedence over the
/// heater-cooler view of the device.
///
/// # Examples
///
/// ```
/// use climate_hap::types::OperatingMode;
///
/// let mode: OperatingMode = "cool".parse().unwrap();
/// assert_eq!(mode, OperatingMode::Cool);
/// assert_eq!(mode.as_str(), "COOL");
/// assert!(mode.is_heater_cooler());
/// assert!(!OperatingMode::Fan.is_heater_cooler());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperatingMode {
    /// Automatic heating or cooling.
    Auto,
    /// Cooling.
    Cool,
    /// Heating.
    Heat,
    /// Fan only.
    Fan,
    /// Dehumidifying.
    Dry,
}

impl OperatingMode {
    /// Returns the vendor string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Cool => "COOL",
            Self::Heat => "HEAT",
            Self::Fan => "FAN",
            Self::Dry => "DRY",
        }
    }

    /// Returns `true` for the modes owned by the heater-cooler service.
    #[must_use]
    pub const fn is_heater_cooler(&self) -> bool {
        matches!(self, Self::Auto | Self::Cool | Self::Heat)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AUTO" => Ok(Self::Auto),
            "COOL" => Ok(Self::Cool),
            "HEAT" => Ok(Self::Heat),
            "FAN" => Ok(Self::Fan),
            "DRY" => Ok(Self::Dry),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

/// Swing state of the vertical or horizontal louvres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SwingState {
    /// Louvres are moving.
    #[serde(rename = "SWING_ENABLED")]
    Enabled,
    /// Louvres are fixed.
    #[default]
    #[serde(rename = "SWING_DISABLED")]
    Disabled,
}

impl SwingState {
    /// Returns the vendor string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "SWING_ENABLED",
            Self::Disabled => "SWING_DISABLED",
        }
    }

    /// Returns `true` when swinging.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for SwingState {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl fmt::Display for SwingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwingState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SWING_ENABLED" | "ENABLED" | "ON" => Ok(Self::Enabled),
            "SWING_DISABLED" | "DISABLED" | "OFF" => Ok(Self::Disabled),
            _ => Err(ValueError::InvalidSwing(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [
            OperatingMode::Auto,
            OperatingMode::Cool,
            OperatingMode::Heat,
            OperatingMode::Fan,
            OperatingMode::Dry,
        ] {
            assert_eq!(mode.as_str().parse::<OperatingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_parse_invalid() {
        assert!(matches!(
            "TURBO".parse::<OperatingMode>(),
            Err(ValueError::InvalidMode(_))
        ));
    }

    #[test]
    fn mode_serde_uses_vendor_strings() {
        assert_eq!(serde_json::to_string(&OperatingMode::Dry).unwrap(), "\"DRY\"");
        let mode: OperatingMode = serde_json::from_str("\"HEAT\"").unwrap();
        assert_eq!(mode, OperatingMode::Heat);
    }

    #[test]
    fn swing_from_bool() {
        assert_eq!(SwingState::from(true), SwingState::Enabled);
        assert_eq!(SwingState::from(false), SwingState::Disabled);
    }

    #[test]
    fn swing_serde_uses_vendor_strings() {
        assert_eq!(
            serde_json::to_string(&SwingState::Enabled).unwrap(),
            "\"SWING_ENABLED\""
        );
    }
}
