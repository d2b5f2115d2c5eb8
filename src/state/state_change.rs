// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A state change replaces one field of a [`DeviceState`](super::DeviceState)
//! as a whole. Nested records such as [`SmartMode`] are never edited in
//! place: a new record is built and sent as one change. The device connector
//! receives exactly these changes and turns each into a device command.
//!
//! # Examples
//!
//! ```
//! use climate_hap::state::{DeviceState, StateChange};
//! use climate_hap::types::OperatingMode;
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! let change = StateChange::Batch(vec![
//!     StateChange::Active(true),
//!     StateChange::Mode(OperatingMode::Cool),
//! ]);
//! assert!(state.apply(&change));
//! assert!(!state.apply(&change));
//! ```

use crate::types::{
    BatteryStatus, FilterStatus, Occupancy, OperatingMode, Percentage, SwingState,
};

use super::SmartMode;

/// Replacement of a single device state field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum StateChange {
    /// Unit powered on or off.
    Active(bool),
    /// Operating mode.
    Mode(OperatingMode),
    /// Target temperature in Celsius.
    TargetTemperature(f64),
    /// Measured room temperature in Celsius.
    CurrentTemperature(f64),
    /// Fan speed.
    FanSpeed(Percentage),
    /// Vertical louvre swing.
    VerticalSwing(SwingState),
    /// Horizontal louvre swing.
    HorizontalSwing(SwingState),
    /// Indoor unit light.
    Light(bool),
    /// Measured relative humidity.
    RelativeHumidity(Percentage),
    /// Filter maintenance flag.
    FilterChange(FilterStatus),
    /// Remaining filter life.
    FilterLifeLevel(Percentage),
    /// Purifier boost (automatic) mode.
    PureBoost(bool),
    /// Whole climate react configuration.
    SmartMode(SmartMode),
    /// Room sensor motion.
    MotionDetected(bool),
    /// Room sensor battery.
    LowBattery(BatteryStatus),
    /// Room sensor occupancy.
    Occupancy(Occupancy),
    /// Air quality index (0 unknown, 1 excellent to 5 poor).
    AirQuality(u8),
    /// Volatile organic compound density in µg/m³.
    VocDensity(f64),
    /// Carbon dioxide above the alarm level.
    CarbonDioxideDetected(bool),
    /// Carbon dioxide level in ppm.
    CarbonDioxideLevel(f64),

    /// Multiple changes applied together.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Returns the vendor field name the change replaces.
    ///
    /// Batches return `"batch"`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Active(_) => "active",
            Self::Mode(_) => "mode",
            Self::TargetTemperature(_) => "targetTemperature",
            Self::CurrentTemperature(_) => "currentTemperature",
            Self::FanSpeed(_) => "fanSpeed",
            Self::VerticalSwing(_) => "verticalSwing",
            Self::HorizontalSwing(_) => "horizontalSwing",
            Self::Light(_) => "light",
            Self::RelativeHumidity(_) => "relativeHumidity",
            Self::FilterChange(_) => "filterChange",
            Self::FilterLifeLevel(_) => "filterLifeLevel",
            Self::PureBoost(_) => "pureBoost",
            Self::SmartMode(_) => "smartMode",
            Self::MotionDetected(_) => "motionDetected",
            Self::LowBattery(_) => "lowBattery",
            Self::Occupancy(_) => "occupancy",
            Self::AirQuality(_) => "airQuality",
            Self::VocDensity(_) => "VOCDensity",
            Self::CarbonDioxideDetected(_) => "carbonDioxideDetected",
            Self::CarbonDioxideLevel(_) => "carbonDioxideLevel",
            Self::Batch(_) => "batch",
        }
    }

    /// Flattens nested batches into single-field changes, in order.
    #[must_use]
    pub fn into_fields(self) -> Vec<StateChange> {
        match self {
            Self::Batch(changes) => changes.into_iter().flat_map(Self::into_fields).collect(),
            single => vec![single],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_vendor_state() {
        assert_eq!(StateChange::Active(true).field(), "active");
        assert_eq!(StateChange::VocDensity(1.0).field(), "VOCDensity");
        assert_eq!(StateChange::SmartMode(SmartMode::new()).field(), "smartMode");
    }

    #[test]
    fn into_fields_flattens_nested_batches() {
        let change = StateChange::Batch(vec![
            StateChange::Active(true),
            StateChange::Batch(vec![
                StateChange::Mode(OperatingMode::Heat),
                StateChange::TargetTemperature(21.0),
            ]),
        ]);

        let fields: Vec<_> = change.into_fields().iter().map(StateChange::field).collect();
        assert_eq!(fields, ["active", "mode", "targetTemperature"]);
    }

    #[test]
    fn serializes_as_field_and_value() {
        let json = serde_json::to_value(StateChange::Mode(OperatingMode::Fan)).unwrap();
        assert_eq!(json["field"], "mode");
        assert_eq!(json["value"], "FAN");
    }
}
