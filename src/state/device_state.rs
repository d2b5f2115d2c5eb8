// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::types::{
    BatteryStatus, FilterStatus, Occupancy, OperatingMode, Percentage, SwingState,
};

use super::{SmartMode, StateChange};

/// Vendor-native state of an air conditioner, purifier or room sensor.
///
/// Fields are only changed through [`apply`](Self::apply), one whole field
/// at a time. Most readings are optional because the device may not have
/// reported them yet. Temperatures are stored in Celsius.
///
/// # Examples
///
/// ```
/// use climate_hap::state::{DeviceState, StateChange};
/// use climate_hap::types::OperatingMode;
///
/// let mut state = DeviceState::new();
/// state.apply(&StateChange::Mode(OperatingMode::Heat));
/// assert_eq!(state.mode(), Some(OperatingMode::Heat));
/// assert!(!state.active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceState {
    active: bool,
    mode: Option<OperatingMode>,
    target_temperature: Option<f64>,
    current_temperature: Option<f64>,
    fan_speed: Option<Percentage>,
    vertical_swing: Option<SwingState>,
    horizontal_swing: Option<SwingState>,
    light: bool,
    relative_humidity: Option<Percentage>,
    filter_change: Option<FilterStatus>,
    filter_life_level: Option<Percentage>,
    pure_boost: bool,
    smart_mode: SmartMode,
    motion_detected: Option<bool>,
    low_battery: Option<BatteryStatus>,
    occupancy: Option<Occupancy>,
    air_quality: Option<u8>,
    #[serde(rename = "VOCDensity")]
    voc_density: Option<f64>,
    carbon_dioxide_detected: Option<bool>,
    carbon_dioxide_level: Option<f64>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Power and Mode ==========

    /// Returns whether the unit is powered on.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Gets the operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<OperatingMode> {
        self.mode
    }

    /// Returns `true` if the unit is on and running in `mode`.
    #[must_use]
    pub fn is_running(&self, mode: OperatingMode) -> bool {
        self.active && self.mode == Some(mode)
    }

    /// Returns `true` if the unit is off or in a mode handled by the fan
    /// or dehumidifier services.
    #[must_use]
    pub fn is_heater_cooler_idle(&self) -> bool {
        !self.active || matches!(self.mode, Some(OperatingMode::Fan | OperatingMode::Dry))
    }

    // ========== Temperature ==========

    /// Gets the target temperature in Celsius.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.target_temperature
    }

    /// Gets the measured temperature in Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    // ========== Fan, Swing and Light ==========

    /// Gets the fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> Option<Percentage> {
        self.fan_speed
    }

    /// Gets the vertical swing.
    #[must_use]
    pub fn vertical_swing(&self) -> Option<SwingState> {
        self.vertical_swing
    }

    /// Gets the horizontal swing.
    #[must_use]
    pub fn horizontal_swing(&self) -> Option<SwingState> {
        self.horizontal_swing
    }

    /// Returns whether the indoor unit light is on.
    #[must_use]
    pub fn light(&self) -> bool {
        self.light
    }

    // ========== Purifier and Filter ==========

    /// Returns whether purifier boost mode is on.
    #[must_use]
    pub fn pure_boost(&self) -> bool {
        self.pure_boost
    }

    /// Gets the filter maintenance flag.
    #[must_use]
    pub fn filter_change(&self) -> Option<FilterStatus> {
        self.filter_change
    }

    /// Gets the remaining filter life.
    #[must_use]
    pub fn filter_life_level(&self) -> Option<Percentage> {
        self.filter_life_level
    }

    // ========== Climate React ==========

    /// Gets the climate react configuration.
    #[must_use]
    pub fn smart_mode(&self) -> &SmartMode {
        &self.smart_mode
    }

    // ========== Sensors ==========

    /// Gets the measured relative humidity.
    #[must_use]
    pub fn relative_humidity(&self) -> Option<Percentage> {
        self.relative_humidity
    }

    /// Gets the room sensor motion reading.
    #[must_use]
    pub fn motion_detected(&self) -> Option<bool> {
        self.motion_detected
    }

    /// Gets the room sensor battery status.
    #[must_use]
    pub fn low_battery(&self) -> Option<BatteryStatus> {
        self.low_battery
    }

    /// Gets the room sensor occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Option<Occupancy> {
        self.occupancy
    }

    /// Gets the air quality index.
    #[must_use]
    pub fn air_quality(&self) -> Option<u8> {
        self.air_quality
    }

    /// Gets the VOC density.
    #[must_use]
    pub fn voc_density(&self) -> Option<f64> {
        self.voc_density
    }

    /// Gets whether carbon dioxide is above the alarm level.
    #[must_use]
    pub fn carbon_dioxide_detected(&self) -> Option<bool> {
        self.carbon_dioxide_detected
    }

    /// Gets the carbon dioxide level.
    #[must_use]
    pub fn carbon_dioxide_level(&self) -> Option<f64> {
        self.carbon_dioxide_level
    }

    // ========== State Changes ==========

    /// Applies a state change and returns whether the state actually changed.
    ///
    /// # Returns
    ///
    /// Returns `true` if the state was modified, `false` if it was already
    /// at the target value.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        macro_rules! replace {
            ($field:ident, $value:expr) => {{
                let value = $value;
                if self.$field == value {
                    false
                } else {
                    self.$field = value;
                    true
                }
            }};
        }

        match change {
            StateChange::Active(v) => replace!(active, *v),
            StateChange::Mode(v) => replace!(mode, Some(*v)),
            StateChange::TargetTemperature(v) => replace!(target_temperature, Some(*v)),
            StateChange::CurrentTemperature(v) => replace!(current_temperature, Some(*v)),
            StateChange::FanSpeed(v) => replace!(fan_speed, Some(*v)),
            StateChange::VerticalSwing(v) => replace!(vertical_swing, Some(*v)),
            StateChange::HorizontalSwing(v) => replace!(horizontal_swing, Some(*v)),
            StateChange::Light(v) => replace!(light, *v),
            StateChange::RelativeHumidity(v) => replace!(relative_humidity, Some(*v)),
            StateChange::FilterChange(v) => replace!(filter_change, Some(*v)),
            StateChange::FilterLifeLevel(v) => replace!(filter_life_level, Some(*v)),
            StateChange::PureBoost(v) => replace!(pure_boost, *v),
            StateChange::SmartMode(v) => {
                if self.smart_mode == *v {
                    false
                } else {
                    self.smart_mode = v.clone();
                    true
                }
            }
            StateChange::MotionDetected(v) => replace!(motion_detected, Some(*v)),
            StateChange::LowBattery(v) => replace!(low_battery, Some(*v)),
            StateChange::Occupancy(v) => replace!(occupancy, Some(*v)),
            StateChange::AirQuality(v) => replace!(air_quality, Some(*v)),
            StateChange::VocDensity(v) => replace!(voc_density, Some(*v)),
            StateChange::CarbonDioxideDetected(v) => replace!(carbon_dioxide_detected, Some(*v)),
            StateChange::CarbonDioxideLevel(v) => replace!(carbon_dioxide_level, Some(*v)),
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = DeviceState::new();
        assert!(!state.active());
        assert!(state.mode().is_none());
        assert!(state.target_temperature().is_none());
        assert!(!state.smart_mode().enabled());
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut state = DeviceState::new();
        assert!(state.apply(&StateChange::TargetTemperature(23.0)));
        assert!(!state.apply(&StateChange::TargetTemperature(23.0)));
        assert!(state.apply(&StateChange::TargetTemperature(22.5)));
        assert_eq!(state.target_temperature(), Some(22.5));
    }

    #[test]
    fn apply_batch_changes() {
        let mut state = DeviceState::new();
        let changed = state.apply(&StateChange::Batch(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Dry),
            StateChange::FanSpeed(Percentage::clamped(30)),
        ]));

        assert!(changed);
        assert!(state.is_running(OperatingMode::Dry));
        assert!(state.is_heater_cooler_idle());
        assert_eq!(state.fan_speed(), Some(Percentage::clamped(30)));
    }

    #[test]
    fn heater_cooler_idle_when_off() {
        let mut state = DeviceState::new();
        state.apply(&StateChange::Mode(OperatingMode::Cool));
        assert!(state.is_heater_cooler_idle());

        state.apply(&StateChange::Active(true));
        assert!(!state.is_heater_cooler_idle());
    }

    #[test]
    fn smart_mode_replaced_as_whole() {
        let mut state = DeviceState::new();
        let enabled = state.smart_mode().with_enabled(true);

        assert!(state.apply(&StateChange::SmartMode(enabled.clone())));
        assert!(state.smart_mode().enabled());
        assert!(!state.apply(&StateChange::SmartMode(enabled)));
    }

    #[test]
    fn deserialize_vendor_state() {
        let json = r#"{
            "active": true,
            "mode": "COOL",
            "targetTemperature": 24,
            "currentTemperature": 26.3,
            "fanSpeed": 40,
            "verticalSwing": "SWING_ENABLED",
            "lowBattery": "BATTERY_LEVEL_LOW",
            "VOCDensity": 120.5
        }"#;
        let state: DeviceState = serde_json::from_str(json).unwrap();

        assert!(state.is_running(OperatingMode::Cool));
        assert_eq!(state.target_temperature(), Some(24.0));
        assert_eq!(state.vertical_swing(), Some(SwingState::Enabled));
        assert_eq!(state.low_battery(), Some(BatteryStatus::Low));
        assert_eq!(state.voc_density(), Some(120.5));
        assert!(state.horizontal_swing().is_none());
    }
}
