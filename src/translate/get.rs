// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read handlers.

use crate::protocol::{
    ActiveState, CarbonDioxideDetected, CurrentAirPurifierState, CurrentHeaterCoolerState,
    CurrentHumidifierDehumidifierState, FilterChangeIndication, OccupancyDetected,
    StatusLowBattery, SwingMode, TargetAirPurifierState, TargetHumidifierDehumidifierState,
    TemperatureDisplayUnits, Value, sanitize,
};
use crate::state::DeviceState;
use crate::types::{BatteryStatus, FilterStatus, Occupancy, OperatingMode, SwingState};

use super::{Capability, ClimateBridge, mode_to_target_state};

impl ClimateBridge {
    /// Reads `capability` from the device state.
    ///
    /// Returns `None` when there is nothing to report: the device has not
    /// reported the field yet, or the capability is write-only.
    #[must_use]
    pub fn get(&self, capability: Capability) -> Option<Value> {
        if !capability.is_readable() {
            tracing::debug!(device = %self.name(), %capability, "Capability is write-only");
            return None;
        }

        let state = self.device.state();
        let value = self.read_value(capability, &state);

        tracing::debug!(
            "{} (GET) - {}: {}",
            self.name(),
            capability,
            self.shown(capability, value.as_ref())
        );
        value
    }

    #[allow(clippy::too_many_lines)]
    fn read_value(&self, capability: Capability, state: &DeviceState) -> Option<Value> {
        let constants = &self.config.constants;

        match capability {
            // ========== Heater-Cooler ==========
            Capability::AcActive => Some(self.active_code(!state.is_heater_cooler_idle())),
            Capability::CurrentHeaterCoolerState => Some(Value::Int(
                constants
                    .current_heater_cooler
                    .encode(current_heater_cooler_state(state)),
            )),
            Capability::TargetHeaterCoolerState => self.target_heater_cooler_value(state),
            Capability::CurrentTemperature => state.current_temperature().map(Value::Float),
            Capability::CoolingThresholdTemperature | Capability::HeatingThresholdTemperature => {
                let target = Value::Float(state.target_temperature()?);
                self.sanitized(capability, target)
            }
            Capability::TemperatureDisplayUnits => {
                let unit = if self.config.temperature_unit.is_fahrenheit() {
                    TemperatureDisplayUnits::Fahrenheit
                } else {
                    TemperatureDisplayUnits::Celsius
                };
                Some(Value::Int(constants.temperature_display_units.encode(unit)))
            }
            Capability::AcSwing | Capability::FanSwing | Capability::DrySwing => {
                state.vertical_swing().map(|swing| self.swing_code(swing))
            }
            Capability::AcRotationSpeed => {
                Some(state.fan_speed().map_or(Value::Int(0), Value::from))
            }

            // ========== Air Purifier ==========
            Capability::PureActive => Some(self.active_code(state.active())),
            Capability::CurrentAirPurifierState => {
                let current = if state.active() {
                    CurrentAirPurifierState::PurifyingAir
                } else {
                    CurrentAirPurifierState::Inactive
                };
                Some(Value::Int(constants.current_air_purifier.encode(current)))
            }
            Capability::TargetAirPurifierState => {
                let target = if state.pure_boost() {
                    TargetAirPurifierState::Auto
                } else {
                    TargetAirPurifierState::Manual
                };
                Some(Value::Int(constants.target_air_purifier.encode(target)))
            }
            Capability::PureRotationSpeed
            | Capability::FanRotationSpeed
            | Capability::DryRotationSpeed => state.fan_speed().map(Value::from),

            // ========== Filter ==========
            Capability::FilterChangeIndication => state.filter_change().map(|status| {
                let indication = match status {
                    FilterStatus::Ok => FilterChangeIndication::FilterOk,
                    FilterStatus::ChangeFilter => FilterChangeIndication::ChangeFilter,
                };
                Value::Int(constants.filter_change_indication.encode(indication))
            }),
            Capability::FilterLifeLevel => state.filter_life_level().map(Value::from),
            Capability::ResetFilterIndication => None,

            // ========== Fan and Dehumidifier ==========
            Capability::FanActive => Some(self.active_code(state.is_running(OperatingMode::Fan))),
            Capability::DryActive => Some(self.active_code(state.is_running(OperatingMode::Dry))),
            Capability::CurrentHumidifierDehumidifierState => {
                let current = if state.is_running(OperatingMode::Dry) {
                    CurrentHumidifierDehumidifierState::Dehumidifying
                } else {
                    CurrentHumidifierDehumidifierState::Inactive
                };
                Some(Value::Int(
                    constants.current_humidifier_dehumidifier.encode(current),
                ))
            }
            Capability::TargetHumidifierDehumidifierState => Some(Value::Int(
                constants
                    .target_humidifier_dehumidifier
                    .encode(TargetHumidifierDehumidifierState::Dehumidifier),
            )),

            // ========== Sensors ==========
            Capability::CurrentRelativeHumidity => state.relative_humidity().map(Value::from),
            Capability::MotionDetected => state.motion_detected().map(Value::Bool),
            Capability::StatusLowBattery => state.low_battery().map(|battery| {
                let status = match battery {
                    BatteryStatus::Normal => StatusLowBattery::BatteryLevelNormal,
                    BatteryStatus::Low => StatusLowBattery::BatteryLevelLow,
                };
                Value::Int(constants.status_low_battery.encode(status))
            }),
            Capability::OccupancyDetected => state.occupancy().map(|occupancy| {
                let detected = match occupancy {
                    Occupancy::NotDetected => OccupancyDetected::OccupancyNotDetected,
                    Occupancy::Detected => OccupancyDetected::OccupancyDetected,
                };
                Value::Int(constants.occupancy_detected.encode(detected))
            }),
            Capability::AirQuality => state.air_quality().map(Value::from),
            Capability::VocDensity => state.voc_density().map(Value::Float),
            Capability::CarbonDioxideDetected => state.carbon_dioxide_detected().map(|abnormal| {
                let detected = if abnormal {
                    CarbonDioxideDetected::Co2LevelsAbnormal
                } else {
                    CarbonDioxideDetected::Co2LevelsNormal
                };
                Value::Int(constants.carbon_dioxide_detected.encode(detected))
            }),
            Capability::CarbonDioxideLevel => state.carbon_dioxide_level().map(Value::Float),

            // ========== Switches ==========
            Capability::HorizontalSwing => Some(Value::Bool(
                state.horizontal_swing().is_some_and(|swing| swing.is_enabled()),
            )),
            Capability::LightSwitch => Some(Value::Bool(state.light())),
            Capability::ClimateReactSwitch => Some(Value::Bool(state.smart_mode().enabled())),
            Capability::SyncButton => Some(Value::Bool(false)),
        }
    }

    /// While the heater-cooler is off or the unit runs fan or dry, the
    /// target state keeps showing what the user last asked for.
    fn target_heater_cooler_value(&self, state: &DeviceState) -> Option<Value> {
        let codes = &self.config.constants.target_heater_cooler;

        if state.is_heater_cooler_idle() {
            return self
                .last_requested_target()
                .map(|target| Value::Int(codes.encode(target)));
        }

        let target = state.mode().and_then(mode_to_target_state)?;
        self.sanitized(Capability::TargetHeaterCoolerState, Value::Int(codes.encode(target)))
    }

    /// Passes `value` through the characteristic's constraints. Unbound
    /// characteristics have none, so the value is returned as is.
    fn sanitized(&self, capability: Capability, value: Value) -> Option<Value> {
        match self.lookup(capability) {
            Some(info) => sanitize(&info.constraints, info.value, Some(value)),
            None => Some(value),
        }
    }

    fn active_code(&self, active: bool) -> Value {
        let state = if active {
            ActiveState::Active
        } else {
            ActiveState::Inactive
        };
        Value::Int(self.config.constants.active.encode(state))
    }

    fn swing_code(&self, swing: SwingState) -> Value {
        let mode = match swing {
            SwingState::Enabled => SwingMode::SwingEnabled,
            SwingState::Disabled => SwingMode::SwingDisabled,
        };
        Value::Int(self.config.constants.swing_mode.encode(mode))
    }
}

/// What the heater-cooler is doing.
///
/// Off, fan and dry always report inactive. Cool and heat report directly.
/// In auto the room temperature is compared with the target; with either
/// unknown the unit is idle.
fn current_heater_cooler_state(state: &DeviceState) -> CurrentHeaterCoolerState {
    if state.is_heater_cooler_idle() {
        return CurrentHeaterCoolerState::Inactive;
    }

    match state.mode() {
        Some(OperatingMode::Cool) => CurrentHeaterCoolerState::Cooling,
        Some(OperatingMode::Heat) => CurrentHeaterCoolerState::Heating,
        _ => match (state.current_temperature(), state.target_temperature()) {
            (Some(current), Some(target)) if current > target => CurrentHeaterCoolerState::Cooling,
            (Some(_), Some(_)) => CurrentHeaterCoolerState::Heating,
            _ => CurrentHeaterCoolerState::Idle,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateChange;

    fn state(changes: Vec<StateChange>) -> DeviceState {
        let mut state = DeviceState::new();
        state.apply(&StateChange::Batch(changes));
        state
    }

    #[test]
    fn inactive_wins_over_mode() {
        let off_cool = state(vec![StateChange::Mode(OperatingMode::Cool)]);
        assert_eq!(
            current_heater_cooler_state(&off_cool),
            CurrentHeaterCoolerState::Inactive
        );

        let fan = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Fan),
        ]);
        assert_eq!(current_heater_cooler_state(&fan), CurrentHeaterCoolerState::Inactive);
    }

    #[test]
    fn explicit_modes_report_directly() {
        let cool = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Cool),
            StateChange::CurrentTemperature(18.0),
            StateChange::TargetTemperature(24.0),
        ]);
        assert_eq!(current_heater_cooler_state(&cool), CurrentHeaterCoolerState::Cooling);

        let heat = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Heat),
        ]);
        assert_eq!(current_heater_cooler_state(&heat), CurrentHeaterCoolerState::Heating);
    }

    #[test]
    fn auto_compares_temperatures() {
        let warm = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Auto),
            StateChange::CurrentTemperature(26.0),
            StateChange::TargetTemperature(24.0),
        ]);
        assert_eq!(current_heater_cooler_state(&warm), CurrentHeaterCoolerState::Cooling);

        let cold = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Auto),
            StateChange::CurrentTemperature(24.0),
            StateChange::TargetTemperature(24.0),
        ]);
        assert_eq!(current_heater_cooler_state(&cold), CurrentHeaterCoolerState::Heating);

        let unknown = state(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Auto),
        ]);
        assert_eq!(current_heater_cooler_state(&unknown), CurrentHeaterCoolerState::Idle);
    }
}
