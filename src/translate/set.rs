// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Write handlers.
//!
//! Every write becomes one [`StateChange::Batch`] so the active flag and
//! the mode always change together. Writes that affect what climate react
//! would snapshot re-arm it afterwards.

use crate::protocol::{TargetAirPurifierState, Value};
use crate::state::{DeviceState, StateChange};
use crate::types::{FilterStatus, OperatingMode, Percentage, SwingState};

use super::{Capability, ClimateBridge, target_state_to_mode};

/// A translated host write.
struct Write {
    changes: Vec<StateChange>,
    recompute: bool,
}

impl Write {
    fn new(changes: Vec<StateChange>) -> Self {
        Self {
            changes,
            recompute: false,
        }
    }

    fn recomputing(changes: Vec<StateChange>) -> Self {
        Self {
            changes,
            recompute: true,
        }
    }
}

impl ClimateBridge {
    /// Writes `value` to `capability`.
    ///
    /// Read-only capabilities and values that do not translate are logged
    /// and ignored.
    #[allow(clippy::needless_pass_by_value)]
    pub fn set(&self, capability: Capability, value: Value) {
        if !capability.is_writable() {
            tracing::debug!(
                device = %self.name(),
                %capability,
                "Capability is read-only, ignoring"
            );
            return;
        }

        tracing::debug!(
            "{} (SET) - {}: {}",
            self.name(),
            capability,
            self.shown(capability, Some(&value))
        );

        let Some(write) = self.translate_write(capability, &value) else {
            return;
        };

        if !write.changes.is_empty() {
            self.device.apply(StateChange::Batch(write.changes));
        }
        if write.recompute {
            self.update_climate_react();
        }
    }

    #[allow(clippy::too_many_lines)]
    fn translate_write(&self, capability: Capability, value: &Value) -> Option<Write> {
        let on = value.is_truthy();
        let mode = self.device.read(DeviceState::mode);

        let write = match capability {
            // ========== Heater-Cooler ==========
            Capability::AcActive => {
                if on {
                    Write::recomputing(vec![
                        StateChange::Active(true),
                        StateChange::Mode(self.requested_mode()),
                    ])
                } else if mode.is_some_and(|m| m.is_heater_cooler()) {
                    Write::recomputing(vec![StateChange::Active(false)])
                } else {
                    // Fan or dry is running, not ours to switch off
                    Write::recomputing(Vec::new())
                }
            }
            Capability::TargetHeaterCoolerState => {
                let codes = &self.config.constants.target_heater_cooler;
                let Some(Ok(target)) = value.as_i64().map(|code| codes.decode(code)) else {
                    return self.unusable(capability, value);
                };
                self.set_requested_target(target);
                Write::recomputing(vec![
                    StateChange::Mode(target_state_to_mode(target)),
                    StateChange::Active(true),
                ])
            }
            Capability::CoolingThresholdTemperature | Capability::HeatingThresholdTemperature => {
                let target = value.as_f64().filter(|t| t.is_finite());
                let Some(target) = target else {
                    return self.unusable(capability, value);
                };
                Write::recomputing(vec![
                    StateChange::TargetTemperature(target),
                    StateChange::Active(true),
                    StateChange::Mode(self.requested_mode()),
                ])
            }
            Capability::AcSwing => Write::recomputing(vec![
                StateChange::VerticalSwing(self.swing_state(value)),
                StateChange::Active(true),
                StateChange::Mode(self.requested_mode()),
            ]),
            Capability::AcRotationSpeed => {
                let Some(speed) = percentage(value) else {
                    return self.unusable(capability, value);
                };
                Write::recomputing(vec![
                    StateChange::FanSpeed(speed),
                    StateChange::Active(true),
                    StateChange::Mode(self.requested_mode()),
                ])
            }

            // ========== Air Purifier ==========
            Capability::PureActive => Write::recomputing(vec![StateChange::Active(on)]),
            Capability::TargetAirPurifierState => {
                let codes = &self.config.constants.target_air_purifier;
                let boost = match value.as_i64().map(|code| codes.decode(code)) {
                    Some(Ok(target)) => target == TargetAirPurifierState::Auto,
                    _ => return self.unusable(capability, value),
                };
                Write::new(vec![StateChange::PureBoost(boost)])
            }
            Capability::PureRotationSpeed => {
                let Some(speed) = percentage(value) else {
                    return self.unusable(capability, value);
                };
                if speed.is_zero() {
                    Write::recomputing(vec![StateChange::Active(false)])
                } else {
                    Write::recomputing(vec![
                        StateChange::FanSpeed(speed),
                        StateChange::Active(true),
                    ])
                }
            }

            // ========== Filter ==========
            Capability::ResetFilterIndication => Write::new(vec![
                StateChange::FilterChange(FilterStatus::Ok),
                StateChange::FilterLifeLevel(Percentage::FULL),
            ]),

            // ========== Fan ==========
            Capability::FanActive => Write::new(switch_mode(OperatingMode::Fan, on, mode)),
            Capability::FanSwing => Write::new(vec![
                StateChange::VerticalSwing(self.swing_state(value)),
                StateChange::Active(true),
                StateChange::Mode(OperatingMode::Fan),
            ]),
            Capability::FanRotationSpeed => {
                let Some(speed) = percentage(value) else {
                    return self.unusable(capability, value);
                };
                Write::new(vec![
                    StateChange::FanSpeed(speed),
                    StateChange::Active(true),
                    StateChange::Mode(OperatingMode::Fan),
                ])
            }

            // ========== Dehumidifier ==========
            Capability::DryActive => Write::new(switch_mode(OperatingMode::Dry, on, mode)),
            Capability::TargetHumidifierDehumidifierState => Write::new(vec![
                StateChange::Active(true),
                StateChange::Mode(OperatingMode::Dry),
            ]),
            Capability::DrySwing => Write::new(vec![
                StateChange::VerticalSwing(self.swing_state(value)),
                StateChange::Active(true),
                StateChange::Mode(OperatingMode::Dry),
            ]),
            Capability::DryRotationSpeed => {
                let Some(speed) = percentage(value) else {
                    return self.unusable(capability, value);
                };
                Write::new(vec![
                    StateChange::FanSpeed(speed),
                    StateChange::Active(true),
                    StateChange::Mode(OperatingMode::Dry),
                ])
            }

            // ========== Switches ==========
            Capability::HorizontalSwing => {
                Write::recomputing(vec![StateChange::HorizontalSwing(SwingState::from(on))])
            }
            Capability::LightSwitch => Write::recomputing(vec![StateChange::Light(on)]),
            Capability::ClimateReactSwitch => {
                let smart_mode = self.device.read(|state| state.smart_mode().with_enabled(on));
                Write::new(vec![StateChange::SmartMode(smart_mode)])
            }
            Capability::SyncButton => {
                if on {
                    self.device.sync_state();
                }
                return None;
            }

            Capability::CurrentHeaterCoolerState
            | Capability::CurrentTemperature
            | Capability::TemperatureDisplayUnits
            | Capability::CurrentAirPurifierState
            | Capability::FilterChangeIndication
            | Capability::FilterLifeLevel
            | Capability::CurrentHumidifierDehumidifierState
            | Capability::CurrentRelativeHumidity
            | Capability::MotionDetected
            | Capability::StatusLowBattery
            | Capability::OccupancyDetected
            | Capability::AirQuality
            | Capability::VocDensity
            | Capability::CarbonDioxideDetected
            | Capability::CarbonDioxideLevel => return None,
        };

        Some(write)
    }

    fn swing_state(&self, value: &Value) -> SwingState {
        let enabled = self.config.constants.swing_mode.swing_enabled;
        SwingState::from(value.as_i64() == Some(enabled))
    }

    fn unusable(&self, capability: Capability, value: &Value) -> Option<Write> {
        tracing::debug!(device = %self.name(), %capability, %value, "Ignoring unusable value");
        None
    }
}

/// Turns a mode on, or off only if the unit is currently in that mode.
fn switch_mode(target: OperatingMode, on: bool, current: Option<OperatingMode>) -> Vec<StateChange> {
    if on {
        vec![StateChange::Mode(target), StateChange::Active(true)]
    } else if current == Some(target) {
        vec![StateChange::Active(false)]
    } else {
        Vec::new()
    }
}

fn percentage(value: &Value) -> Option<Percentage> {
    value.as_f64().and_then(Percentage::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_off_other_mode_does_nothing() {
        assert!(switch_mode(OperatingMode::Fan, false, Some(OperatingMode::Cool)).is_empty());
        assert!(switch_mode(OperatingMode::Dry, false, None).is_empty());
        assert_eq!(
            switch_mode(OperatingMode::Dry, false, Some(OperatingMode::Dry)),
            vec![StateChange::Active(false)]
        );
    }

    #[test]
    fn switching_on_sets_mode_first() {
        assert_eq!(
            switch_mode(OperatingMode::Fan, true, Some(OperatingMode::Heat)),
            vec![
                StateChange::Mode(OperatingMode::Fan),
                StateChange::Active(true)
            ]
        );
    }

    #[test]
    fn speeds_from_host_numbers() {
        assert_eq!(percentage(&Value::Float(33.4)), Some(Percentage::clamped(33)));
        assert_eq!(percentage(&Value::Int(0)), Some(Percentage::ZERO));
        assert_eq!(percentage(&Value::Bool(true)), None);
    }
}
