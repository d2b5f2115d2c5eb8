// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate react rule derivation.
//!
//! While the unit cools, climate react switches it back on once the room
//! is one degree above the target and off once it is one degree below.
//! Heating swaps the two roles. Both rules reproduce the current settings.

use crate::state::{DeviceState, SmartMode, ThresholdState};
use crate::types::{OperatingMode, TemperatureUnit};

/// Derives the climate react configuration for `state`.
///
/// Returns `None` when auto setup is disabled. Otherwise returns a
/// temperature-triggered configuration with webhooks cleared. Thresholds are
/// only re-derived in `Cool` and `Heat` with a known target temperature; in
/// any other case the previous thresholds are kept.
///
/// The threshold offset is one display degree: 1 in Celsius, 1.8 when the
/// device displays Fahrenheit. Temperatures stay in Celsius.
///
/// # Examples
///
/// ```
/// use climate_hap::state::{DeviceState, StateChange};
/// use climate_hap::translate::recompute;
/// use climate_hap::types::{OperatingMode, TemperatureUnit};
///
/// let mut state = DeviceState::new();
/// state.apply(&StateChange::Batch(vec![
///     StateChange::Mode(OperatingMode::Cool),
///     StateChange::TargetTemperature(24.0),
/// ]));
///
/// let smart = recompute(&state, TemperatureUnit::Celsius, true).unwrap();
/// assert_eq!(smart.high_temperature_threshold(), Some(25.0));
/// assert_eq!(smart.low_temperature_threshold(), Some(23.0));
///
/// assert!(recompute(&state, TemperatureUnit::Celsius, false).is_none());
/// ```
#[must_use]
pub fn recompute(state: &DeviceState, unit: TemperatureUnit, enabled: bool) -> Option<SmartMode> {
    if !enabled {
        return None;
    }

    let base = state.smart_mode().with_temperature_trigger();

    let (Some(mode @ (OperatingMode::Cool | OperatingMode::Heat)), Some(target)) =
        (state.mode(), state.target_temperature())
    else {
        return Some(base);
    };

    let cooling = mode == OperatingMode::Cool;
    let step = unit.step();

    Some(
        base.with_high_rule(target + step, snapshot(state, unit, cooling))
            .with_low_rule(target - step, snapshot(state, unit, !cooling)),
    )
}

fn snapshot(state: &DeviceState, unit: TemperatureUnit, on: bool) -> ThresholdState {
    ThresholdState {
        on,
        target_temperature: state.target_temperature(),
        temperature_unit: unit,
        mode: state.mode(),
        fan_speed: state.fan_speed(),
        swing: state.vertical_swing().unwrap_or_default(),
        horizontal_swing: state.horizontal_swing().unwrap_or_default(),
        light: state.light(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StateChange, TriggerType};
    use crate::types::{Percentage, SwingState};

    fn state(mode: OperatingMode, target: f64) -> DeviceState {
        let mut state = DeviceState::new();
        state.apply(&StateChange::Batch(vec![
            StateChange::Active(true),
            StateChange::Mode(mode),
            StateChange::TargetTemperature(target),
            StateChange::FanSpeed(Percentage::clamped(40)),
            StateChange::VerticalSwing(SwingState::Enabled),
            StateChange::Light(true),
        ]));
        state
    }

    #[test]
    fn cool_arms_on_above_and_off_below() {
        let smart = recompute(&state(OperatingMode::Cool, 24.0), TemperatureUnit::Celsius, true)
            .unwrap();

        assert_eq!(smart.trigger(), Some(TriggerType::Temperature));
        assert_eq!(smart.high_temperature_threshold(), Some(25.0));
        assert_eq!(smart.low_temperature_threshold(), Some(23.0));

        let high = smart.high_temperature_state().unwrap();
        let low = smart.low_temperature_state().unwrap();
        assert!(high.on);
        assert!(!low.on);
        assert_eq!(high.mode, Some(OperatingMode::Cool));
        assert_eq!(high.target_temperature, Some(24.0));
        assert_eq!(high.fan_speed, Some(Percentage::clamped(40)));
        assert_eq!(high.swing, SwingState::Enabled);
        assert_eq!(high.horizontal_swing, SwingState::Disabled);
        assert!(high.light);
    }

    #[test]
    fn heat_in_fahrenheit_uses_wider_step_and_swaps_roles() {
        let smart = recompute(
            &state(OperatingMode::Heat, 20.0),
            TemperatureUnit::Fahrenheit,
            true,
        )
        .unwrap();

        assert!((smart.high_temperature_threshold().unwrap() - 21.8).abs() < 1e-9);
        assert!((smart.low_temperature_threshold().unwrap() - 18.2).abs() < 1e-9);
        assert!(!smart.high_temperature_state().unwrap().on);
        assert!(smart.low_temperature_state().unwrap().on);
        assert_eq!(
            smart.low_temperature_state().unwrap().temperature_unit,
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn disabled_is_a_no_op() {
        let state = state(OperatingMode::Cool, 24.0);
        assert!(recompute(&state, TemperatureUnit::Celsius, false).is_none());
    }

    #[test]
    fn other_modes_keep_previous_thresholds() {
        let mut state = state(OperatingMode::Cool, 24.0);
        let armed = recompute(&state, TemperatureUnit::Celsius, true)
            .unwrap()
            .with_webhooks(Some("https://hooks.example/high".into()), None);
        state.apply(&StateChange::SmartMode(armed));
        state.apply(&StateChange::Mode(OperatingMode::Fan));

        let smart = recompute(&state, TemperatureUnit::Celsius, true).unwrap();

        assert_eq!(smart.high_temperature_threshold(), Some(25.0));
        assert_eq!(smart.low_temperature_threshold(), Some(23.0));
        assert!(smart.high_temperature_webhook().is_none());
    }

    #[test]
    fn enabled_flag_is_preserved() {
        let mut state = state(OperatingMode::Heat, 21.0);
        let enabled = state.smart_mode().with_enabled(true);
        state.apply(&StateChange::SmartMode(enabled));

        let smart = recompute(&state, TemperatureUnit::Celsius, true).unwrap();
        assert!(smart.enabled());
    }
}
