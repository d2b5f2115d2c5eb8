// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode to target heater-cooler state mapping.

use crate::protocol::TargetHeaterCoolerState;
use crate::types::OperatingMode;

/// Maps a device mode to the heater-cooler target state.
///
/// `Fan` and `Dry` have no heater-cooler counterpart and map to `None`.
///
/// ```
/// use climate_hap::protocol::TargetHeaterCoolerState;
/// use climate_hap::translate::mode_to_target_state;
/// use climate_hap::types::OperatingMode;
///
/// assert_eq!(
///     mode_to_target_state(OperatingMode::Heat),
///     Some(TargetHeaterCoolerState::Heat)
/// );
/// assert_eq!(mode_to_target_state(OperatingMode::Fan), None);
/// ```
#[must_use]
pub const fn mode_to_target_state(mode: OperatingMode) -> Option<TargetHeaterCoolerState> {
    match mode {
        OperatingMode::Auto => Some(TargetHeaterCoolerState::Auto),
        OperatingMode::Cool => Some(TargetHeaterCoolerState::Cool),
        OperatingMode::Heat => Some(TargetHeaterCoolerState::Heat),
        OperatingMode::Fan | OperatingMode::Dry => None,
    }
}

/// Maps a heater-cooler target state to the device mode.
#[must_use]
pub const fn target_state_to_mode(state: TargetHeaterCoolerState) -> OperatingMode {
    match state {
        TargetHeaterCoolerState::Auto => OperatingMode::Auto,
        TargetHeaterCoolerState::Cool => OperatingMode::Cool,
        TargetHeaterCoolerState::Heat => OperatingMode::Heat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heater_cooler_modes_round_trip() {
        for mode in [OperatingMode::Auto, OperatingMode::Cool, OperatingMode::Heat] {
            let state = mode_to_target_state(mode).unwrap();
            assert_eq!(target_state_to_mode(state), mode);
        }
    }

    #[test]
    fn fan_and_dry_have_no_target_state() {
        assert!(mode_to_target_state(OperatingMode::Fan).is_none());
        assert!(mode_to_target_state(OperatingMode::Dry).is_none());
    }
}
