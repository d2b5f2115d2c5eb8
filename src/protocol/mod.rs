// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The accessory protocol side of the bridge.
//!
//! This module describes what the host exposes: services, characteristics,
//! their [`Constraints`] and the [`Value`]s they hold. It also provides the
//! sanitizer that validates values before they are accepted or published.
//!
//! # Components
//!
//! - [`Service`] / [`CharacteristicKind`] - Where a value lives on the host
//! - [`Constraints`] / [`CharacteristicInfo`] - What the host declared
//! - [`HapConstants`] - Resolved codes of enumerated characteristics
//! - [`CharacteristicHost`] - Trait the host implements
//! - [`sanitize`] / [`check`] - Constraint enforcement

mod characteristic;
mod constants;
mod host;
mod sanitizer;
mod value;

pub use characteristic::{CharacteristicInfo, CharacteristicKind, Constraints, Service};
pub use constants::{
    ActiveCodes, ActiveState, CarbonDioxideDetected, CarbonDioxideDetectedCodes,
    CurrentAirPurifierCodes, CurrentAirPurifierState, CurrentHeaterCoolerCodes,
    CurrentHeaterCoolerState, CurrentHumidifierDehumidifierCodes,
    CurrentHumidifierDehumidifierState, FilterChangeIndication, FilterChangeIndicationCodes,
    HapConstants, OccupancyDetected, OccupancyDetectedCodes, StatusLowBattery,
    StatusLowBatteryCodes, SwingMode, SwingModeCodes, TargetAirPurifierCodes,
    TargetAirPurifierState, TargetHeaterCoolerCodes, TargetHeaterCoolerState,
    TargetHumidifierDehumidifierCodes, TargetHumidifierDehumidifierState,
    TemperatureDisplayUnits, TemperatureDisplayUnitsCodes,
};
pub use host::CharacteristicHost;
pub use sanitizer::{check, round_to_step, sanitize};
pub use value::Value;
