// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types in the device's vocabulary.
//!
//! # Types
//!
//! - [`OperatingMode`] - AUTO/COOL/HEAT/FAN/DRY
//! - [`SwingState`] - Louvre swing on/off
//! - [`Percentage`] - Fan speed, humidity, filter life (0-100%)
//! - [`TemperatureUnit`] - Display unit, plus Celsius/Fahrenheit conversion
//! - [`BatteryStatus`], [`Occupancy`], [`FilterStatus`] - Enumerated readings

mod mode;
mod percentage;
mod sensor;
mod temperature;

pub use mode::{OperatingMode, SwingState};
pub use percentage::Percentage;
pub use sensor::{BatteryStatus, FilterStatus, Occupancy};
pub use temperature::{TemperatureUnit, to_celsius, to_fahrenheit};
