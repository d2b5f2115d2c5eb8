// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated sensor and maintenance readings.

/// Battery level reported by a room sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum BatteryStatus {
    /// Battery is fine.
    #[default]
    #[serde(rename = "BATTERY_LEVEL_NORMAL")]
    Normal,
    /// Battery needs replacing.
    #[serde(rename = "BATTERY_LEVEL_LOW")]
    Low,
}

/// Occupancy reported by the room sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Occupancy {
    /// Nobody detected.
    #[default]
    #[serde(rename = "OCCUPANCY_NOT_DETECTED")]
    NotDetected,
    /// Someone detected.
    #[serde(rename = "OCCUPANCY_DETECTED")]
    Detected,
}

/// Filter maintenance flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum FilterStatus {
    /// Filter does not need attention.
    #[default]
    #[serde(rename = "FILTER_OK")]
    Ok,
    /// Filter should be cleaned or replaced.
    #[serde(rename = "CHANGE_FILTER")]
    ChangeFilter,
}

impl FilterStatus {
    /// Returns `true` if the filter should be changed.
    #[must_use]
    pub const fn needs_change(&self) -> bool {
        matches!(self, Self::ChangeFilter)
    }
}
