// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capabilities handled by the translation table.

use std::fmt;

use crate::protocol::{CharacteristicKind, Service};

/// One entry of the translation table.
///
/// A capability is a characteristic bound to a particular service. The same
/// characteristic type can appear on several services with different
/// meaning, such as `Active` on the heater-cooler and on the fan.
///
/// # Examples
///
/// ```
/// use climate_hap::Capability;
/// use climate_hap::protocol::{CharacteristicKind, Service};
///
/// assert_eq!(
///     Capability::FanActive.binding(),
///     (Service::Fan, CharacteristicKind::Active)
/// );
/// assert!(Capability::FanActive.is_writable());
/// assert!(!Capability::CurrentTemperature.is_writable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Capability {
    // ========== Heater-Cooler ==========
    /// Power of the heater-cooler.
    AcActive,
    /// What the heater-cooler is doing.
    CurrentHeaterCoolerState,
    /// Requested heater-cooler mode.
    TargetHeaterCoolerState,
    /// Room temperature.
    CurrentTemperature,
    /// Target temperature while cooling.
    CoolingThresholdTemperature,
    /// Target temperature while heating.
    HeatingThresholdTemperature,
    /// Display unit.
    TemperatureDisplayUnits,
    /// Vertical swing of the heater-cooler.
    AcSwing,
    /// Fan speed of the heater-cooler.
    AcRotationSpeed,

    // ========== Air Purifier ==========
    /// Power of the purifier.
    PureActive,
    /// What the purifier is doing.
    CurrentAirPurifierState,
    /// Boost on or off.
    TargetAirPurifierState,
    /// Fan speed of the purifier.
    PureRotationSpeed,

    // ========== Filter ==========
    /// Filter needs changing.
    FilterChangeIndication,
    /// Remaining filter life.
    FilterLifeLevel,
    /// Filter was replaced.
    ResetFilterIndication,

    // ========== Fan ==========
    /// Fan mode on or off.
    FanActive,
    /// Vertical swing in fan mode.
    FanSwing,
    /// Fan speed in fan mode.
    FanRotationSpeed,

    // ========== Dehumidifier ==========
    /// Dry mode on or off.
    DryActive,
    /// What the dehumidifier is doing.
    CurrentHumidifierDehumidifierState,
    /// Requested dehumidifier mode.
    TargetHumidifierDehumidifierState,
    /// Vertical swing in dry mode.
    DrySwing,
    /// Fan speed in dry mode.
    DryRotationSpeed,

    // ========== Sensors ==========
    /// Room humidity.
    CurrentRelativeHumidity,
    /// Room sensor motion.
    MotionDetected,
    /// Room sensor battery.
    StatusLowBattery,
    /// Occupancy.
    OccupancyDetected,
    /// Air quality index.
    AirQuality,
    /// Volatile organic compound density.
    VocDensity,
    /// Carbon dioxide alarm.
    CarbonDioxideDetected,
    /// Carbon dioxide concentration.
    CarbonDioxideLevel,

    // ========== Switches ==========
    /// Horizontal swing.
    HorizontalSwing,
    /// Indoor unit light.
    LightSwitch,
    /// Climate react enabled.
    ClimateReactSwitch,
    /// Stateless state sync trigger.
    SyncButton,
}

impl Capability {
    /// Every capability, in table order.
    pub const ALL: [Self; 36] = [
        Self::AcActive,
        Self::CurrentHeaterCoolerState,
        Self::TargetHeaterCoolerState,
        Self::CurrentTemperature,
        Self::CoolingThresholdTemperature,
        Self::HeatingThresholdTemperature,
        Self::TemperatureDisplayUnits,
        Self::AcSwing,
        Self::AcRotationSpeed,
        Self::PureActive,
        Self::CurrentAirPurifierState,
        Self::TargetAirPurifierState,
        Self::PureRotationSpeed,
        Self::FilterChangeIndication,
        Self::FilterLifeLevel,
        Self::ResetFilterIndication,
        Self::FanActive,
        Self::FanSwing,
        Self::FanRotationSpeed,
        Self::DryActive,
        Self::CurrentHumidifierDehumidifierState,
        Self::TargetHumidifierDehumidifierState,
        Self::DrySwing,
        Self::DryRotationSpeed,
        Self::CurrentRelativeHumidity,
        Self::MotionDetected,
        Self::StatusLowBattery,
        Self::OccupancyDetected,
        Self::AirQuality,
        Self::VocDensity,
        Self::CarbonDioxideDetected,
        Self::CarbonDioxideLevel,
        Self::HorizontalSwing,
        Self::LightSwitch,
        Self::ClimateReactSwitch,
        Self::SyncButton,
    ];

    /// Returns the service and characteristic this capability is bound to.
    #[must_use]
    pub const fn binding(&self) -> (Service, CharacteristicKind) {
        use CharacteristicKind as C;

        match self {
            Self::AcActive => (Service::HeaterCooler, C::Active),
            Self::CurrentHeaterCoolerState => (Service::HeaterCooler, C::CurrentHeaterCoolerState),
            Self::TargetHeaterCoolerState => (Service::HeaterCooler, C::TargetHeaterCoolerState),
            Self::CurrentTemperature => (Service::HeaterCooler, C::CurrentTemperature),
            Self::CoolingThresholdTemperature => {
                (Service::HeaterCooler, C::CoolingThresholdTemperature)
            }
            Self::HeatingThresholdTemperature => {
                (Service::HeaterCooler, C::HeatingThresholdTemperature)
            }
            Self::TemperatureDisplayUnits => (Service::HeaterCooler, C::TemperatureDisplayUnits),
            Self::AcSwing => (Service::HeaterCooler, C::SwingMode),
            Self::AcRotationSpeed => (Service::HeaterCooler, C::RotationSpeed),

            Self::PureActive => (Service::AirPurifier, C::Active),
            Self::CurrentAirPurifierState => (Service::AirPurifier, C::CurrentAirPurifierState),
            Self::TargetAirPurifierState => (Service::AirPurifier, C::TargetAirPurifierState),
            Self::PureRotationSpeed => (Service::AirPurifier, C::RotationSpeed),

            Self::FilterChangeIndication => (Service::FilterMaintenance, C::FilterChangeIndication),
            Self::FilterLifeLevel => (Service::FilterMaintenance, C::FilterLifeLevel),
            Self::ResetFilterIndication => (Service::FilterMaintenance, C::ResetFilterIndication),

            Self::FanActive => (Service::Fan, C::Active),
            Self::FanSwing => (Service::Fan, C::SwingMode),
            Self::FanRotationSpeed => (Service::Fan, C::RotationSpeed),

            Self::DryActive => (Service::Dehumidifier, C::Active),
            Self::CurrentHumidifierDehumidifierState => {
                (Service::Dehumidifier, C::CurrentHumidifierDehumidifierState)
            }
            Self::TargetHumidifierDehumidifierState => {
                (Service::Dehumidifier, C::TargetHumidifierDehumidifierState)
            }
            Self::DrySwing => (Service::Dehumidifier, C::SwingMode),
            Self::DryRotationSpeed => (Service::Dehumidifier, C::RotationSpeed),

            Self::CurrentRelativeHumidity => (Service::HumiditySensor, C::CurrentRelativeHumidity),
            Self::MotionDetected => (Service::MotionSensor, C::MotionDetected),
            Self::StatusLowBattery => (Service::MotionSensor, C::StatusLowBattery),
            Self::OccupancyDetected => (Service::OccupancySensor, C::OccupancyDetected),
            Self::AirQuality => (Service::AirQualitySensor, C::AirQuality),
            Self::VocDensity => (Service::AirQualitySensor, C::VocDensity),
            Self::CarbonDioxideDetected => (Service::CarbonDioxideSensor, C::CarbonDioxideDetected),
            Self::CarbonDioxideLevel => (Service::CarbonDioxideSensor, C::CarbonDioxideLevel),

            Self::HorizontalSwing => (Service::HorizontalSwingSwitch, C::On),
            Self::LightSwitch => (Service::LightSwitch, C::On),
            Self::ClimateReactSwitch => (Service::ClimateReactSwitch, C::On),
            Self::SyncButton => (Service::SyncButton, C::On),
        }
    }

    /// Returns `true` if the host can write this capability.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::AcActive
                | Self::TargetHeaterCoolerState
                | Self::CoolingThresholdTemperature
                | Self::HeatingThresholdTemperature
                | Self::AcSwing
                | Self::AcRotationSpeed
                | Self::PureActive
                | Self::TargetAirPurifierState
                | Self::PureRotationSpeed
                | Self::ResetFilterIndication
                | Self::FanActive
                | Self::FanSwing
                | Self::FanRotationSpeed
                | Self::DryActive
                | Self::TargetHumidifierDehumidifierState
                | Self::DrySwing
                | Self::DryRotationSpeed
                | Self::HorizontalSwing
                | Self::LightSwitch
                | Self::ClimateReactSwitch
                | Self::SyncButton
        )
    }

    /// Returns `true` if the host can read this capability.
    ///
    /// Only the filter reset is write-only.
    #[must_use]
    pub const fn is_readable(&self) -> bool {
        !matches!(self, Self::ResetFilterIndication)
    }

    /// Returns the label used in log lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AcActive => "AC Active State",
            Self::CurrentHeaterCoolerState => "Current HeaterCooler State",
            Self::TargetHeaterCoolerState => "Target HeaterCooler State",
            Self::CurrentTemperature => "Current Temperature",
            Self::CoolingThresholdTemperature => "Target Cooling Temperature",
            Self::HeatingThresholdTemperature => "Target Heating Temperature",
            Self::TemperatureDisplayUnits => "Temperature Display Units",
            Self::AcSwing => "AC Swing",
            Self::AcRotationSpeed => "AC Rotation Speed",
            Self::PureActive => "Pure Active State",
            Self::CurrentAirPurifierState => "Pure Current State",
            Self::TargetAirPurifierState => "Pure Target State (Boost)",
            Self::PureRotationSpeed => "Pure Rotation Speed",
            Self::FilterChangeIndication => "Filter Change Indication",
            Self::FilterLifeLevel => "Filter Life Level",
            Self::ResetFilterIndication => "Reset Filter Indication",
            Self::FanActive => "Fan Active State",
            Self::FanSwing => "Fan Swing",
            Self::FanRotationSpeed => "Fan Rotation Speed",
            Self::DryActive => "Dry Active State",
            Self::CurrentHumidifierDehumidifierState => "Dry Current Dehumidifier State",
            Self::TargetHumidifierDehumidifierState => "Target Dehumidifier State",
            Self::DrySwing => "Dry Swing",
            Self::DryRotationSpeed => "Dry Rotation Speed",
            Self::CurrentRelativeHumidity => "Current Relative Humidity",
            Self::MotionDetected => "Motion Detected",
            Self::StatusLowBattery => "Status Low Battery",
            Self::OccupancyDetected => "Occupancy Detected",
            Self::AirQuality => "Air Quality",
            Self::VocDensity => "Volatile Organic Compound Density",
            Self::CarbonDioxideDetected => "Carbon Dioxide Detected",
            Self::CarbonDioxideLevel => "Carbon Dioxide Level",
            Self::HorizontalSwing => "Horizontal Swing",
            Self::LightSwitch => "Light",
            Self::ClimateReactSwitch => "Climate React Enabled Switch",
            Self::SyncButton => "Sync Button",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bindings_are_unique() {
        let bindings: HashSet<_> = Capability::ALL.iter().map(Capability::binding).collect();
        assert_eq!(bindings.len(), Capability::ALL.len());
    }

    #[test]
    fn all_lists_each_capability_once() {
        let unique: HashSet<_> = Capability::ALL.iter().collect();
        assert_eq!(unique.len(), Capability::ALL.len());
    }

    #[test]
    fn only_filter_reset_is_write_only() {
        for capability in Capability::ALL {
            assert!(capability.is_readable() || capability.is_writable());
        }
        assert!(!Capability::ResetFilterIndication.is_readable());
        assert!(Capability::SyncButton.is_readable());
    }

    #[test]
    fn swings_bind_to_their_own_service() {
        assert_eq!(
            Capability::AcSwing.binding(),
            (Service::HeaterCooler, CharacteristicKind::SwingMode)
        );
        assert_eq!(
            Capability::DrySwing.binding(),
            (Service::Dehumidifier, CharacteristicKind::SwingMode)
        );
    }
}
