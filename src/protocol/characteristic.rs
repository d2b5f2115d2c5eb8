// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Services, characteristics and their declared constraints.

use std::fmt;

use super::Value;

/// A group of characteristics the host exposes together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Service {
    /// Air conditioner heating and cooling.
    HeaterCooler,
    /// Air purifier.
    AirPurifier,
    /// Fan-only mode of the air conditioner.
    Fan,
    /// Dry mode of the air conditioner.
    Dehumidifier,
    /// Humidity reading.
    HumiditySensor,
    /// Room sensor motion and battery.
    MotionSensor,
    /// Room sensor occupancy.
    OccupancySensor,
    /// Air quality readings.
    AirQualitySensor,
    /// Carbon dioxide readings.
    CarbonDioxideSensor,
    /// Filter state.
    FilterMaintenance,
    /// Horizontal swing switch.
    HorizontalSwingSwitch,
    /// Indoor unit light switch.
    LightSwitch,
    /// Climate react enable switch.
    ClimateReactSwitch,
    /// Stateless button forcing a state sync.
    SyncButton,
}

impl Service {
    /// Returns the service name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HeaterCooler => "HeaterCoolerService",
            Self::AirPurifier => "AirPurifierService",
            Self::Fan => "FanService",
            Self::Dehumidifier => "DehumidifierService",
            Self::HumiditySensor => "HumiditySensor",
            Self::MotionSensor => "MotionSensor",
            Self::OccupancySensor => "OccupancySensor",
            Self::AirQualitySensor => "AirQualitySensor",
            Self::CarbonDioxideSensor => "CarbonDioxideSensor",
            Self::FilterMaintenance => "FilterMaintenance",
            Self::HorizontalSwingSwitch => "HorizontalSwingSwitch",
            Self::LightSwitch => "LightSwitch",
            Self::ClimateReactSwitch => "ClimateReactSwitch",
            Self::SyncButton => "SyncButton",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characteristic types used by the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CharacteristicKind {
    /// Whether the service is running.
    Active,
    /// What the heater-cooler is doing now.
    CurrentHeaterCoolerState,
    /// Requested heater-cooler mode.
    TargetHeaterCoolerState,
    /// Room temperature in Celsius.
    CurrentTemperature,
    /// Temperature to cool down to.
    CoolingThresholdTemperature,
    /// Temperature to heat up to.
    HeatingThresholdTemperature,
    /// Unit temperatures are shown in.
    TemperatureDisplayUnits,
    /// Louvre swing on or off.
    SwingMode,
    /// Fan speed in percent.
    RotationSpeed,
    /// Whether the purifier is purifying.
    CurrentAirPurifierState,
    /// Manual or automatic purifying.
    TargetAirPurifierState,
    /// Whether the filter needs replacing.
    FilterChangeIndication,
    /// Remaining filter life in percent.
    FilterLifeLevel,
    /// Write-only filter reset trigger.
    ResetFilterIndication,
    /// Whether the dehumidifier is running.
    CurrentHumidifierDehumidifierState,
    /// Requested humidifier mode.
    TargetHumidifierDehumidifierState,
    /// Room humidity in percent.
    CurrentRelativeHumidity,
    /// Motion seen by the room sensor.
    MotionDetected,
    /// Room sensor battery level.
    StatusLowBattery,
    /// Presence seen by the room sensor.
    OccupancyDetected,
    /// Air quality index.
    AirQuality,
    /// Volatile organic compound density.
    VocDensity,
    /// Whether CO2 levels are abnormal.
    CarbonDioxideDetected,
    /// CO2 concentration in ppm.
    CarbonDioxideLevel,
    /// Switch state.
    On,
}

impl CharacteristicKind {
    /// Returns the characteristic name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::CurrentHeaterCoolerState => "CurrentHeaterCoolerState",
            Self::TargetHeaterCoolerState => "TargetHeaterCoolerState",
            Self::CurrentTemperature => "CurrentTemperature",
            Self::CoolingThresholdTemperature => "CoolingThresholdTemperature",
            Self::HeatingThresholdTemperature => "HeatingThresholdTemperature",
            Self::TemperatureDisplayUnits => "TemperatureDisplayUnits",
            Self::SwingMode => "SwingMode",
            Self::RotationSpeed => "RotationSpeed",
            Self::CurrentAirPurifierState => "CurrentAirPurifierState",
            Self::TargetAirPurifierState => "TargetAirPurifierState",
            Self::FilterChangeIndication => "FilterChangeIndication",
            Self::FilterLifeLevel => "FilterLifeLevel",
            Self::ResetFilterIndication => "ResetFilterIndication",
            Self::CurrentHumidifierDehumidifierState => "CurrentHumidifierDehumidifierState",
            Self::TargetHumidifierDehumidifierState => "TargetHumidifierDehumidifierState",
            Self::CurrentRelativeHumidity => "CurrentRelativeHumidity",
            Self::MotionDetected => "MotionDetected",
            Self::StatusLowBattery => "StatusLowBattery",
            Self::OccupancyDetected => "OccupancyDetected",
            Self::AirQuality => "AirQuality",
            Self::VocDensity => "VOCDensity",
            Self::CarbonDioxideDetected => "CarbonDioxideDetected",
            Self::CarbonDioxideLevel => "CarbonDioxideLevel",
            Self::On => "On",
        }
    }
}

impl fmt::Display for CharacteristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints a host declares for a characteristic.
///
/// Every constraint is optional. The translation layer reads them but never
/// changes them.
///
/// # Examples
///
/// ```
/// use climate_hap::protocol::Constraints;
///
/// let threshold = Constraints::range(10.0, 35.0).with_min_step(0.5);
/// assert_eq!(threshold.min_value, Some(10.0));
/// assert_eq!(threshold.min_step, Some(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    /// Smallest accepted value.
    pub min_value: Option<f64>,
    /// Largest accepted value.
    pub max_value: Option<f64>,
    /// Exhaustive list of accepted values.
    pub valid_values: Option<Vec<Value>>,
    /// Granularity values are rounded to.
    pub min_step: Option<f64>,
}

impl Constraints {
    /// No constraints at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A closed numeric range.
    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min_value: Some(min),
            max_value: Some(max),
            ..Self::default()
        }
    }

    /// Only the listed values are accepted.
    #[must_use]
    pub fn valid_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            valid_values: Some(values.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Sets the step values are rounded to.
    #[must_use]
    pub fn with_min_step(mut self, step: f64) -> Self {
        self.min_step = Some(step);
        self
    }
}

/// What the host knows about one bound characteristic.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicInfo {
    /// Declared constraints.
    #[serde(flatten)]
    pub constraints: Constraints,
    /// Currently published value, if any.
    pub value: Option<Value>,
}

impl CharacteristicInfo {
    /// Creates info for a characteristic with no published value yet.
    #[must_use]
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            value: None,
        }
    }

    /// Sets the currently published value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_from_host_json() {
        let info: CharacteristicInfo = serde_json::from_str(
            r#"{"minValue": 16, "maxValue": 30, "minStep": 0.5, "value": 24}"#,
        )
        .unwrap();

        assert_eq!(info.constraints, Constraints::range(16.0, 30.0).with_min_step(0.5));
        assert_eq!(info.value, Some(Value::Int(24)));
    }

    #[test]
    fn names() {
        assert_eq!(Service::HeaterCooler.to_string(), "HeaterCoolerService");
        assert_eq!(CharacteristicKind::VocDensity.to_string(), "VOCDensity");
    }
}
