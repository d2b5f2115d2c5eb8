// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated characteristic states and their protocol codes.
//!
//! The host defines the numeric code of every enumerated state. The codes
//! are resolved once and handed to the translation layer inside
//! [`HapConstants`], which defaults to the `HomeKit` values.
//!
//! # Examples
//!
//! ```
//! use climate_hap::protocol::{HapConstants, TargetHeaterCoolerState};
//!
//! let constants = HapConstants::default();
//! let cool = constants.target_heater_cooler.encode(TargetHeaterCoolerState::Cool);
//! assert_eq!(cool, 2);
//! assert_eq!(
//!     constants.target_heater_cooler.decode(cool).unwrap(),
//!     TargetHeaterCoolerState::Cool
//! );
//! ```

use crate::error::ValueError;

/// Defines an enumerated protocol state together with the struct holding
/// its codes.
macro_rules! protocol_states {
    (
        $(#[$meta:meta])*
        $name:ident => $codes:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $field:ident = $default:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Returns the protocol name of the state.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[doc = concat!("Protocol codes of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $codes {
            $(
                #[doc = concat!("Code of `", stringify!($variant), "`.")]
                pub $field: i64,
            )+
        }

        impl Default for $codes {
            fn default() -> Self {
                Self { $( $field: $default ),+ }
            }
        }

        impl $codes {
            /// Returns the code of `state`.
            #[must_use]
            pub const fn encode(&self, state: $name) -> i64 {
                match state {
                    $( $name::$variant => self.$field ),+
                }
            }

            /// Returns the state with `code`.
            ///
            /// # Errors
            ///
            /// Returns `ValueError::InvalidCode` if no state has this code.
            pub fn decode(&self, code: i64) -> Result<$name, ValueError> {
                $(
                    if code == self.$field {
                        return Ok($name::$variant);
                    }
                )+
                Err(ValueError::InvalidCode {
                    enumeration: stringify!($name),
                    code,
                })
            }

            /// Returns `true` if no two states share a code.
            #[must_use]
            pub fn is_distinct(&self) -> bool {
                let codes = [$( self.$field ),+];
                codes
                    .iter()
                    .enumerate()
                    .all(|(i, code)| !codes[i + 1..].contains(code))
            }
        }
    };
}

protocol_states! {
    /// Active characteristic.
    ActiveState => ActiveCodes {
        /// Unit off.
        Inactive => inactive = 0,
        /// Unit on.
        Active => active = 1,
    }
}

protocol_states! {
    /// What the heater-cooler is currently doing.
    CurrentHeaterCoolerState => CurrentHeaterCoolerCodes {
        /// Off or in a non heater-cooler mode.
        Inactive => inactive = 0,
        /// On but not heating or cooling.
        Idle => idle = 1,
        /// Heating.
        Heating => heating = 2,
        /// Cooling.
        Cooling => cooling = 3,
    }
}

protocol_states! {
    /// Heater-cooler mode requested by the user.
    TargetHeaterCoolerState => TargetHeaterCoolerCodes {
        /// Heat or cool as needed.
        Auto => auto = 0,
        /// Heat.
        Heat => heat = 1,
        /// Cool.
        Cool => cool = 2,
    }
}

protocol_states! {
    /// Unit temperatures are shown in.
    TemperatureDisplayUnits => TemperatureDisplayUnitsCodes {
        /// Celsius.
        Celsius => celsius = 0,
        /// Fahrenheit.
        Fahrenheit => fahrenheit = 1,
    }
}

protocol_states! {
    /// Swing mode characteristic.
    SwingMode => SwingModeCodes {
        /// Fixed louvres.
        SwingDisabled => swing_disabled = 0,
        /// Moving louvres.
        SwingEnabled => swing_enabled = 1,
    }
}

protocol_states! {
    /// What the purifier is currently doing.
    CurrentAirPurifierState => CurrentAirPurifierCodes {
        /// Off.
        Inactive => inactive = 0,
        /// On but idle.
        Idle => idle = 1,
        /// Purifying.
        PurifyingAir => purifying_air = 2,
    }
}

protocol_states! {
    /// Purifier mode requested by the user.
    TargetAirPurifierState => TargetAirPurifierCodes {
        /// Fixed fan speed.
        Manual => manual = 0,
        /// Boost / automatic.
        Auto => auto = 1,
    }
}

protocol_states! {
    /// Filter change indication.
    FilterChangeIndication => FilterChangeIndicationCodes {
        /// Filter fine.
        FilterOk => filter_ok = 0,
        /// Filter needs changing.
        ChangeFilter => change_filter = 1,
    }
}

protocol_states! {
    /// What the dehumidifier is currently doing.
    CurrentHumidifierDehumidifierState => CurrentHumidifierDehumidifierCodes {
        /// Off.
        Inactive => inactive = 0,
        /// On but idle.
        Idle => idle = 1,
        /// Humidifying.
        Humidifying => humidifying = 2,
        /// Dehumidifying.
        Dehumidifying => dehumidifying = 3,
    }
}

protocol_states! {
    /// Humidifier-dehumidifier mode requested by the user.
    TargetHumidifierDehumidifierState => TargetHumidifierDehumidifierCodes {
        /// Either.
        HumidifierOrDehumidifier => humidifier_or_dehumidifier = 0,
        /// Humidify only.
        Humidifier => humidifier = 1,
        /// Dehumidify only.
        Dehumidifier => dehumidifier = 2,
    }
}

protocol_states! {
    /// Battery status.
    StatusLowBattery => StatusLowBatteryCodes {
        /// Battery fine.
        BatteryLevelNormal => battery_level_normal = 0,
        /// Battery low.
        BatteryLevelLow => battery_level_low = 1,
    }
}

protocol_states! {
    /// Occupancy reading.
    OccupancyDetected => OccupancyDetectedCodes {
        /// Nobody there.
        OccupancyNotDetected => occupancy_not_detected = 0,
        /// Someone there.
        OccupancyDetected => occupancy_detected = 1,
    }
}

protocol_states! {
    /// Carbon dioxide alarm.
    CarbonDioxideDetected => CarbonDioxideDetectedCodes {
        /// Normal level.
        Co2LevelsNormal => co2_levels_normal = 0,
        /// Abnormal level.
        Co2LevelsAbnormal => co2_levels_abnormal = 1,
    }
}

/// Codes of every enumerated characteristic, resolved from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HapConstants {
    /// `Active`.
    pub active: ActiveCodes,
    /// `CurrentHeaterCoolerState`.
    pub current_heater_cooler: CurrentHeaterCoolerCodes,
    /// `TargetHeaterCoolerState`.
    pub target_heater_cooler: TargetHeaterCoolerCodes,
    /// `TemperatureDisplayUnits`.
    pub temperature_display_units: TemperatureDisplayUnitsCodes,
    /// `SwingMode`.
    pub swing_mode: SwingModeCodes,
    /// `CurrentAirPurifierState`.
    pub current_air_purifier: CurrentAirPurifierCodes,
    /// `TargetAirPurifierState`.
    pub target_air_purifier: TargetAirPurifierCodes,
    /// `FilterChangeIndication`.
    pub filter_change_indication: FilterChangeIndicationCodes,
    /// `CurrentHumidifierDehumidifierState`.
    pub current_humidifier_dehumidifier: CurrentHumidifierDehumidifierCodes,
    /// `TargetHumidifierDehumidifierState`.
    pub target_humidifier_dehumidifier: TargetHumidifierDehumidifierCodes,
    /// `StatusLowBattery`.
    pub status_low_battery: StatusLowBatteryCodes,
    /// `OccupancyDetected`.
    pub occupancy_detected: OccupancyDetectedCodes,
    /// `CarbonDioxideDetected`.
    pub carbon_dioxide_detected: CarbonDioxideDetectedCodes,
}

impl HapConstants {
    /// Returns the name of the first enumeration with duplicate codes.
    #[must_use]
    pub fn first_ambiguous(&self) -> Option<&'static str> {
        [
            ("Active", self.active.is_distinct()),
            ("CurrentHeaterCoolerState", self.current_heater_cooler.is_distinct()),
            ("TargetHeaterCoolerState", self.target_heater_cooler.is_distinct()),
            ("TemperatureDisplayUnits", self.temperature_display_units.is_distinct()),
            ("SwingMode", self.swing_mode.is_distinct()),
            ("CurrentAirPurifierState", self.current_air_purifier.is_distinct()),
            ("TargetAirPurifierState", self.target_air_purifier.is_distinct()),
            ("FilterChangeIndication", self.filter_change_indication.is_distinct()),
            (
                "CurrentHumidifierDehumidifierState",
                self.current_humidifier_dehumidifier.is_distinct(),
            ),
            (
                "TargetHumidifierDehumidifierState",
                self.target_humidifier_dehumidifier.is_distinct(),
            ),
            ("StatusLowBattery", self.status_low_battery.is_distinct()),
            ("OccupancyDetected", self.occupancy_detected.is_distinct()),
            ("CarbonDioxideDetected", self.carbon_dioxide_detected.is_distinct()),
        ]
        .into_iter()
        .find_map(|(name, distinct)| (!distinct).then_some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homekit_defaults() {
        let constants = HapConstants::default();
        assert_eq!(constants.current_heater_cooler.encode(CurrentHeaterCoolerState::Cooling), 3);
        assert_eq!(constants.target_heater_cooler.encode(TargetHeaterCoolerState::Heat), 1);
        assert_eq!(constants.swing_mode.encode(SwingMode::SwingEnabled), 1);
        assert_eq!(
            constants
                .current_humidifier_dehumidifier
                .encode(CurrentHumidifierDehumidifierState::Dehumidifying),
            3
        );
        assert!(constants.first_ambiguous().is_none());
    }

    #[test]
    fn decode_unknown_code() {
        let codes = TargetHeaterCoolerCodes::default();
        assert!(matches!(
            codes.decode(9),
            Err(ValueError::InvalidCode {
                enumeration: "TargetHeaterCoolerState",
                code: 9
            })
        ));
    }

    #[test]
    fn duplicate_codes_are_ambiguous() {
        let constants = HapConstants {
            swing_mode: SwingModeCodes {
                swing_disabled: 1,
                swing_enabled: 1,
            },
            ..HapConstants::default()
        };
        assert_eq!(constants.first_ambiguous(), Some("SwingMode"));
    }

    #[test]
    fn partial_override_from_json() {
        let constants: HapConstants =
            serde_json::from_str(r#"{"targetHeaterCooler": {"cool": 5}}"#).unwrap();
        assert_eq!(constants.target_heater_cooler.cool, 5);
        assert_eq!(constants.target_heater_cooler.heat, 1);
        assert_eq!(constants.active, ActiveCodes::default());
    }

    #[test]
    fn state_names() {
        assert_eq!(CurrentAirPurifierState::PurifyingAir.to_string(), "PurifyingAir");
    }
}
