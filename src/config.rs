// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge configuration.

use crate::error::{ConfigError, Result};
use crate::protocol::HapConstants;
use crate::types::TemperatureUnit;

/// Configuration of one bridged device.
///
/// All fields except `name` have defaults, so a minimal document is just
/// `{"name": "..."}`.
///
/// # Examples
///
/// ```
/// use climate_hap::BridgeConfig;
/// use climate_hap::types::TemperatureUnit;
///
/// let config = BridgeConfig::new("Bedroom AC")
///     .with_temperature_unit(TemperatureUnit::Fahrenheit)
///     .with_climate_react_auto_setup(true);
///
/// let parsed = BridgeConfig::from_json(
///     r#"{"name": "Bedroom AC", "temperatureUnit": "F", "climateReactAutoSetup": true}"#,
/// )
/// .unwrap();
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Device name used in log lines.
    pub name: String,
    /// Unit the device displays temperatures in.
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    /// Re-arm climate react after every mode-affecting write.
    #[serde(default)]
    pub climate_react_auto_setup: bool,
    /// Codes of the enumerated characteristics.
    #[serde(default)]
    pub constants: HapConstants,
}

impl BridgeConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperature_unit: TemperatureUnit::default(),
            climate_react_auto_setup: false,
            constants: HapConstants::default(),
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is
    /// malformed, the name is empty, or an enumeration has duplicate codes.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values that cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] or [`ConfigError::AmbiguousCodes`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if let Some(enumeration) = self.constants.first_ambiguous() {
            return Err(ConfigError::AmbiguousCodes(enumeration));
        }
        Ok(())
    }

    /// Sets the display unit.
    #[must_use]
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    /// Enables or disables climate react recomputation.
    #[must_use]
    pub fn with_climate_react_auto_setup(mut self, enabled: bool) -> Self {
        self.climate_react_auto_setup = enabled;
        self
    }

    /// Sets the enumeration codes.
    #[must_use]
    pub fn with_constants(mut self, constants: HapConstants) -> Self {
        self.constants = constants;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn minimal_document_uses_defaults() {
        let config = BridgeConfig::from_json(r#"{"name": "Office"}"#).unwrap();

        assert_eq!(config.name, "Office");
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        assert!(!config.climate_react_auto_setup);
        assert_eq!(config.constants, HapConstants::default());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            BridgeConfig::from_json(r#"{"name": "  "}"#),
            Err(Error::Config(ConfigError::EmptyName))
        ));
    }

    #[test]
    fn duplicate_codes_rejected() {
        let result = BridgeConfig::from_json(
            r#"{"name": "Office", "constants": {"active": {"inactive": 1, "active": 1}}}"#,
        );
        assert!(matches!(result, Err(Error::Config(ConfigError::AmbiguousCodes("Active")))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            BridgeConfig::from_json("{name"),
            Err(Error::Config(ConfigError::Json(_)))
        ));
    }

    #[test]
    fn validate_reports_config_error_directly() {
        assert!(matches!(
            BridgeConfig::new("").validate(),
            Err(ConfigError::EmptyName)
        ));
        assert!(BridgeConfig::new("Office").validate().is_ok());
    }

    #[test]
    fn unknown_unit_rejected() {
        assert!(BridgeConfig::from_json(r#"{"name": "Office", "temperatureUnit": "K"}"#).is_err());
    }
}
