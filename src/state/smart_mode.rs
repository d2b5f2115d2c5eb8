// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate react configuration.
//!
//! Climate react arms two rules on the device: one fired when the room
//! temperature rises above a high threshold and one fired when it drops
//! below a low threshold. Each rule carries a snapshot of what the unit
//! should switch to.
//!
//! [`SmartMode`] is an immutable value. The device connector only sends a
//! new configuration when the whole record is replaced, so every change
//! produces a fresh `SmartMode` through the `with_*` methods and goes back
//! to the device as a single [`StateChange::SmartMode`](super::StateChange).

use crate::types::{OperatingMode, Percentage, SwingState, TemperatureUnit};

/// Measurement a climate react rule is triggered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    /// Room temperature.
    Temperature,
    /// Relative humidity.
    Humidity,
    /// Apparent ("feels like") temperature.
    FeelsLike,
}

/// What the unit switches to when a threshold is crossed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdState {
    /// Whether the unit is switched on.
    pub on: bool,
    /// Target temperature in Celsius.
    pub target_temperature: Option<f64>,
    /// Unit the device displays temperatures in.
    pub temperature_unit: TemperatureUnit,
    /// Operating mode.
    pub mode: Option<OperatingMode>,
    /// Fan speed.
    pub fan_speed: Option<Percentage>,
    /// Vertical swing.
    pub swing: SwingState,
    /// Horizontal swing.
    pub horizontal_swing: SwingState,
    /// Light on the indoor unit.
    pub light: bool,
}

/// Climate react configuration of a device.
///
/// # Examples
///
/// ```
/// use climate_hap::state::SmartMode;
///
/// let config = SmartMode::default();
/// assert!(!config.enabled());
///
/// let enabled = config.with_enabled(true);
/// assert!(enabled.enabled());
/// // The original value is untouched.
/// assert!(!config.enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMode {
    enabled: bool,
    #[serde(rename = "type")]
    trigger: Option<TriggerType>,
    high_temperature_threshold: Option<f64>,
    high_temperature_state: Option<ThresholdState>,
    high_temperature_webhook: Option<String>,
    low_temperature_threshold: Option<f64>,
    low_temperature_state: Option<ThresholdState>,
    low_temperature_webhook: Option<String>,
}

impl SmartMode {
    /// Creates a disabled configuration with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether climate react is enabled on the device.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the measurement the rules react to.
    #[must_use]
    pub fn trigger(&self) -> Option<TriggerType> {
        self.trigger
    }

    /// Returns the high threshold in Celsius.
    #[must_use]
    pub fn high_temperature_threshold(&self) -> Option<f64> {
        self.high_temperature_threshold
    }

    /// Returns the state applied above the high threshold.
    #[must_use]
    pub fn high_temperature_state(&self) -> Option<&ThresholdState> {
        self.high_temperature_state.as_ref()
    }

    /// Returns the webhook fired above the high threshold.
    #[must_use]
    pub fn high_temperature_webhook(&self) -> Option<&str> {
        self.high_temperature_webhook.as_deref()
    }

    /// Returns the low threshold in Celsius.
    #[must_use]
    pub fn low_temperature_threshold(&self) -> Option<f64> {
        self.low_temperature_threshold
    }

    /// Returns the state applied below the low threshold.
    #[must_use]
    pub fn low_temperature_state(&self) -> Option<&ThresholdState> {
        self.low_temperature_state.as_ref()
    }

    /// Returns the webhook fired below the low threshold.
    #[must_use]
    pub fn low_temperature_webhook(&self) -> Option<&str> {
        self.low_temperature_webhook.as_deref()
    }

    /// Returns a copy with `enabled` replaced.
    #[must_use]
    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self {
            enabled,
            ..self.clone()
        }
    }

    /// Returns a copy switched to temperature rules with both webhooks
    /// removed. Thresholds are kept.
    #[must_use]
    pub fn with_temperature_trigger(&self) -> Self {
        Self {
            trigger: Some(TriggerType::Temperature),
            high_temperature_webhook: None,
            low_temperature_webhook: None,
            ..self.clone()
        }
    }

    /// Returns a copy with the high rule replaced.
    #[must_use]
    pub fn with_high_rule(&self, threshold: f64, state: ThresholdState) -> Self {
        Self {
            high_temperature_threshold: Some(threshold),
            high_temperature_state: Some(state),
            ..self.clone()
        }
    }

    /// Returns a copy with the low rule replaced.
    #[must_use]
    pub fn with_low_rule(&self, threshold: f64, state: ThresholdState) -> Self {
        Self {
            low_temperature_threshold: Some(threshold),
            low_temperature_state: Some(state),
            ..self.clone()
        }
    }

    /// Returns a copy with webhook rules, as configured from the vendor app.
    #[must_use]
    pub fn with_webhooks(&self, high: Option<String>, low: Option<String>) -> Self {
        Self {
            high_temperature_webhook: high,
            low_temperature_webhook: low,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(on: bool) -> ThresholdState {
        ThresholdState {
            on,
            target_temperature: Some(24.0),
            temperature_unit: TemperatureUnit::Celsius,
            mode: Some(OperatingMode::Cool),
            fan_speed: None,
            swing: SwingState::Disabled,
            horizontal_swing: SwingState::Disabled,
            light: true,
        }
    }

    #[test]
    fn temperature_trigger_clears_webhooks() {
        let config = SmartMode::new()
            .with_webhooks(Some("https://hooks.example/hot".into()), Some("x".into()))
            .with_temperature_trigger();

        assert_eq!(config.trigger(), Some(TriggerType::Temperature));
        assert!(config.high_temperature_webhook().is_none());
        assert!(config.low_temperature_webhook().is_none());
    }

    #[test]
    fn rules_are_replaced_independently() {
        let config = SmartMode::new()
            .with_high_rule(25.0, snapshot(true))
            .with_low_rule(23.0, snapshot(false));

        assert_eq!(config.high_temperature_threshold(), Some(25.0));
        assert!(config.high_temperature_state().unwrap().on);
        assert_eq!(config.low_temperature_threshold(), Some(23.0));
        assert!(!config.low_temperature_state().unwrap().on);
    }

    #[test]
    fn serializes_in_vendor_shape() {
        let config = SmartMode::new()
            .with_enabled(true)
            .with_temperature_trigger()
            .with_high_rule(25.0, snapshot(true));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["enabled"], true);
        assert_eq!(json["type"], "temperature");
        assert_eq!(json["highTemperatureThreshold"], 25.0);
        assert_eq!(json["highTemperatureState"]["mode"], "COOL");
        assert_eq!(json["highTemperatureState"]["temperatureUnit"], "C");
        assert!(json["lowTemperatureWebhook"].is_null());
    }
}
