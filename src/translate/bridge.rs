// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bridge between one device and its host characteristics.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::BridgeConfig;
use crate::device::{Device, DeviceConnector};
use crate::protocol::{
    CharacteristicHost, CharacteristicInfo, TargetHeaterCoolerState, Value, check,
};
use crate::state::{DeviceState, StateChange};
use crate::types::OperatingMode;

use super::{Capability, mode_to_target_state, recompute, target_state_to_mode};

/// Translates between one device and the characteristics a host exposes
/// for it.
///
/// [`get`](Self::get) and [`set`](Self::set) are the host's read and write
/// handlers. [`publish`](Self::publish) and [`refresh`](Self::refresh) push
/// device state to the host. None of them fail: values that cannot be used
/// are logged and dropped.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use climate_hap::device::DeviceConnector;
/// use climate_hap::protocol::{CharacteristicHost, CharacteristicInfo, CharacteristicKind, Service, Value};
/// use climate_hap::state::{DeviceState, StateChange};
/// use climate_hap::{BridgeConfig, Capability, ClimateBridge};
///
/// struct NoDevice;
///
/// impl DeviceConnector for NoDevice {
///     fn write(&self, _change: &StateChange) {}
///     fn sync_state(&self) {}
/// }
///
/// struct NoHost;
///
/// impl CharacteristicHost for NoHost {
///     fn characteristic(&self, _: Service, _: CharacteristicKind) -> Option<CharacteristicInfo> {
///         None
///     }
///     fn update_value(&self, _: Service, _: CharacteristicKind, _: Value) {}
/// }
///
/// let bridge = ClimateBridge::new(
///     BridgeConfig::new("Bedroom"),
///     DeviceState::new(),
///     Arc::new(NoDevice),
///     Arc::new(NoHost),
/// );
///
/// bridge.set(Capability::FanActive, Value::Bool(true));
/// assert_eq!(bridge.get(Capability::FanActive), Some(Value::Int(1)));
/// assert_eq!(bridge.get(Capability::AcActive), Some(Value::Int(0)));
/// ```
pub struct ClimateBridge {
    pub(super) config: BridgeConfig,
    pub(super) device: Device,
    host: Arc<dyn CharacteristicHost>,
    requested_target: Mutex<Option<TargetHeaterCoolerState>>,
}

impl ClimateBridge {
    /// Creates a bridge for a device with an initial state.
    #[must_use]
    pub fn new(
        config: BridgeConfig,
        initial: DeviceState,
        connector: Arc<dyn DeviceConnector>,
        host: Arc<dyn CharacteristicHost>,
    ) -> Self {
        let device = Device::new(config.name.clone(), initial, connector);
        Self {
            config,
            device,
            host,
            requested_target: Mutex::new(None),
        }
    }

    /// Returns the bridge configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Returns the bridged device.
    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Returns the device name used in log lines.
    #[must_use]
    pub fn name(&self) -> &str {
        self.device.name()
    }

    // ========== Host Updates ==========

    /// Offers `candidate` to the host as the new value of `capability`.
    ///
    /// The candidate is checked against the characteristic's constraints.
    /// Nothing is published when the capability is not bound on the host,
    /// the candidate is rejected, or it equals the published value.
    ///
    /// Returns `true` if the host was updated.
    pub fn publish(&self, capability: Capability, candidate: Option<Value>) -> bool {
        let (service, kind) = capability.binding();
        let Some(info) = self.lookup(capability) else {
            return false;
        };

        let value = match check(&info.constraints, candidate) {
            Ok(value) => value,
            Err(rejection) => {
                tracing::debug!(
                    device = %self.name(),
                    %capability,
                    %rejection,
                    "Not publishing rejected value"
                );
                return false;
            }
        };

        if info.value.as_ref() == Some(&value) {
            return false;
        }

        if capability == Capability::TargetHeaterCoolerState {
            self.remember_target(&value);
        }

        tracing::debug!(device = %self.name(), %capability, %value, "Publishing value");
        self.host.update_value(service, kind, value);
        true
    }

    /// Publishes the current value of every readable capability.
    ///
    /// Call after the device reported a new state through
    /// [`Device::refresh`].
    ///
    /// Returns the number of characteristics updated.
    pub fn refresh(&self) -> usize {
        Capability::ALL
            .into_iter()
            .filter(Capability::is_readable)
            .filter(|&capability| self.publish(capability, self.get(capability)))
            .count()
    }

    // ========== Helpers ==========

    /// Returns what the host knows about `capability`, logging when it is
    /// not bound.
    pub(super) fn lookup(&self, capability: Capability) -> Option<CharacteristicInfo> {
        let (service, kind) = capability.binding();
        let info = self.host.characteristic(service, kind);
        if info.is_none() {
            tracing::debug!(
                device = %self.name(),
                %service,
                characteristic = %kind,
                "Characteristic not bound, skipping"
            );
        }
        info
    }

    /// The heater-cooler target state the user asked for last.
    ///
    /// Falls back to the value the host has published when nothing was
    /// requested through this bridge yet.
    pub(super) fn last_requested_target(&self) -> Option<TargetHeaterCoolerState> {
        if let Some(state) = *self.requested_target.lock() {
            return Some(state);
        }

        let published = self.lookup(Capability::TargetHeaterCoolerState)?.value?;
        self.config
            .constants
            .target_heater_cooler
            .decode(published.as_i64()?)
            .ok()
    }

    pub(super) fn set_requested_target(&self, state: TargetHeaterCoolerState) {
        *self.requested_target.lock() = Some(state);
    }

    fn remember_target(&self, value: &Value) {
        if let Some(state) = value
            .as_i64()
            .and_then(|code| self.config.constants.target_heater_cooler.decode(code).ok())
        {
            self.set_requested_target(state);
        }
    }

    /// Mode to switch to when a heater-cooler control is used.
    ///
    /// Derived from the last requested target state so that a fan or dry
    /// excursion does not stick.
    pub(super) fn requested_mode(&self) -> OperatingMode {
        let target = self.last_requested_target().or_else(|| {
            self.device
                .read(|state| state.mode().and_then(mode_to_target_state))
        });
        target_state_to_mode(target.unwrap_or(TargetHeaterCoolerState::Auto))
    }

    /// Re-arms climate react from the current state if auto setup is on.
    pub(super) fn update_climate_react(&self) {
        let unit = self.config.temperature_unit;
        let enabled = self.config.climate_react_auto_setup;

        if let Some(smart_mode) = self.device.read(|state| recompute(state, unit, enabled)) {
            tracing::debug!(device = %self.name(), "Updating climate react");
            self.device.apply(StateChange::SmartMode(smart_mode));
        }
    }

    /// Formats a value for a log line.
    pub(super) fn shown(&self, capability: Capability, value: Option<&Value>) -> String {
        let is_temperature = matches!(
            capability,
            Capability::CurrentTemperature
                | Capability::CoolingThresholdTemperature
                | Capability::HeatingThresholdTemperature
        );

        match value {
            Some(v) if is_temperature => v.as_f64().map_or_else(
                || v.to_string(),
                |celsius| self.config.temperature_unit.display(celsius),
            ),
            Some(v) => v.to_string(),
            None => "none".to_string(),
        }
    }
}

impl fmt::Debug for ClimateBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClimateBridge")
            .field("config", &self.config)
            .field("device", &self.device)
            .field("requested_target", &*self.requested_target.lock())
            .finish_non_exhaustive()
    }
}
