// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `climate_hap` - Translate air conditioner state to HomeKit-style
//! characteristics and back.
//!
//! An air conditioner reports state in its own vocabulary: `COOL`/`HEAT`/
//! `FAN`/`DRY` modes, Celsius temperatures, `SWING_ENABLED`, fan speed
//! percentages. A home-automation host exposes the same unit as typed,
//! range-constrained characteristics grouped into services. This library is
//! the layer in between.
//!
//! # Features
//!
//! - **Read handlers**: Device state to characteristic values
//! - **Write handlers**: Characteristic values to atomic device state changes
//! - **Sanitizer**: Range, valid value and step constraint enforcement
//! - **Climate react**: Threshold rules re-armed after mode changes
//!
//! The host and the device are reached through two traits,
//! [`protocol::CharacteristicHost`] and [`device::DeviceConnector`].
//! Registering services and talking to the vendor cloud happen outside
//! this crate.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use climate_hap::device::DeviceConnector;
//! use climate_hap::protocol::{
//!     CharacteristicHost, CharacteristicInfo, CharacteristicKind, Constraints, Service, Value,
//! };
//! use climate_hap::state::{DeviceState, StateChange};
//! use climate_hap::types::OperatingMode;
//! use climate_hap::{BridgeConfig, Capability, ClimateBridge};
//! use parking_lot::Mutex;
//!
//! #[derive(Default)]
//! struct Host(Mutex<HashMap<(Service, CharacteristicKind), CharacteristicInfo>>);
//!
//! impl CharacteristicHost for Host {
//!     fn characteristic(
//!         &self,
//!         service: Service,
//!         kind: CharacteristicKind,
//!     ) -> Option<CharacteristicInfo> {
//!         self.0.lock().get(&(service, kind)).cloned()
//!     }
//!
//!     fn update_value(&self, service: Service, kind: CharacteristicKind, value: Value) {
//!         if let Some(info) = self.0.lock().get_mut(&(service, kind)) {
//!             info.value = Some(value);
//!         }
//!     }
//! }
//!
//! struct Connector;
//!
//! impl DeviceConnector for Connector {
//!     fn write(&self, change: &StateChange) {
//!         println!("send {} to the unit", change.field());
//!     }
//!
//!     fn sync_state(&self) {}
//! }
//!
//! let host = Arc::new(Host::default());
//! host.0.lock().insert(
//!     (Service::HeaterCooler, CharacteristicKind::CoolingThresholdTemperature),
//!     CharacteristicInfo::new(Constraints::range(16.0, 30.0).with_min_step(1.0)),
//! );
//!
//! let config = BridgeConfig::new("Living Room").with_climate_react_auto_setup(true);
//! let bridge = ClimateBridge::new(config, DeviceState::new(), Arc::new(Connector), host);
//!
//! bridge.set(Capability::CoolingThresholdTemperature, Value::Float(24.0));
//! bridge.set(Capability::TargetHeaterCoolerState, Value::Int(2));
//!
//! let state = bridge.device().state();
//! assert!(state.is_running(OperatingMode::Cool));
//! assert_eq!(state.smart_mode().high_temperature_threshold(), Some(25.0));
//! assert_eq!(
//!     bridge.get(Capability::CoolingThresholdTemperature),
//!     Some(Value::Float(24.0))
//! );
//! ```

mod config;
pub mod device;
pub mod error;
pub mod protocol;
pub mod state;
pub mod translate;
pub mod types;

pub use config::BridgeConfig;
pub use device::{Device, DeviceConnector};
pub use error::{ConfigError, Error, Rejection, Result, ValueError};
pub use protocol::{CharacteristicHost, Value};
pub use translate::{Capability, ClimateBridge};
