// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device side of the bridge.
//!
//! A [`Device`] owns the [`DeviceState`] of one unit. State is never edited
//! in place from outside: every write goes through [`Device::apply`], which
//! replaces whole fields and forwards each replaced field to the
//! [`DeviceConnector`]. The connector turns those replacements into vendor
//! commands; how it reaches the unit is not this crate's concern.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use climate_hap::device::{Device, DeviceConnector};
//! use climate_hap::state::{DeviceState, StateChange};
//! use climate_hap::types::OperatingMode;
//!
//! struct Discard;
//!
//! impl DeviceConnector for Discard {
//!     fn write(&self, _change: &StateChange) {}
//!     fn sync_state(&self) {}
//! }
//!
//! let device = Device::new("Bedroom", DeviceState::new(), Arc::new(Discard));
//! device.apply(StateChange::Batch(vec![
//!     StateChange::Active(true),
//!     StateChange::Mode(OperatingMode::Cool),
//! ]));
//!
//! assert!(device.read(|s| s.is_running(OperatingMode::Cool)));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::state::{DeviceState, StateChange};

/// Outbound interface to the physical unit.
///
/// Implementations must not block: `write` and `sync_state` are called from
/// inside host handlers. Queue or spawn the actual network work.
pub trait DeviceConnector: Send + Sync {
    /// Sends one whole-field replacement to the unit.
    ///
    /// Never called with [`StateChange::Batch`]; batches are flattened first.
    fn write(&self, change: &StateChange);

    /// Asks the unit to re-send its full state.
    fn sync_state(&self);
}

/// A climate-control unit and its last known state.
pub struct Device {
    name: String,
    state: RwLock<DeviceState>,
    connector: Arc<dyn DeviceConnector>,
}

impl Device {
    /// Creates a device with an initial state.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        initial: DeviceState,
        connector: Arc<dyn DeviceConnector>,
    ) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(initial),
            connector,
        }
    }

    /// Returns the device name used in log lines.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state.read().clone()
    }

    /// Runs `f` against the current state under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&DeviceState) -> R) -> R {
        f(&self.state.read())
    }

    /// Applies a change and forwards every field that actually changed to
    /// the connector.
    ///
    /// A batch is applied under a single write lock, so readers never see
    /// half of it. The connector is called after the lock is released.
    ///
    /// Returns `true` if any field changed.
    pub fn apply(&self, change: StateChange) -> bool {
        let written: Vec<StateChange> = {
            let mut state = self.state.write();
            change
                .into_fields()
                .into_iter()
                .filter(|field| state.apply(field))
                .collect()
        };

        for field in &written {
            tracing::debug!(device = %self.name, field = field.field(), "Writing state change");
            self.connector.write(field);
        }

        !written.is_empty()
    }

    /// Replaces the whole state with one reported by the unit.
    ///
    /// Nothing is written back to the connector.
    pub fn refresh(&self, state: DeviceState) {
        tracing::debug!(device = %self.name, "Refreshing state from device");
        *self.state.write() = state;
    }

    /// Asks the connector to re-synchronize the state.
    pub fn sync_state(&self) {
        tracing::debug!(device = %self.name, "Requesting state sync");
        self.connector.sync_state();
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OperatingMode, Percentage};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        writes: Mutex<Vec<StateChange>>,
        syncs: Mutex<usize>,
    }

    impl DeviceConnector for Recorder {
        fn write(&self, change: &StateChange) {
            self.writes.lock().push(change.clone());
        }

        fn sync_state(&self) {
            *self.syncs.lock() += 1;
        }
    }

    fn device() -> (Device, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let device = Device::new("Living Room", DeviceState::new(), recorder.clone());
        (device, recorder)
    }

    #[test]
    fn apply_forwards_changed_fields_only() {
        let (device, recorder) = device();

        assert!(device.apply(StateChange::Batch(vec![
            StateChange::Active(true),
            StateChange::Mode(OperatingMode::Heat),
        ])));
        assert!(!device.apply(StateChange::Active(true)));
        assert!(device.apply(StateChange::Batch(vec![
            StateChange::Active(true),
            StateChange::FanSpeed(Percentage::clamped(50)),
        ])));

        assert_eq!(
            *recorder.writes.lock(),
            vec![
                StateChange::Active(true),
                StateChange::Mode(OperatingMode::Heat),
                StateChange::FanSpeed(Percentage::clamped(50)),
            ]
        );
    }

    #[test]
    fn nested_batches_are_flattened() {
        let (device, recorder) = device();

        device.apply(StateChange::Batch(vec![
            StateChange::Light(true),
            StateChange::Batch(vec![StateChange::PureBoost(true)]),
        ]));

        let writes = recorder.writes.lock();
        assert_eq!(writes.len(), 2);
        assert!(!writes.iter().any(|w| matches!(w, StateChange::Batch(_))));
    }

    #[test]
    fn refresh_does_not_write_back() {
        let (device, recorder) = device();
        let reported: DeviceState =
            serde_json::from_str(r#"{"active": true, "mode": "DRY"}"#).unwrap();

        device.refresh(reported.clone());

        assert_eq!(device.state(), reported);
        assert!(recorder.writes.lock().is_empty());
    }

    #[test]
    fn sync_state_reaches_connector() {
        let (device, recorder) = device();
        device.sync_state();
        assert_eq!(*recorder.syncs.lock(), 1);
        assert_eq!(device.name(), "Living Room");
    }
}
