// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] holds the vendor-native state of a device. It is only
//! changed through [`StateChange`]s, each replacing one field as a whole.
//! [`SmartMode`] is the nested climate react record, itself immutable.
//!
//! # Examples
//!
//! ```
//! use climate_hap::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//! state.apply(&StateChange::Active(true));
//! assert!(state.active());
//! ```

mod device_state;
mod smart_mode;
mod state_change;

pub use device_state::DeviceState;
pub use smart_mode::{SmartMode, ThresholdState, TriggerType};
pub use state_change::StateChange;
