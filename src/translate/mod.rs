// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between device state and host characteristics.
//!
//! # Components
//!
//! - [`Capability`] - The translation table entries and their bindings
//! - [`ClimateBridge`] - Read and write handlers for one device
//! - [`mode_to_target_state`] / [`target_state_to_mode`] - Mode mapping
//! - [`recompute`] - Climate react rule derivation

mod bridge;
mod capability;
mod climate_react;
mod get;
mod mode;
mod set;

pub use bridge::ClimateBridge;
pub use capability::Capability;
pub use climate_react::recompute;
pub use mode::{mode_to_target_state, target_state_to_mode};
