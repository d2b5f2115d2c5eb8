// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interface to the accessory host.

use super::{CharacteristicInfo, CharacteristicKind, Service, Value};

/// The home-automation host the characteristics are registered with.
///
/// Registration itself happens outside this crate. The translation layer
/// only needs to read a characteristic's constraints and current value, and
/// to push new values.
pub trait CharacteristicHost: Send + Sync {
    /// Returns the constraints and current value of a characteristic.
    ///
    /// Returns `None` if the service or characteristic is not registered.
    fn characteristic(
        &self,
        service: Service,
        characteristic: CharacteristicKind,
    ) -> Option<CharacteristicInfo>;

    /// Publishes a new value for a characteristic.
    fn update_value(&self, service: Service, characteristic: CharacteristicKind, value: Value);
}
