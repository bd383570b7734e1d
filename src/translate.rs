// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping between hub items and voice-assistant devices.
//!
//! Everything here is pure. Values of an unexpected kind are treated as
//! "not supported" and yield `None`; they never produce an error.

use crate::hub::Item;
use crate::model::{CapabilityType, Device, Instance};
use crate::types::{OnOff, Value};
use crate::wire::CapabilityRequest;

/// Hub item types that become devices.
pub const SUPPORTED_ITEM_TYPES: &[&str] = &["switch"];

/// Returns `true` if items of this hub type are exposed as devices.
#[must_use]
pub fn is_supported(kind: &str) -> bool {
    SUPPORTED_ITEM_TYPES.contains(&kind)
}

/// Translates a hub item into a device.
///
/// Returns `None` for unsupported item types. A boolean `raw_value` becomes
/// the `on` state of the on/off capability; any other value leaves the state
/// unknown.
///
/// # Examples
///
/// ```
/// use alice_bridge::hub::Item;
/// use alice_bridge::model::{CapabilityType, Instance};
/// use alice_bridge::translate::item_to_device;
///
/// let item = Item::new("sw_kitchen", "switch")
///     .with_human_name("Kitchen")
///     .with_raw_value(true);
/// let dev = item_to_device(&item).unwrap();
///
/// let on = dev.capability(CapabilityType::OnOff).unwrap().get_bool(Instance::On);
/// assert_eq!(on, Some(true));
///
/// assert!(item_to_device(&Item::new("t_out", "temperature")).is_none());
/// ```
#[must_use]
pub fn item_to_device(item: &Item) -> Option<Device> {
    if !is_supported(&item.kind) {
        return None;
    }

    let mut device = Device::switch(&item.name, &item.human_name);

    match &item.raw_value {
        Value::Bool(on) => {
            if let Some(cap) = device.capability_mut(CapabilityType::OnOff) {
                cap.set_value(Instance::On, *on);
            }
        }
        other => {
            tracing::debug!(
                item = %item.name,
                raw_kind = other.kind(),
                "Switch without a boolean value, state left unknown"
            );
        }
    }

    Some(device)
}

/// Translates a requested on/off value into the hub's command payload.
#[must_use]
pub fn action_to_command(requested: bool) -> OnOff {
    OnOff::from(requested)
}

/// Extracts the on/off intent from a list of requested capability changes.
///
/// Scans every requested capability and returns the value of the first
/// on/off capability targeting the `on` instance with a boolean value.
/// `None` means nothing in the request is something this bridge can apply.
#[must_use]
pub fn requested_on_off(capabilities: &[CapabilityRequest]) -> Option<bool> {
    capabilities
        .iter()
        .filter(|c| c.kind == CapabilityType::OnOff.as_str())
        .filter_map(|c| c.state.as_ref())
        .filter(|s| s.instance == Instance::On.as_str())
        .find_map(|s| s.value.as_bool())
}
