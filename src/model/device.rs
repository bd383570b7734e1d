// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice-assistant device representation.

use serde::{Deserialize, Serialize};

use super::{Capability, CapabilityType};

/// Device category announced to the voice assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// A lamp or light fixture.
    #[serde(rename = "devices.types.light")]
    Light,
    /// A generic switch or relay.
    #[serde(rename = "devices.types.switch")]
    Switch,
}

impl DeviceType {
    /// Wire name of the device type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "devices.types.light",
            Self::Switch => "devices.types.switch",
        }
    }
}

/// A device as exposed to the voice assistant.
///
/// Every device has at least one capability; the constructors are the only
/// way to build one, so the invariant holds for every value of this type.
///
/// # Examples
///
/// ```
/// use alice_bridge::model::{Device, DeviceType};
///
/// let dev = Device::switch("sw_kitchen", "Kitchen ceiling");
/// assert_eq!(dev.id(), "sw_kitchen");
/// assert_eq!(dev.name(), "sw kitchen");
/// assert_eq!(dev.kind(), DeviceType::Switch);
/// assert_eq!(dev.capabilities().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    id: String,
    name: String,
    description: String,
    room: String,
    #[serde(rename = "type")]
    kind: DeviceType,
    capabilities: Vec<Capability>,
}

impl Device {
    /// Creates a device with a single on/off capability.
    ///
    /// `id` is the hub item name and stays the join key back to the hub.
    #[must_use]
    pub fn new(kind: DeviceType, id: impl Into<String>, description: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: display_name(&id),
            id,
            description: description.into(),
            room: String::new(),
            kind,
            capabilities: vec![Capability::on_off()],
        }
    }

    /// Creates a switch device.
    #[must_use]
    pub fn switch(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(DeviceType::Switch, id, description)
    }

    /// Creates a light device.
    #[must_use]
    pub fn light(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(DeviceType::Light, id, description)
    }

    /// Sets the room the device is placed in.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Hub item name this device was derived from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human description taken from the hub.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Room name, empty when unassigned.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Device category.
    #[must_use]
    pub const fn kind(&self) -> DeviceType {
        self.kind
    }

    /// All capabilities, never empty.
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// First capability of the given kind.
    #[must_use]
    pub fn capability(&self, kind: CapabilityType) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.kind == kind)
    }

    /// Mutable access to the first capability of the given kind.
    pub fn capability_mut(&mut self, kind: CapabilityType) -> Option<&mut Capability> {
        self.capabilities.iter_mut().find(|c| c.kind == kind)
    }
}

/// Turns a hub item name into a spoken-friendly name.
///
/// ```
/// assert_eq!(alice_bridge::model::display_name("hall_lamp_2"), "hall lamp 2");
/// ```
#[must_use]
pub fn display_name(id: &str) -> String {
    id.replace('_', " ")
}
