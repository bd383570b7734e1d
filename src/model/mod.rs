// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice-assistant device model.
//!
//! A [`Device`] is a list of typed [`Capability`] values. Each capability may
//! carry a [`State`] for one named [`Instance`], and a state produced by an
//! executed action also carries an [`ActionResult`].
//!
//! Serialization follows the smart home wire format: optional parts are
//! omitted rather than sent as `null`.

mod capability;
mod device;

pub use capability::{ActionResult, ActionStatus, Capability, CapabilityType, Instance, State};
pub use device::{Device, DeviceType, display_name};
