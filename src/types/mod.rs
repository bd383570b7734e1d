// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar types shared by the hub and voice-assistant sides.

mod nullable;
mod on_off;
mod value;

pub(crate) use nullable::null_as_default;
pub use on_off::OnOff;
pub use value::Value;
