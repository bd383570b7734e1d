// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request and response bodies of the smart home API.
//!
//! Inbound capability descriptions are kept as plain strings so that a
//! capability this bridge does not implement decodes fine and is skipped
//! later, instead of failing the whole batch. For the same reason missing
//! and `null` fields decode to their defaults.

use serde::{Deserialize, Serialize};

use crate::model::Device;
use crate::types::{Value, null_as_default};

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /user/devices/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Devices the caller wants the state of.
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<DeviceRequest>,
}

/// Body of `POST /user/devices/action`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Wrapped batch.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: ActionPayload,
}

/// The device batch inside an [`ActionRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPayload {
    /// Devices to act on, in the order they should be processed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<DeviceRequest>,
}

/// One device entry in a query or action request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRequest {
    /// Device id as previously announced by the bridge.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Opaque data echoed by the platform; unused here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,
    /// Requested capability changes, empty for queries.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub capabilities: Vec<CapabilityRequest>,
}

/// A requested capability change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRequest {
    /// Capability type, e.g. `devices.capabilities.on_off`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Target state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateRequest>,
}

/// Target state of a [`CapabilityRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRequest {
    /// Instance name, e.g. `on`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance: String,
    /// Requested value.
    #[serde(default)]
    pub value: Value,
}

impl DeviceRequest {
    /// An entry with no capabilities, as sent by a query.
    #[must_use]
    pub fn query(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// An entry asking for an on/off change.
    #[must_use]
    pub fn on_off(id: impl Into<String>, on: bool) -> Self {
        Self {
            id: id.into(),
            custom_data: None,
            capabilities: vec![CapabilityRequest {
                kind: crate::model::CapabilityType::OnOff.as_str().to_string(),
                state: Some(StateRequest {
                    instance: crate::model::Instance::On.as_str().to_string(),
                    value: Value::Bool(on),
                }),
            }],
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response envelope shared by every device endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevicesResponse {
    /// Echo of the inbound `X-Request-Id`.
    pub request_id: String,
    /// Device list and, for some endpoints, the user id.
    pub payload: DevicesPayload,
}

/// Payload of a [`DevicesResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevicesPayload {
    /// Authenticated user, omitted by the query endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Devices in the reply.
    pub devices: Vec<Device>,
}
