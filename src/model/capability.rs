// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capabilities, their instanced state and action outcomes.

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Kind of control surface a capability exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityType {
    /// Binary on/off control.
    #[serde(rename = "devices.capabilities.on_off")]
    OnOff,
}

impl CapabilityType {
    /// Wire name of the capability type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnOff => "devices.capabilities.on_off",
        }
    }
}

/// Named sub-property a capability state reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instance {
    /// The `on` instance of an on/off capability.
    On,
}

impl Instance {
    /// Wire name of the instance.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
        }
    }
}

/// Outcome of applying an action to a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    /// The hub accepted the command.
    Done,
    /// The command could not be delivered.
    Error,
}

/// Result attached to a state that was produced by an executed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action succeeded.
    pub status: ActionStatus,
    /// Machine-readable error code, only for [`ActionStatus::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human-readable error text, only for [`ActionStatus::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ActionResult {
    /// A successful action.
    #[must_use]
    pub const fn done() -> Self {
        Self {
            status: ActionStatus::Done,
            error_code: None,
            error_message: None,
        }
    }

    /// A failed action with the given code and message.
    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            error_code: Some(code.into()),
            error_message: Some(message.into()),
        }
    }
}

/// Current value of one capability instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Which instance this state describes.
    pub instance: Instance,
    /// The reported value.
    pub value: Value,
    /// Present only when the state came out of an action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_result: Option<ActionResult>,
}

/// A typed control surface on a device.
///
/// # Examples
///
/// ```
/// use alice_bridge::model::{Capability, Instance};
///
/// let mut cap = Capability::on_off();
/// assert_eq!(cap.get_bool(Instance::On), None);
///
/// cap.set_value(Instance::On, true);
/// assert_eq!(cap.get_bool(Instance::On), Some(true));
/// assert!(cap.state.as_ref().unwrap().action_result.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Capability kind.
    #[serde(rename = "type")]
    pub kind: CapabilityType,
    /// Current state, absent when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

impl Capability {
    /// Creates a capability of the given kind with no known state.
    #[must_use]
    pub const fn new(kind: CapabilityType) -> Self {
        Self { kind, state: None }
    }

    /// Creates an on/off capability with no known state.
    #[must_use]
    pub const fn on_off() -> Self {
        Self::new(CapabilityType::OnOff)
    }

    /// Returns the raw value of `instance`, if that is the instance reported.
    #[must_use]
    pub fn get_value(&self, instance: Instance) -> Option<&Value> {
        self.state
            .as_ref()
            .filter(|s| s.instance == instance)
            .map(|s| &s.value)
    }

    /// Returns the boolean value of `instance`.
    ///
    /// `None` when there is no state, the state reports another instance, or
    /// the value is not a boolean.
    #[must_use]
    pub fn get_bool(&self, instance: Instance) -> Option<bool> {
        self.get_value(instance).and_then(Value::as_bool)
    }

    /// Records a value read from the hub. Clears any previous action result.
    pub fn set_value(&mut self, instance: Instance, value: impl Into<Value>) {
        self.state = Some(State {
            instance,
            value: value.into(),
            action_result: None,
        });
    }

    /// Records a value set by a successful action.
    pub fn set_value_done(&mut self, instance: Instance, value: impl Into<Value>) {
        self.set_action_outcome(instance, value, ActionResult::done());
    }

    /// Records the outcome of an action, successful or not.
    pub fn set_action_outcome(
        &mut self,
        instance: Instance,
        value: impl Into<Value>,
        result: ActionResult,
    ) {
        self.state = Some(State {
            instance,
            value: value.into(),
            action_result: Some(result),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capability_without_state_omits_state() {
        let cap = Capability::on_off();
        assert_eq!(
            serde_json::to_value(&cap).unwrap(),
            json!({"type": "devices.capabilities.on_off"})
        );
    }

    #[test]
    fn read_state_has_no_action_result() {
        let mut cap = Capability::on_off();
        cap.set_value(Instance::On, false);
        assert_eq!(
            serde_json::to_value(&cap).unwrap(),
            json!({
                "type": "devices.capabilities.on_off",
                "state": {"instance": "on", "value": false}
            })
        );
    }

    #[test]
    fn action_state_carries_done() {
        let mut cap = Capability::on_off();
        cap.set_value_done(Instance::On, true);
        assert_eq!(
            serde_json::to_value(&cap).unwrap(),
            json!({
                "type": "devices.capabilities.on_off",
                "state": {
                    "instance": "on",
                    "value": true,
                    "action_result": {"status": "DONE"}
                }
            })
        );
    }

    #[test]
    fn error_result_serializes_code_and_message() {
        let result = ActionResult::error("DEVICE_UNREACHABLE", "timed out");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "status": "ERROR",
                "error_code": "DEVICE_UNREACHABLE",
                "error_message": "timed out"
            })
        );
    }

    #[test]
    fn set_value_replaces_previous_action_result() {
        let mut cap = Capability::on_off();
        cap.set_value_done(Instance::On, true);
        cap.set_value(Instance::On, false);

        let state = cap.state.unwrap();
        assert_eq!(state.value, Value::Bool(false));
        assert!(state.action_result.is_none());
    }

    #[test]
    fn get_bool_ignores_non_boolean_values() {
        let mut cap = Capability::on_off();
        cap.set_value(Instance::On, "On");
        assert_eq!(cap.get_bool(Instance::On), None);
        assert_eq!(cap.get_value(Instance::On), Some(&Value::from("On")));
    }
}
