// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub item records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Value, null_as_default};

/// One controllable point as reported by `GET /items`.
///
/// Only `name`, `type`, `human_name` and `raw_value` feed the device model.
/// The rest is decoded so it shows up in debug logs. Every field tolerates
/// being absent or `null`, so one odd record never sinks the whole listing.
///
/// # Examples
///
/// ```
/// use alice_bridge::hub::Item;
/// use alice_bridge::types::Value;
///
/// let item: Item = serde_json::from_str(
///     r#"{"name": "sw_hall", "type": "switch", "human_name": "Hall", "raw_value": true}"#,
/// ).unwrap();
///
/// assert_eq!(item.kind, "switch");
/// assert_eq!(item.raw_value, Value::Bool(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Stable, unique item name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Hub-native type, e.g. `"switch"`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Human-facing label.
    #[serde(deserialize_with = "null_as_default")]
    pub human_name: String,
    /// Last change time.
    pub changed: Option<DateTime<Utc>>,
    /// Last poll time.
    pub checked: Option<DateTime<Utc>>,
    /// String rendering of the value.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Untyped value.
    pub raw_value: Value,
    /// Value formatted for display.
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_value: String,
    /// Whether the hub trusts the current value.
    #[serde(deserialize_with = "null_as_default")]
    pub good: bool,
    /// Whether the item is shown in the hub UI.
    #[serde(deserialize_with = "null_as_default")]
    pub ui: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", deserialize_with = "null_as_default")]
    pub meta: HashMap<String, serde_json::Value>,
}

impl Item {
    /// Creates an item with the given name and hub type.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Sets the human-facing label.
    #[must_use]
    pub fn with_human_name(mut self, human_name: impl Into<String>) -> Self {
        self.human_name = human_name.into();
        self
    }

    /// Sets the untyped value.
    #[must_use]
    pub fn with_raw_value(mut self, raw_value: impl Into<Value>) -> Self {
        self.raw_value = raw_value.into();
        self
    }
}
