// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The hub's on/off command vocabulary.

use std::fmt;

/// Command payload understood by the hub for switch items.
///
/// # Examples
///
/// ```
/// use alice_bridge::types::OnOff;
///
/// assert_eq!(OnOff::from(true).as_str(), "On");
/// assert_eq!(OnOff::from(false).as_str(), "Off");
/// assert!(OnOff::On.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnOff {
    /// Switch off.
    Off,
    /// Switch on.
    On,
}

impl OnOff {
    /// Returns the exact string the hub expects as a command body.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }

    /// Returns `true` for [`OnOff::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for OnOff {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<OnOff> for bool {
    fn from(value: OnOff) -> Self {
        value.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_hub_vocabulary() {
        assert_eq!(OnOff::On.as_str(), "On");
        assert_eq!(OnOff::Off.as_str(), "Off");
        assert_eq!(OnOff::On.to_string(), "On");
    }

    #[test]
    fn from_bool_is_total() {
        assert_eq!(OnOff::from(true), OnOff::On);
        assert_eq!(OnOff::from(false), OnOff::Off);
        assert!(bool::from(OnOff::On));
        assert!(!bool::from(OnOff::Off));
    }
}
