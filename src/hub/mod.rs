// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home-automation hub access.
//!
//! The hub exposes a flat list of [`Item`]s and accepts plain-text commands
//! per item. [`HubClient`] is the seam the cache and the handlers depend on;
//! [`HttpHubClient`] talks to a real hub over HTTP.
//!
//! No call is retried. A failure surfaces immediately to the caller.

#[cfg(feature = "http")]
mod http;
mod item;

#[cfg(feature = "http")]
pub use http::{HttpHubClient, HubConfig};
pub use item::Item;

use std::future::Future;
use std::sync::Arc;

use crate::error::TransportError;

/// Read and write access to the hub.
///
/// Implementations must be cheap to share between request tasks.
pub trait HubClient: Send + Sync {
    /// Fetches every item the hub knows about.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the hub is unreachable, times out, or
    /// answers with something that is not an item list.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Item>, TransportError>> + Send;

    /// Sends a command payload (for example `"On"`) to one item.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request cannot be delivered or the hub
    /// rejects it with a non-success status.
    fn write_command(
        &self,
        item: &str,
        payload: &str,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

impl<T: HubClient> HubClient for Arc<T> {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Item>, TransportError>> + Send {
        (**self).list_all()
    }

    fn write_command(
        &self,
        item: &str,
        payload: &str,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        (**self).write_command(item, payload)
    }
}
