// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alice Bridge - expose a home-automation hub through a voice-assistant
//! smart home API.
//!
//! The hub reports a flat list of items. The voice assistant wants devices
//! with typed capabilities. This crate translates between the two, caches
//! the translated device list so the hub is polled at most once per TTL, and
//! turns remote on/off actions into hub commands.
//!
//! # Layers
//!
//! - [`hub`]: item records and the [`HubClient`](hub::HubClient) seam, with
//!   an HTTP implementation
//! - [`model`]: devices, capabilities, states and action results
//! - [`translate`]: pure item ↔ device mapping
//! - [`cache`]: the time-bounded device snapshot
//! - [`handlers`]: list / query / action over the cache
//! - [`server`]: axum router, bearer-token middleware and error rendering
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use alice_bridge::cache::DeviceCache;
//! use alice_bridge::handlers::Bridge;
//! use alice_bridge::hub::HubConfig;
//! use alice_bridge::wire::{ActionPayload, ActionRequest, DeviceRequest};
//!
//! #[tokio::main]
//! async fn main() -> alice_bridge::Result<()> {
//!     let hub = HubConfig::new("192.168.1.1").into_client()?;
//!     let bridge = Bridge::new(DeviceCache::new(hub));
//!
//!     for device in bridge.list_devices().await? {
//!         println!("{}: {}", device.id(), device.description());
//!     }
//!
//!     let request = ActionRequest {
//!         payload: ActionPayload {
//!             devices: vec![DeviceRequest::on_off("sw_kitchen", true)],
//!         },
//!     };
//!     let switched = bridge.execute_action(&request).await?;
//!     println!("switched {} device(s)", switched.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cache;
pub mod clock;
#[cfg(feature = "server")]
pub mod config;
pub mod error;
pub mod handlers;
pub mod hub;
pub mod model;
#[cfg(feature = "server")]
pub mod server;
pub mod translate;
pub mod types;
pub mod wire;

pub use cache::{DeviceCache, Snapshot};
pub use error::{DecodeError, Error, Result, TransportError};
pub use handlers::Bridge;
pub use hub::{HubClient, Item};
pub use model::{ActionResult, ActionStatus, Capability, CapabilityType, Device, DeviceType};
pub use types::{OnOff, Value};
