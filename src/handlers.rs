// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The three smart home operations: list, query and action.
//!
//! [`Bridge`] composes the [`DeviceCache`] with the translator and is free of
//! any HTTP framework, so it can be driven directly in tests.

use crate::cache::DeviceCache;
use crate::clock::{Clock, SystemClock};
use crate::error::TransportError;
use crate::hub::HubClient;
use crate::model::{ActionResult, CapabilityType, Device, Instance};
use crate::translate::{action_to_command, requested_on_off};
use crate::types::Value;
use crate::wire::{ActionRequest, QueryRequest};

/// Error code reported for a failed hub write when error reporting is on.
pub const DEVICE_UNREACHABLE: &str = "DEVICE_UNREACHABLE";

/// Request handling core shared by all HTTP routes.
///
/// # Failed writes
///
/// By default a device whose hub write fails is left out of the action
/// reply, exactly like a device id the bridge does not know. Callers cannot
/// tell the two apart. [`with_write_error_reporting`](Self::with_write_error_reporting)
/// switches to returning such devices with an `ERROR` action result instead.
#[derive(Debug)]
pub struct Bridge<H, C = SystemClock> {
    cache: DeviceCache<H, C>,
    report_write_errors: bool,
}

impl<H: HubClient, C: Clock> Bridge<H, C> {
    /// Creates a bridge over the given cache.
    #[must_use]
    pub fn new(cache: DeviceCache<H, C>) -> Self {
        Self {
            cache,
            report_write_errors: false,
        }
    }

    /// Reports failed hub writes as `ERROR` results instead of omitting them.
    #[must_use]
    pub fn with_write_error_reporting(mut self, enabled: bool) -> Self {
        self.report_write_errors = enabled;
        self
    }

    /// Returns the underlying cache.
    #[must_use]
    pub fn cache(&self) -> &DeviceCache<H, C> {
        &self.cache
    }

    /// Every device in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the cache had to refresh and the hub failed.
    pub async fn list_devices(&self) -> Result<Vec<Device>, TransportError> {
        let snapshot = self.cache.snapshot().await?;
        Ok(snapshot.devices().to_vec())
    }

    /// The requested devices that exist, in request order.
    ///
    /// Unknown ids are silently left out.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the cache had to refresh and the hub failed.
    pub async fn query_devices(
        &self,
        request: &QueryRequest,
    ) -> Result<Vec<Device>, TransportError> {
        let snapshot = self.cache.snapshot().await?;
        let devices = request
            .devices
            .iter()
            .filter_map(|d| snapshot.get(&d.id))
            .cloned()
            .collect();
        Ok(devices)
    }

    /// Applies an action batch and returns the affected devices.
    ///
    /// Each entry is processed in order. Entries without capabilities, without
    /// an on/off intent, or naming an unknown device are skipped. For the
    /// rest the hub is told `On`/`Off`, and a copy of the cached device is
    /// returned with its on/off state set to the requested value and a
    /// `DONE` result. The cached snapshot itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only if the cache had to refresh and the hub
    /// failed. Per-device write failures never fail the batch.
    pub async fn execute_action(
        &self,
        request: &ActionRequest,
    ) -> Result<Vec<Device>, TransportError> {
        let snapshot = self.cache.snapshot().await?;
        let mut applied = Vec::new();

        for entry in &request.payload.devices {
            if entry.capabilities.is_empty() {
                continue;
            }

            let Some(on) = requested_on_off(&entry.capabilities) else {
                tracing::debug!(id = %entry.id, "No applicable capability in action, skipping");
                continue;
            };

            let Some(cached) = snapshot.get(&entry.id) else {
                tracing::debug!(id = %entry.id, "Action for unknown device, skipping");
                continue;
            };

            let command = action_to_command(on);
            tracing::debug!(id = %entry.id, command = %command, "Applying action");

            let mut device = cached.clone();
            match self.cache.hub().write_command(&entry.id, command.as_str()).await {
                Ok(()) => {
                    if let Some(cap) = device.capability_mut(CapabilityType::OnOff) {
                        cap.set_value_done(Instance::On, on);
                    }
                    applied.push(device);
                }
                Err(e) => {
                    tracing::warn!(id = %entry.id, error = %e, "Hub write failed");
                    if self.report_write_errors {
                        if let Some(cap) = device.capability_mut(CapabilityType::OnOff) {
                            let current = cap
                                .get_value(Instance::On)
                                .cloned()
                                .unwrap_or(Value::Null);
                            cap.set_action_outcome(
                                Instance::On,
                                current,
                                ActionResult::error(DEVICE_UNREACHABLE, e.to_string()),
                            );
                        }
                        applied.push(device);
                    }
                }
            }
        }

        Ok(applied)
    }
}
