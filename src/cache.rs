// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-through cache of translated devices.
//!
//! The cache is either stale (never filled, or older than its TTL) or fresh.
//! A read on a stale cache fetches every item from the hub, translates them,
//! and swaps in a complete new [`Snapshot`]. The staleness check and the
//! refresh run under one lock, and readers get an `Arc` to a whole snapshot,
//! so nobody ever sees a mix of two generations.
//!
//! A failed refresh leaves the previous snapshot and timestamp untouched and
//! returns the error; expired data is never served.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::error::TransportError;
use crate::hub::{HubClient, Item};
use crate::model::Device;
use crate::translate::item_to_device;

// ============================================================================
// Snapshot
// ============================================================================

/// All devices derived from one successful hub read.
///
/// Devices keep the order the hub listed them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    devices: Vec<Device>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a hub item list.
    ///
    /// Unsupported items are dropped. If the hub reports the same name twice,
    /// the first item wins.
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let mut snapshot = Self::new();
        for device in items.iter().filter_map(item_to_device) {
            if snapshot.index.contains_key(device.id()) {
                tracing::warn!(id = device.id(), "Duplicate hub item name, ignoring");
                continue;
            }
            snapshot
                .index
                .insert(device.id().to_string(), snapshot.devices.len());
            snapshot.devices.push(device);
        }
        snapshot
    }

    /// Looks up a device by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Device> {
        self.index.get(id).map(|&i| &self.devices[i])
    }

    /// Returns `true` if a device with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All devices, in hub order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// All device ids, in hub order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(Device::id)
    }

    /// Number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if there are no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

// ============================================================================
// DeviceCache
// ============================================================================

#[derive(Debug, Default)]
struct CacheState {
    snapshot: Arc<Snapshot>,
    last_refresh: Option<Instant>,
}

/// Time-bounded cache of the device snapshot.
///
/// # Examples
///
/// ```no_run
/// use alice_bridge::cache::DeviceCache;
/// use alice_bridge::hub::HubConfig;
///
/// # async fn example() -> alice_bridge::Result<()> {
/// let hub = HubConfig::new("192.168.1.1").into_client()?;
/// let cache = DeviceCache::new(hub);
///
/// let snapshot = cache.snapshot().await?;
/// for device in snapshot.devices() {
///     println!("{} ({})", device.name(), device.id());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceCache<H, C = SystemClock> {
    hub: H,
    clock: C,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl<H: HubClient> DeviceCache<H> {
    /// Creates a cache backed by `hub` using the system clock.
    #[must_use]
    pub fn new(hub: H) -> Self {
        Self::with_clock(hub, SystemClock)
    }
}

impl<H: HubClient, C: Clock> DeviceCache<H, C> {
    /// How long a snapshot is served before the hub is polled again.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

    /// Creates a cache with an explicit time source.
    #[must_use]
    pub fn with_clock(hub: H, clock: C) -> Self {
        Self {
            hub,
            clock,
            ttl: Self::DEFAULT_TTL,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Sets the snapshot lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the snapshot lifetime.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the hub client, for write-through.
    #[must_use]
    pub fn hub(&self) -> &H {
        &self.hub
    }

    /// Returns the current snapshot, refreshing it first if it is stale.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if a refresh was needed and the hub call
    /// failed. The previous snapshot is kept in that case.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, TransportError> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();

        if !self.is_stale(&state, now) {
            return Ok(Arc::clone(&state.snapshot));
        }

        tracing::debug!(ttl_secs = self.ttl.as_secs(), "Device cache stale, refreshing");
        let items = self.hub.list_all().await?;
        let snapshot = Arc::new(Snapshot::from_items(&items));

        tracing::info!(
            items = items.len(),
            devices = snapshot.len(),
            "Device cache refreshed"
        );

        state.snapshot = Arc::clone(&snapshot);
        state.last_refresh = Some(now);
        Ok(snapshot)
    }

    /// Marks the cache stale so the next read polls the hub.
    pub async fn invalidate(&self) {
        self.state.lock().await.last_refresh = None;
    }

    /// Returns `true` if a read right now would be served without the hub.
    pub async fn is_fresh(&self) -> bool {
        let state = self.state.lock().await;
        !self.is_stale(&state, self.clock.now())
    }

    fn is_stale(&self, state: &CacheState, now: Instant) -> bool {
        state
            .last_refresh
            .is_none_or(|at| now.saturating_duration_since(at) > self.ttl)
    }
}
