// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line and environment configuration of the bridge binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::auth::{StaticTokens, TokenGrant};
use crate::hub::HubConfig;
use crate::server::DEFAULT_PREFIX;

/// Bridge settings.
///
/// Every flag can also be set through the matching `BRIDGE_*` variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "alice-bridge", version, about)]
pub struct Settings {
    /// Address to serve the smart home API on.
    #[arg(long, env = "BRIDGE_LISTEN", default_value = "0.0.0.0:8282")]
    pub listen: SocketAddr,

    /// Hub host name, IP address, or full base URL.
    #[arg(long, env = "BRIDGE_HUB_HOST", default_value = "192.168.1.1")]
    pub hub_host: String,

    /// Hub HTTP port.
    #[arg(long, env = "BRIDGE_HUB_PORT", default_value_t = HubConfig::DEFAULT_PORT)]
    pub hub_port: u16,

    /// Timeout for every hub request, in seconds.
    #[arg(long, env = "BRIDGE_HUB_TIMEOUT", default_value_t = 3)]
    pub hub_timeout_secs: u64,

    /// How long the device list is served before the hub is polled again, in seconds.
    #[arg(long, env = "BRIDGE_CACHE_TTL", default_value_t = 60)]
    pub cache_ttl_secs: u64,

    /// Path prefix of the smart home API.
    #[arg(long, env = "BRIDGE_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Accepted access token, as TOKEN=USER. Repeat for several.
    #[arg(long = "token", env = "BRIDGE_TOKENS", value_delimiter = ',')]
    pub tokens: Vec<TokenGrant>,

    /// Return failed hub writes as ERROR results instead of dropping them.
    #[arg(long, env = "BRIDGE_REPORT_WRITE_ERRORS")]
    pub report_write_errors: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "BRIDGE_LOG_JSON")]
    pub log_json: bool,
}

impl Settings {
    /// Hub connection parameters.
    #[must_use]
    pub fn hub_config(&self) -> HubConfig {
        HubConfig::new(self.hub_host.clone())
            .with_port(self.hub_port)
            .with_timeout(Duration::from_secs(self.hub_timeout_secs))
    }

    /// Cache lifetime.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// The token verifier built from `--token` flags.
    #[must_use]
    pub fn token_verifier(&self) -> StaticTokens {
        self.tokens.iter().cloned().collect()
    }
}
