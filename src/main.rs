// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alice Bridge server binary.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alice_bridge::cache::DeviceCache;
use alice_bridge::config::Settings;
use alice_bridge::handlers::Bridge;
use alice_bridge::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::parse();
    init_tracing(settings.log_json);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting alice-bridge");

    let hub = settings.hub_config().into_client()?;
    tracing::info!(hub = hub.base_url(), "Using hub");

    let cache = DeviceCache::new(hub).with_ttl(settings.cache_ttl());
    let bridge = Bridge::new(cache).with_write_error_reporting(settings.report_write_errors);

    let verifier = settings.token_verifier();
    if verifier.is_empty() {
        tracing::warn!("No access tokens configured, every API call will be rejected");
    }

    let app = server::router(Arc::new(bridge), Arc::new(verifier), &settings.prefix);

    let listener = tokio::net::TcpListener::bind(settings.listen).await?;
    tracing::info!(addr = %settings.listen, prefix = %settings.prefix, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("alice_bridge=info,tower_http=info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
