// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP surface of the smart home API.
//!
//! | Method | Path                   | Auth   |
//! |--------|------------------------|--------|
//! | HEAD   | `/`                    | none   |
//! | POST   | `/user/unlink`         | bearer |
//! | GET    | `/user/devices`        | bearer |
//! | POST   | `/user/devices/query`  | bearer |
//! | POST   | `/user/devices/action` | bearer |
//!
//! All paths live under a configurable prefix, [`DEFAULT_PREFIX`] by default.
//!
//! The `HEAD /` probe is deliberately left unauthenticated, unlike the other
//! routes, so the platform's reachability check works before account linking.

mod error;
mod middleware;
mod routes;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, bearer_token, request_id, require_bearer};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, head, post};
use tower_http::trace::TraceLayer;

use crate::auth::TokenVerifier;
use crate::clock::Clock;
use crate::handlers::Bridge;
use crate::hub::HubClient;

/// Path prefix the voice-assistant platform calls.
pub const DEFAULT_PREFIX: &str = "/alice/api/v1.0";

/// Shared state handed to every route.
pub struct AppState<H, C> {
    /// Request handling core.
    pub bridge: Arc<Bridge<H, C>>,
}

impl<H, C> Clone for AppState<H, C> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
        }
    }
}

/// Builds the application router.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use alice_bridge::auth::StaticTokens;
/// use alice_bridge::cache::DeviceCache;
/// use alice_bridge::handlers::Bridge;
/// use alice_bridge::hub::HubConfig;
/// use alice_bridge::server::{DEFAULT_PREFIX, router};
///
/// # async fn example() -> alice_bridge::Result<()> {
/// let hub = HubConfig::new("192.168.1.1").into_client()?;
/// let bridge = Arc::new(Bridge::new(DeviceCache::new(hub)));
/// let tokens = Arc::new(StaticTokens::new().with_token("s3cret", "user"));
///
/// let app = router(bridge, tokens, DEFAULT_PREFIX);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8282").await.unwrap();
/// axum::serve(listener, app).await.unwrap();
/// # Ok(())
/// # }
/// ```
pub fn router<H, C>(
    bridge: Arc<Bridge<H, C>>,
    verifier: Arc<dyn TokenVerifier>,
    prefix: &str,
) -> Router
where
    H: HubClient + 'static,
    C: Clock + 'static,
{
    let base = normalize_prefix(prefix);
    let path = |p: &str| format!("{base}{p}");

    let protected = Router::new()
        .route(&path("/user/unlink"), post(routes::unlink))
        .route(&path("/user/devices"), get(routes::list_devices::<H, C>))
        .route(&path("/user/devices/query"), post(routes::query_devices::<H, C>))
        .route(&path("/user/devices/action"), post(routes::device_action::<H, C>))
        .route_layer(axum::middleware::from_fn_with_state(verifier, require_bearer));

    let mut public = Router::new().route(&path("/"), head(routes::probe));
    if !base.is_empty() {
        public = public.route(&base, head(routes::probe));
    }

    public
        .merge(protected)
        .with_state(AppState { bridge })
        .layer(TraceLayer::new_for_http())
}

/// Strips trailing slashes and makes sure a non-empty prefix starts with one.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
