// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Route handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Value as JsonValue, json};

use crate::auth::UserId;
use crate::clock::Clock;
use crate::error::DecodeError;
use crate::hub::HubClient;
use crate::wire::{ActionRequest, DevicesPayload, DevicesResponse, QueryRequest};

use super::AppState;
use super::error::ApiError;
use super::middleware::request_id;

/// GET /user/devices
pub async fn list_devices<H, C>(
    State(state): State<AppState<H, C>>,
    Extension(user): Extension<UserId>,
    headers: HeaderMap,
) -> Result<Json<DevicesResponse>, ApiError>
where
    H: HubClient + 'static,
    C: Clock + 'static,
{
    let request_id = request_id(&headers);
    tracing::info!(user = %user, request_id = %request_id, "List devices");

    let devices = state.bridge.list_devices().await?;

    Ok(Json(DevicesResponse {
        request_id,
        payload: DevicesPayload {
            user_id: Some(user.to_string()),
            devices,
        },
    }))
}

/// POST /user/devices/query
pub async fn query_devices<H, C>(
    State(state): State<AppState<H, C>>,
    Extension(user): Extension<UserId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DevicesResponse>, ApiError>
where
    H: HubClient + 'static,
    C: Clock + 'static,
{
    let request_id = request_id(&headers);
    tracing::info!(user = %user, request_id = %request_id, "Query devices");

    let request: QueryRequest = decode(&body)?;
    let devices = state.bridge.query_devices(&request).await?;

    Ok(Json(DevicesResponse {
        request_id,
        payload: DevicesPayload {
            user_id: None,
            devices,
        },
    }))
}

/// POST /user/devices/action
pub async fn device_action<H, C>(
    State(state): State<AppState<H, C>>,
    Extension(user): Extension<UserId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DevicesResponse>, ApiError>
where
    H: HubClient + 'static,
    C: Clock + 'static,
{
    let request_id = request_id(&headers);
    tracing::info!(user = %user, request_id = %request_id, "Device action");

    let request: ActionRequest = decode(&body)?;
    let devices = state.bridge.execute_action(&request).await?;

    Ok(Json(DevicesResponse {
        request_id,
        payload: DevicesPayload {
            user_id: Some(user.to_string()),
            devices,
        },
    }))
}

/// POST /user/unlink
///
/// Accepted and ignored; tokens are owned by the authorization service.
pub async fn unlink(Extension(user): Extension<UserId>, headers: HeaderMap) -> Json<JsonValue> {
    let request_id = request_id(&headers);
    tracing::info!(user = %user, request_id = %request_id, "Unlink");
    Json(json!({ "request_id": request_id }))
}

/// HEAD /
pub async fn probe() {}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    if body.is_empty() {
        return Err(DecodeError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
