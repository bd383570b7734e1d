// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::TokenVerifier;

use super::error::ApiError;

/// Header the platform uses to correlate requests.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Rejects requests without a valid bearer token.
///
/// On success the resolved [`UserId`](crate::auth::UserId) is stored in the
/// request extensions for the handlers.
pub async fn require_bearer(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or(ApiError::Unauthorized("missing bearer token"))?;

    let user = verifier.verify(token).ok_or_else(|| {
        tracing::warn!(path = %req.uri().path(), "Rejected invalid access token");
        ApiError::Unauthorized("invalid access token")
    })?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme name is matched case-insensitively.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

/// Returns the inbound request id, or a fresh UUID if none was sent.
#[must_use]
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), ToString::to_string)
}
