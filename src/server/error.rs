// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping of crate errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::{DecodeError, Error, TransportError};

/// Error returned by route handlers and middleware.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No valid bearer token was presented.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// The request reached the bridge and failed there.
    #[error(transparent)]
    Bridge(#[from] Error),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Bridge(err.into())
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        Self::Bridge(err.into())
    }
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Bridge(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unauthorized(message) => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            // Plain text body, the platform only logs it.
            Self::Bridge(err) => {
                tracing::error!(error = %err, "Request failed");
                (status, err.to_string()).into_response()
            }
        }
    }
}
