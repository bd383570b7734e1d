// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the bridge.
//!
//! Failures fall into two families: talking to the hub ([`TransportError`])
//! and decoding what the voice assistant sent us ([`DecodeError`]). Unknown
//! device ids are never errors; handlers simply leave them out of the reply.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The hub could not be reached or answered with garbage.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// An inbound request body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors raised while talking to the home-automation hub.
///
/// None of these are retried. They surface to whoever asked for the data.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The hub answered with a non-success status.
    #[error("hub returned HTTP {status}: {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, if any.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The hub response body was not the expected JSON.
    #[error("malformed hub response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Catch-all used by test doubles and non-HTTP transports.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors raised while decoding a voice-assistant request.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON for the expected shape.
    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was empty where a payload is required.
    #[error("empty request body")]
    EmptyBody,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
