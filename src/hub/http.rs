// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP access to the hub's item API.

use std::time::Duration;

use reqwest::{Client, Response, header};

use crate::error::TransportError;
use crate::hub::{HubClient, Item};

// ============================================================================
// HubConfig - Connection parameters for the hub
// ============================================================================

/// Connection parameters for the hub.
///
/// # Examples
///
/// ```
/// use alice_bridge::hub::HubConfig;
/// use std::time::Duration;
///
/// let config = HubConfig::new("192.168.1.1");
/// assert_eq!(config.base_url(), "http://192.168.1.1:8880");
///
/// let config = HubConfig::new("hub.local")
///     .with_port(80)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://hub.local");
/// ```
#[derive(Debug, Clone)]
pub struct HubConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HubConfig {
    /// Default port of the hub's HTTP API.
    pub const DEFAULT_PORT: u16 = 8880;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Creates a configuration for the specified host.
    ///
    /// `host` may also be a full `http://` or `https://` URL, in which case
    /// it is used verbatim and the port setting is ignored.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        if self.port == 80 {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpHubClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpHubClient, TransportError> {
        if self.host.trim().is_empty() {
            return Err(TransportError::InvalidAddress(
                "hub host is required".to_string(),
            ));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpHubClient {
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

// ============================================================================
// HttpHubClient
// ============================================================================

/// HTTP client for the hub.
///
/// - `GET /items` lists every item.
/// - `POST /items/<name>` with a plain-text body sends a command.
///
/// # Examples
///
/// ```no_run
/// use alice_bridge::hub::{HubClient, HubConfig};
///
/// # async fn example() -> Result<(), alice_bridge::error::TransportError> {
/// let hub = HubConfig::new("192.168.1.1").into_client()?;
/// let items = hub.list_all().await?;
/// hub.write_command(&items[0].name, "On").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpHubClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpHubClient {
    /// Returns the base URL of the hub.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, item: &str) -> String {
        format!("{}/items/{}", self.base_url, urlencoding::encode(item))
    }

    fn map_send_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            let millis = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
            TransportError::Timeout(millis)
        } else {
            TransportError::Http(err)
        }
    }

    async fn checked_body(&self, response: Response) -> Result<String, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        response.text().await.map_err(|e| self.map_send_error(e))
    }
}

impl HubClient for HttpHubClient {
    async fn list_all(&self) -> Result<Vec<Item>, TransportError> {
        let url = self.items_url();
        tracing::debug!(url = %url, "Fetching hub items");

        let result = async {
            let response = self
                .client
                .get(&url)
                .header(header::CONTENT_TYPE, "application/json")
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            let body = self.checked_body(response).await?;
            Ok::<_, TransportError>(serde_json::from_str::<Vec<Item>>(&body)?)
        }
        .await;

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Received hub items");
                Ok(items)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error talking to hub");
                Err(e)
            }
        }
    }

    async fn write_command(&self, item: &str, payload: &str) -> Result<(), TransportError> {
        let url = self.item_url(item);
        tracing::debug!(url = %url, payload, "Sending hub command");

        let result = async {
            let response = self
                .client
                .post(&url)
                .header(header::CONTENT_TYPE, "application/json")
                .body(payload.to_string())
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            self.checked_body(response).await
        }
        .await;

        match result {
            Ok(body) => {
                tracing::debug!(item, body = %body, "Hub accepted command");
                Ok(())
            }
            Err(e) => {
                tracing::error!(item, error = %e, "Error talking to hub");
                Err(e)
            }
        }
    }
}
