// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP hub client using wiremock.

#![cfg(feature = "http")]

use std::time::Duration;

use alice_bridge::cache::DeviceCache;
use alice_bridge::error::TransportError;
use alice_bridge::handlers::Bridge;
use alice_bridge::hub::{HttpHubClient, HubClient, HubConfig};
use alice_bridge::model::ActionStatus;
use alice_bridge::types::Value;
use alice_bridge::wire::{ActionPayload, ActionRequest, DeviceRequest};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpHubClient {
    HubConfig::new(server.uri()).into_client().unwrap()
}

fn items_body() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "sw_kitchen",
            "type": "switch",
            "human_name": "Kitchen ceiling",
            "changed": "2024-05-01T18:00:00Z",
            "checked": "2024-05-01T18:01:00Z",
            "value": "ON",
            "raw_value": true,
            "formatted_value": "On",
            "good": true,
            "ui": true
        },
        {
            "name": "t_outside",
            "type": "temperature",
            "human_name": "Outside",
            "raw_value": 12.5
        },
        {
            "name": "sw_hall",
            "type": "switch",
            "human_name": "Hall",
            "raw_value": false
        }
    ])
}

// ============================================================================
// HttpHubClient Tests
// ============================================================================

mod http_hub_client {
    use super::*;

    #[tokio::test]
    async fn list_all_decodes_items() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client_for(&mock_server).list_all().await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "sw_kitchen");
        assert_eq!(items[0].raw_value, Value::Bool(true));
        assert_eq!(items[1].raw_value, Value::Number(12.5));
    }

    #[tokio::test]
    async fn list_all_rejects_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).list_all().await.unwrap_err();
        assert!(matches!(err, TransportError::Malformed(_)));
    }

    #[tokio::test]
    async fn list_all_surfaces_http_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).list_all().await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn list_all_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(items_body())
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = HubConfig::new(mock_server.uri())
            .with_timeout(Duration::from_millis(100))
            .into_client()
            .unwrap();

        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout(100)));
    }

    #[tokio::test]
    async fn write_command_posts_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items/sw_kitchen"))
            .and(header("content-type", "application/json"))
            .and(body_string("On"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .write_command("sw_kitchen", "On")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn write_command_surfaces_http_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items/sw_missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .write_command("sw_missing", "Off")
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn unreachable_hub_is_transport_error() {
        // Nothing listens on port 1.
        let client = HubConfig::new("127.0.0.1")
            .with_port(1)
            .with_timeout(Duration::from_millis(500))
            .into_client()
            .unwrap();

        let err = client.list_all().await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Http(_) | TransportError::Timeout(_)
        ));
    }
}

// ============================================================================
// Bridge over a real HTTP hub
// ============================================================================

mod bridge_over_http {
    use super::*;

    #[tokio::test]
    async fn cache_polls_hub_once_within_ttl() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bridge = Bridge::new(DeviceCache::new(client_for(&mock_server)));

        let first = bridge.list_devices().await.unwrap();
        let second = bridge.list_devices().await.unwrap();

        let ids: Vec<_> = first.iter().map(|d| d.id()).collect();
        assert_eq!(ids, ["sw_kitchen", "sw_hall"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn item_with_null_fields_does_not_sink_listing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "sw_a", "type": "switch", "human_name": null, "value": null, "raw_value": true},
                {"name": "t_cellar", "type": "temperature", "human_name": null, "tags": null},
                {"name": "sw_b", "type": "switch", "human_name": "B", "raw_value": false}
            ])))
            .mount(&mock_server)
            .await;

        let bridge = Bridge::new(DeviceCache::new(client_for(&mock_server)));
        let devices = bridge.list_devices().await.unwrap();

        let ids: Vec<_> = devices.iter().map(|d| d.id()).collect();
        assert_eq!(ids, ["sw_a", "sw_b"]);
        assert_eq!(devices[0].description(), "");
    }

    #[tokio::test]
    async fn action_writes_through_to_hub() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/items/sw_hall"))
            .and(body_string("On"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bridge = Bridge::new(DeviceCache::new(client_for(&mock_server)));
        let request = ActionRequest {
            payload: ActionPayload {
                devices: vec![
                    DeviceRequest::on_off("sw_hall", true),
                    DeviceRequest::on_off("t_outside", true),
                ],
            },
        };

        let devices = bridge.execute_action(&request).await.unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id(), "sw_hall");
        let state = devices[0].capabilities()[0].state.as_ref().unwrap();
        assert_eq!(state.value, Value::Bool(true));
        assert_eq!(
            state.action_result.as_ref().map(|r| r.status),
            Some(ActionStatus::Done)
        );
    }

    #[tokio::test]
    async fn rejected_write_drops_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/items/sw_hall"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let bridge = Bridge::new(DeviceCache::new(client_for(&mock_server)));
        let request = ActionRequest {
            payload: ActionPayload {
                devices: vec![DeviceRequest::on_off("sw_hall", false)],
            },
        };

        let devices = bridge.execute_action(&request).await.unwrap();
        assert!(devices.is_empty());
    }
}
