// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end dispatch scenarios against a recording sender.

use std::sync::{Arc, Mutex};

use remo_bridge::{
    ButtonCommand, Catalog, CommandSender, DirectiveHandler, Error, ProtocolError,
};
use serde_json::{Value, json};

/// Records sent button codes instead of calling the cloud.
///
/// Clones share the same log, so a test can keep a handle after moving the
/// sender into the handler.
#[derive(Debug, Default, Clone)]
struct RecordingSender {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingSender {
    fn codes(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl CommandSender for RecordingSender {
    async fn send(&self, command: &ButtonCommand) -> Result<(), ProtocolError> {
        self.sent.lock().unwrap().push(command.code());
        Ok(())
    }
}

fn handler() -> (DirectiveHandler<RecordingSender>, RecordingSender) {
    let sender = RecordingSender::default();
    let log = sender.clone();
    (DirectiveHandler::new(Catalog::sample(), sender), log)
}

async fn reply_value(handler: &DirectiveHandler<RecordingSender>, request: &Value) -> Value {
    serde_json::to_value(handler.handle(request).await.unwrap()).unwrap()
}

#[tokio::test]
async fn power_turn_on_scenario() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.PowerController",
                "name": "TurnOn",
                "payloadVersion": "3",
                "correlationToken": "tok1"
            },
            "endpoint": { "endpointId": "endpoint-009" }
        }
    });

    let value = reply_value(&handler, &request).await;

    assert_eq!(log.codes(), vec!["power"]);
    assert_eq!(value["context"]["properties"][0]["name"], "powerState");
    assert_eq!(value["context"]["properties"][0]["value"], "ON");
    assert_eq!(value["event"]["header"]["correlationToken"], "tok1");
    assert_eq!(value["event"]["endpoint"]["endpointId"], "endpoint-009");
}

#[tokio::test]
async fn skip_channels_negative_scenario() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.ChannelController",
                "name": "SkipChannels",
                "payloadVersion": "3",
                "correlationToken": "tok2"
            },
            "endpoint": { "endpointId": "endpoint-009" },
            "payload": { "channelCount": -3 }
        }
    });

    let value = reply_value(&handler, &request).await;

    assert_eq!(log.codes(), vec!["ch-down"]);
    assert_eq!(value["context"]["properties"][0]["name"], "channelCount");
    assert_eq!(value["context"]["properties"][0]["value"], -3);
}

#[tokio::test]
async fn change_channel_scenario() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.ChannelController",
                "name": "ChangeChannel",
                "payloadVersion": "3",
                "correlationToken": "tok4"
            },
            "endpoint": { "endpointId": "endpoint-009" },
            "payload": { "channel": { "number": "12" } }
        }
    });

    let value = reply_value(&handler, &request).await;

    assert_eq!(log.codes(), vec!["ch-12"]);
    assert_eq!(value["context"]["properties"][0]["value"]["number"], "12");
}

#[tokio::test]
async fn volume_explicit_delta_scenario() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.Speaker",
                "name": "AdjustVolume",
                "payloadVersion": "3",
                "correlationToken": "tok5"
            },
            "endpoint": { "endpointId": "endpoint-009" },
            "payload": { "volume": 3, "volumeDefault": false }
        }
    });

    let value = reply_value(&handler, &request).await;

    assert_eq!(log.codes(), vec!["vol-up", "vol-up", "vol-up"]);
    assert_eq!(value["context"]["properties"][0]["name"], "volume");
    assert_eq!(value["context"]["properties"][0]["value"], 3);
    assert_eq!(value["context"]["properties"][1]["name"], "muted");
    assert_eq!(value["context"]["properties"][1]["value"], false);
}

#[tokio::test]
async fn unknown_namespace_scenario() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.Foo",
                "name": "Bar",
                "payloadVersion": "3",
                "correlationToken": "tok3"
            },
            "endpoint": { "endpointId": "endpoint-009" }
        }
    });

    let value = reply_value(&handler, &request).await;

    assert!(log.codes().is_empty());
    assert_eq!(value["event"]["header"]["name"], "ErrorResponse");
    assert_eq!(value["event"]["payload"]["type"], "INVALID_DIRECTIVE");
}

#[tokio::test]
async fn correlation_token_echoed_byte_for_byte() {
    let (handler, _log) = handler();
    let token = "Atc0tok|opaque==/+base64ish";
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.PowerController",
                "name": "TurnOff",
                "payloadVersion": "3",
                "correlationToken": token
            },
            "endpoint": { "endpointId": "endpoint-009" }
        }
    });

    let value = reply_value(&handler, &request).await;
    assert_eq!(value["event"]["header"]["correlationToken"], token);
}

#[tokio::test]
async fn discovery_covers_whole_catalog() {
    let (handler, log) = handler();
    let request = json!({
        "directive": {
            "header": {
                "namespace": "Alexa.Discovery",
                "name": "Discover",
                "payloadVersion": "3"
            },
            "payload": {}
        }
    });

    let value = reply_value(&handler, &request).await;
    let endpoints = value["event"]["payload"]["endpoints"].as_array().unwrap();

    assert!(log.codes().is_empty());
    assert_eq!(endpoints.len(), handler.catalog().len());

    let tv = endpoints
        .iter()
        .find(|e| e["endpointId"] == "endpoint-009")
        .unwrap();
    assert_eq!(tv["friendlyName"], "テレビ");

    let capabilities = tv["capabilities"].as_array().unwrap();
    let n = capabilities.len();
    assert_eq!(capabilities[n - 2]["interface"], "Alexa.EndpointHealth");
    assert_eq!(capabilities[n - 1]["interface"], "Alexa");
}

#[tokio::test]
async fn legacy_discovery_scenario() {
    let (handler, _log) = handler();
    let request = json!({
        "header": {
            "namespace": "Alexa.ConnectedHome.Discovery",
            "name": "DiscoverAppliancesRequest",
            "payloadVersion": "2"
        },
        "payload": {}
    });

    let value = reply_value(&handler, &request).await;
    assert_eq!(value["header"]["name"], "DiscoverAppliancesResponse");
    assert_eq!(value["header"]["payloadVersion"], "2");
}

#[tokio::test]
async fn unsupported_version_is_a_fault() {
    let (handler, _log) = handler();
    let result = handler.handle(&json!({"payload": {}})).await;
    assert!(matches!(result, Err(Error::UnsupportedVersion)));
}
