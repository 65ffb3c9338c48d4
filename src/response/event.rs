// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! v3 event envelope construction.

use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::command::power::PowerState;
use crate::response::utc_timestamp;

/// A v3 response header.
///
/// Every header carries a freshly generated message id; ids are never
/// reused and never derived from the request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Response namespace.
    pub namespace: String,
    /// Response name.
    pub name: String,
    /// Always `"3"` on this path.
    pub payload_version: String,
    /// Fresh unique message id.
    pub message_id: Uuid,
    /// Correlation token echoed from the directive, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl Header {
    /// Creates a v3 header with a fresh message id.
    #[must_use]
    pub fn v3(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            payload_version: "3".to_string(),
            message_id: Uuid::new_v4(),
            correlation_token: None,
        }
    }

    /// Attaches the correlation token to echo.
    #[must_use]
    pub fn with_correlation_token(mut self, token: &str) -> Self {
        self.correlation_token = Some(token.to_string());
        self
    }
}

/// Bearer-token scope attached to a response endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Scope {
    /// Scope type; always `BearerToken`.
    #[serde(rename = "type")]
    pub scope_type: String,
    /// The bearer token echoed from the directive.
    pub token: String,
}

impl Scope {
    /// Creates a bearer-token scope.
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self {
            scope_type: "BearerToken".to_string(),
            token: token.to_string(),
        }
    }
}

/// Endpoint block of a v3 event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEndpoint {
    /// Caller scope, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// The endpoint this event concerns.
    pub endpoint_id: String,
}

/// One reported context property.
///
/// Values describe the request's intended target state, not verified device
/// state; this layer is optimistic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextProperty {
    /// Property namespace.
    pub namespace: String,
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: Value,
    /// Sample timestamp.
    pub time_of_sample: String,
    /// Uncertainty bound in milliseconds.
    pub uncertainty_in_milliseconds: u32,
}

impl ContextProperty {
    fn new(namespace: &str, name: &str, value: Value, uncertainty_ms: u32) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            value,
            time_of_sample: utc_timestamp(),
            uncertainty_in_milliseconds: uncertainty_ms,
        }
    }

    /// The reported power state after a power directive.
    #[must_use]
    pub fn power_state(state: PowerState) -> Self {
        Self::new(
            "Alexa.PowerController",
            "powerState",
            json!(state.as_str()),
            500,
        )
    }

    /// The reported channel after a direct channel change.
    #[must_use]
    pub fn channel(number: &str) -> Self {
        Self::new(
            "Alexa.ChannelController",
            "channel",
            json!({
                "number": number,
                "callSign": "",
                "affiliateCallSign": ""
            }),
            500,
        )
    }

    /// The reported channel delta after a skip.
    #[must_use]
    pub fn channel_count(count: i64) -> Self {
        Self::new("Alexa.ChannelController", "channelCount", json!(count), 500)
    }

    /// The reported volume delta after an adjustment.
    #[must_use]
    pub fn volume(volume: i64) -> Self {
        Self::new("Alexa.Speaker", "volume", json!(volume), 0)
    }

    /// The reported mute state; this bridge never mutes.
    #[must_use]
    pub fn muted() -> Self {
        Self::new("Alexa.Speaker", "muted", json!(false), 0)
    }
}

/// Context block of a v3 response.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Reported properties.
    pub properties: Vec<ContextProperty>,
}

/// Event block of a v3 response.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Response header.
    pub header: Header,
    /// Endpoint block, absent for discovery and grant responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EventEndpoint>,
    /// Response payload; empty object on success.
    pub payload: Value,
}

/// A complete v3 response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    /// Context block, present on successful control responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    /// Event block.
    pub event: Event,
}

/// Error kinds surfaced in v3 error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The namespace/name pair is not supported.
    InvalidDirective,
    /// The downstream device cloud could not be reached or rejected the
    /// command.
    EndpointUnreachable,
}

impl ErrorKind {
    /// Returns the wire error type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDirective => "INVALID_DIRECTIVE",
            Self::EndpointUnreachable => "ENDPOINT_UNREACHABLE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds a successful v3 control response.
///
/// Echoes the correlation token verbatim and reports the given context
/// properties as the now-current state.
#[must_use]
pub fn control_response(
    endpoint_id: &str,
    correlation_token: &str,
    scope_token: Option<&str>,
    properties: Vec<ContextProperty>,
    payload: Value,
) -> EventEnvelope {
    EventEnvelope {
        context: Some(Context { properties }),
        event: Event {
            header: Header::v3("Alexa", "Response").with_correlation_token(correlation_token),
            endpoint: Some(EventEndpoint {
                scope: scope_token.map(Scope::bearer),
                endpoint_id: endpoint_id.to_string(),
            }),
            payload,
        },
    }
}

/// Builds a v3 error response.
///
/// Error responses carry no context block; the payload is a fixed
/// `type`/`message` pair.
#[must_use]
pub fn error_response(endpoint_id: &str, kind: ErrorKind, message: &str) -> EventEnvelope {
    EventEnvelope {
        context: None,
        event: Event {
            header: Header::v3("Alexa", "ErrorResponse"),
            endpoint: Some(EventEndpoint {
                scope: None,
                endpoint_id: endpoint_id.to_string(),
            }),
            payload: json!({
                "type": kind.as_str(),
                "message": message
            }),
        },
    }
}

/// Builds the authorization grant acknowledgement.
#[must_use]
pub fn accept_grant_response() -> EventEnvelope {
    EventEnvelope {
        context: None,
        event: Event {
            header: Header::v3("Alexa.Authorization", "AcceptGrant.Response"),
            endpoint: None,
            payload: json!({}),
        },
    }
}
