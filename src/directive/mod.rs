// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound directive model.
//!
//! This module detects the wire version of an inbound request and parses v3
//! `directive` envelopes into typed values. The namespace/name pair of a
//! control request is folded into the [`ControlDirective`] union so that the
//! unknown-combination fallback is an ordinary match arm in the dispatcher,
//! not a stringly-typed special case.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;

/// Wire version of an inbound request.
///
/// Version "3" gets the v3 envelope treatment; any other declared version is
/// served on the legacy v2 path, which is retained so both epochs of clients
/// can be served during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadVersion {
    /// The v3 `directive` envelope.
    V3,
    /// The legacy v2 `header`/`payload` envelope.
    Legacy,
}

impl PayloadVersion {
    /// Detects the payload version of a raw request.
    ///
    /// Looks for `directive.header.payloadVersion` first, then the legacy
    /// `header.payloadVersion`. Returns `None` when neither field is
    /// present; the caller treats that as an unsupported request.
    #[must_use]
    pub fn detect(request: &Value) -> Option<Self> {
        let version = request
            .pointer("/directive/header/payloadVersion")
            .or_else(|| request.pointer("/header/payloadVersion"))
            .and_then(Value::as_str)?;

        if version == "3" {
            Some(Self::V3)
        } else {
            Some(Self::Legacy)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    directive: DirectiveBody,
}

#[derive(Debug, Deserialize)]
struct DirectiveBody {
    header: DirectiveHeader,
    endpoint: Option<DirectiveEndpoint>,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectiveHeader {
    namespace: String,
    name: String,
    correlation_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectiveEndpoint {
    endpoint_id: Option<String>,
    scope: Option<DirectiveScope>,
}

#[derive(Debug, Deserialize)]
struct DirectiveScope {
    token: Option<String>,
}

/// A parsed v3 directive.
///
/// # Examples
///
/// ```
/// use remo_bridge::directive::{ControlDirective, Directive};
///
/// let request = serde_json::json!({
///     "directive": {
///         "header": {
///             "namespace": "Alexa.PowerController",
///             "name": "TurnOn",
///             "payloadVersion": "3",
///             "correlationToken": "tok1"
///         },
///         "endpoint": { "endpointId": "endpoint-009" }
///     }
/// });
///
/// let directive = Directive::from_value(&request).unwrap();
/// assert_eq!(directive.control().unwrap(), ControlDirective::TurnOn);
/// ```
#[derive(Debug, Clone)]
pub struct Directive {
    /// Directive namespace, e.g. `Alexa.PowerController`.
    pub namespace: String,
    /// Directive name, e.g. `TurnOn`.
    pub name: String,
    /// Correlation token to echo in the response, when present.
    pub correlation_token: Option<String>,
    /// Target endpoint id, when present.
    pub endpoint_id: Option<String>,
    /// Bearer token from the endpoint scope, echoed back in responses.
    pub scope_token: Option<String>,
    /// Namespace-specific payload.
    pub payload: Value,
}

impl Directive {
    /// Parses a v3 `directive` envelope from a raw request.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` when the envelope does not deserialize.
    pub fn from_value(request: &Value) -> Result<Self, ParseError> {
        let envelope: Envelope = serde_json::from_value(request.clone())?;
        let body = envelope.directive;
        let (endpoint_id, scope_token) = match body.endpoint {
            Some(endpoint) => (
                endpoint.endpoint_id,
                endpoint.scope.and_then(|scope| scope.token),
            ),
            None => (None, None),
        };

        Ok(Self {
            namespace: body.header.namespace,
            name: body.header.name,
            correlation_token: body.header.correlation_token,
            endpoint_id,
            scope_token,
            payload: body.payload,
        })
    }

    /// Returns the correlation token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` when the directive carries none;
    /// success responses on the control path must echo it.
    pub fn require_correlation_token(&self) -> Result<&str, ParseError> {
        self.correlation_token
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("header.correlationToken".to_string()))
    }

    /// Returns the endpoint id.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` when the directive carries none.
    pub fn require_endpoint_id(&self) -> Result<&str, ParseError> {
        self.endpoint_id
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("endpoint.endpointId".to_string()))
    }

    /// Classifies this directive into the control union.
    ///
    /// Recognized namespace/name pairs yield their typed variant; anything
    /// else yields [`ControlDirective::Unrecognized`], which the dispatcher
    /// answers with an `INVALID_DIRECTIVE` error response.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` when a recognized directive lacks
    /// a required payload field, or `ParseError::InvalidValue` when a field
    /// holds an unusable value.
    pub fn control(&self) -> Result<ControlDirective, ParseError> {
        let control = match (self.namespace.as_str(), self.name.as_str()) {
            ("Alexa.PowerController", "TurnOn") => ControlDirective::TurnOn,
            ("Alexa.PowerController", "TurnOff") => ControlDirective::TurnOff,
            ("Alexa.ChannelController", "ChangeChannel") => {
                let number = required_field(&self.payload, "/channel/number")?;
                let number = number.as_str().ok_or_else(|| ParseError::InvalidValue {
                    field: "payload.channel.number".to_string(),
                    message: "expected a string".to_string(),
                })?;
                ControlDirective::ChangeChannel {
                    number: number.to_string(),
                }
            }
            ("Alexa.ChannelController", "SkipChannels") => {
                let count = required_i64(&self.payload, "/channelCount")?;
                ControlDirective::SkipChannels { count }
            }
            ("Alexa.Speaker", "AdjustVolume") => {
                let volume = required_i64(&self.payload, "/volume")?;
                let volume_default = required_field(&self.payload, "/volumeDefault")?
                    .as_bool()
                    .ok_or_else(|| ParseError::InvalidValue {
                        field: "payload.volumeDefault".to_string(),
                        message: "expected a boolean".to_string(),
                    })?;
                ControlDirective::AdjustVolume {
                    volume,
                    volume_default,
                }
            }
            ("Alexa.Authorization", "AcceptGrant") => ControlDirective::AcceptGrant,
            _ => ControlDirective::Unrecognized {
                namespace: self.namespace.clone(),
                name: self.name.clone(),
            },
        };

        Ok(control)
    }
}

/// Looks up a required payload field by JSON pointer.
fn required_field<'a>(payload: &'a Value, pointer: &str) -> Result<&'a Value, ParseError> {
    payload.pointer(pointer).ok_or_else(|| {
        ParseError::MissingField(format!("payload.{}", pointer[1..].replace('/', ".")))
    })
}

/// Looks up a required integer payload field by JSON pointer.
fn required_i64(payload: &Value, pointer: &str) -> Result<i64, ParseError> {
    required_field(payload, pointer)?
        .as_i64()
        .ok_or_else(|| ParseError::InvalidValue {
            field: format!("payload.{}", pointer[1..].replace('/', ".")),
            message: "expected an integer".to_string(),
        })
}

/// Typed union of the control directives this bridge understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlDirective {
    /// Turn the endpoint on.
    TurnOn,
    /// Turn the endpoint off.
    TurnOff,
    /// Tune directly to a channel number.
    ChangeChannel {
        /// The target channel number, passed through verbatim.
        number: String,
    },
    /// Skip channels by a signed count.
    SkipChannels {
        /// The signed channel delta.
        count: i64,
    },
    /// Adjust volume by a signed delta.
    AdjustVolume {
        /// The signed volume delta.
        volume: i64,
        /// When set, the platform asks for its default step.
        volume_default: bool,
    },
    /// Authorization grant handshake.
    AcceptGrant,
    /// An unrecognized namespace/name combination. A normal, expected
    /// outcome answered with an error response, not a fault.
    Unrecognized {
        /// The directive namespace.
        namespace: String,
        /// The directive name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v3_request(namespace: &str, name: &str, payload: Value) -> Value {
        json!({
            "directive": {
                "header": {
                    "namespace": namespace,
                    "name": name,
                    "payloadVersion": "3",
                    "correlationToken": "tok1"
                },
                "endpoint": { "endpointId": "endpoint-009" },
                "payload": payload
            }
        })
    }

    #[test]
    fn detect_v3_version() {
        let request = v3_request("Alexa.PowerController", "TurnOn", json!({}));
        assert_eq!(PayloadVersion::detect(&request), Some(PayloadVersion::V3));
    }

    #[test]
    fn detect_legacy_version() {
        let request = json!({
            "header": {
                "namespace": "Alexa.ConnectedHome.Discovery",
                "name": "DiscoverAppliancesRequest",
                "payloadVersion": "2"
            },
            "payload": {}
        });
        assert_eq!(
            PayloadVersion::detect(&request),
            Some(PayloadVersion::Legacy)
        );
    }

    #[test]
    fn detect_missing_version() {
        assert_eq!(PayloadVersion::detect(&json!({})), None);
        assert_eq!(
            PayloadVersion::detect(&json!({"directive": {"header": {}}})),
            None
        );
    }

    #[test]
    fn parse_power_directive() {
        let request = v3_request("Alexa.PowerController", "TurnOn", json!({}));
        let directive = Directive::from_value(&request).unwrap();

        assert_eq!(directive.namespace, "Alexa.PowerController");
        assert_eq!(directive.require_correlation_token().unwrap(), "tok1");
        assert_eq!(directive.require_endpoint_id().unwrap(), "endpoint-009");
        assert_eq!(directive.control().unwrap(), ControlDirective::TurnOn);
    }

    #[test]
    fn parse_change_channel() {
        let request = v3_request(
            "Alexa.ChannelController",
            "ChangeChannel",
            json!({"channel": {"number": "8"}}),
        );
        let directive = Directive::from_value(&request).unwrap();
        assert_eq!(
            directive.control().unwrap(),
            ControlDirective::ChangeChannel {
                number: "8".to_string()
            }
        );
    }

    #[test]
    fn parse_change_channel_missing_number() {
        let request = v3_request("Alexa.ChannelController", "ChangeChannel", json!({}));
        let directive = Directive::from_value(&request).unwrap();
        assert!(matches!(
            directive.control(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn parse_skip_channels() {
        let request = v3_request(
            "Alexa.ChannelController",
            "SkipChannels",
            json!({"channelCount": -3}),
        );
        let directive = Directive::from_value(&request).unwrap();
        assert_eq!(
            directive.control().unwrap(),
            ControlDirective::SkipChannels { count: -3 }
        );
    }

    #[test]
    fn parse_adjust_volume() {
        let request = v3_request(
            "Alexa.Speaker",
            "AdjustVolume",
            json!({"volume": -5, "volumeDefault": false}),
        );
        let directive = Directive::from_value(&request).unwrap();
        assert_eq!(
            directive.control().unwrap(),
            ControlDirective::AdjustVolume {
                volume: -5,
                volume_default: false
            }
        );
    }

    #[test]
    fn unrecognized_pair_is_not_an_error() {
        let request = v3_request("Alexa.Foo", "Bar", json!({}));
        let directive = Directive::from_value(&request).unwrap();
        assert_eq!(
            directive.control().unwrap(),
            ControlDirective::Unrecognized {
                namespace: "Alexa.Foo".to_string(),
                name: "Bar".to_string()
            }
        );
    }

    #[test]
    fn parse_skip_channels_wrong_type() {
        let request = v3_request(
            "Alexa.ChannelController",
            "SkipChannels",
            json!({"channelCount": "three"}),
        );
        let directive = Directive::from_value(&request).unwrap();
        assert!(matches!(
            directive.control(),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn parse_scope_token() {
        let request = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "payloadVersion": "3",
                    "correlationToken": "tok1"
                },
                "endpoint": {
                    "scope": { "type": "BearerToken", "token": "bearer-xyz" },
                    "endpointId": "endpoint-009"
                }
            }
        });
        let directive = Directive::from_value(&request).unwrap();
        assert_eq!(directive.scope_token.as_deref(), Some("bearer-xyz"));
    }

    #[test]
    fn missing_correlation_token() {
        let request = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "payloadVersion": "3"
                },
                "endpoint": { "endpointId": "endpoint-009" }
            }
        });
        let directive = Directive::from_value(&request).unwrap();
        assert!(matches!(
            directive.require_correlation_token(),
            Err(ParseError::MissingField(_))
        ));
    }
}
