// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directive dispatch.
//!
//! [`DirectiveHandler`] is the entry point of the bridge: it detects the
//! wire version of a raw request, routes it to the discovery or control
//! path, drives the command translation and outbound sends, and builds the
//! reply envelope.
//!
//! One logical thread of control per request; the handler holds no mutable
//! state and can be shared freely.

use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::Catalog;
use crate::command::{ButtonCommand, channel, power, power::PowerState, volume};
use crate::directive::{ControlDirective, Directive, PayloadVersion};
use crate::error::{Error, ParseError, Result};
use crate::protocol::CommandSender;
use crate::response::{
    ContextProperty, ErrorKind, EventEnvelope, LegacyResponse, accept_grant_response,
    control_response, discovery_response, error_response,
};

/// Message returned with `INVALID_DIRECTIVE` errors.
const INVALID_DIRECTIVE_MESSAGE: &str = "サポートされていないコマンドです";

/// Message returned with `ENDPOINT_UNREACHABLE` errors.
const ENDPOINT_UNREACHABLE_MESSAGE: &str = "could not reach the device cloud";

/// A reply to an inbound request, in either wire version.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// A v3 `event`/`context` envelope.
    V3(EventEnvelope),
    /// A legacy v2 `header`/`payload` envelope.
    Legacy(LegacyResponse),
}

/// Routes inbound directives and builds replies.
///
/// # Examples
///
/// ```no_run
/// use remo_bridge::{Catalog, DirectiveHandler, RemoConfig};
///
/// # async fn example() -> remo_bridge::Result<()> {
/// let sender = RemoConfig::new("remo-access-token", "appliance-id").into_client()?;
/// let handler = DirectiveHandler::new(Catalog::sample(), sender);
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
/// let reply = handler.handle(&request).await?;
/// let _json = serde_json::to_value(&reply)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DirectiveHandler<S> {
    catalog: Catalog,
    sender: S,
}

impl<S: CommandSender> DirectiveHandler<S> {
    /// Creates a handler over the given catalog and sender.
    #[must_use]
    pub fn new(catalog: Catalog, sender: S) -> Self {
        Self { catalog, sender }
    }

    /// Returns the catalog this handler serves.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handles one raw inbound request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVersion`] when the request declares no
    /// payload version, [`Error::Parse`] when a recognized directive is
    /// malformed, and [`Error::InvalidDirective`] for unknown legacy
    /// control names. Unknown v3 namespace/name pairs and downstream send
    /// failures are answered with error replies, not errors.
    pub async fn handle(&self, request: &Value) -> Result<Reply> {
        let Some(version) = PayloadVersion::detect(request) else {
            tracing::warn!("request carries no payload version");
            return Err(Error::UnsupportedVersion);
        };

        match version {
            PayloadVersion::V3 => self.handle_v3(request).await,
            PayloadVersion::Legacy => self.handle_legacy(request),
        }
    }

    async fn handle_v3(&self, request: &Value) -> Result<Reply> {
        let directive = Directive::from_value(request).map_err(Error::Parse)?;

        tracing::info!(
            namespace = %directive.namespace,
            name = %directive.name,
            "handling v3 directive"
        );

        if directive.name == "Discover" {
            return Ok(Reply::V3(discovery_response(&self.catalog)));
        }

        self.handle_control(&directive).await
    }

    async fn handle_control(&self, directive: &Directive) -> Result<Reply> {
        let control = directive.control().map_err(Error::Parse)?;

        let envelope = match control {
            ControlDirective::TurnOn => self.answer_power(directive, PowerState::On).await?,
            ControlDirective::TurnOff => self.answer_power(directive, PowerState::Off).await?,
            ControlDirective::ChangeChannel { number } => {
                let command = channel::change(&number);
                self.answer_control(
                    directive,
                    &[command],
                    vec![ContextProperty::channel(&number)],
                    json!({}),
                )
                .await?
            }
            ControlDirective::SkipChannels { count } => {
                let command = channel::skip(count);
                self.answer_control(
                    directive,
                    &[command],
                    vec![ContextProperty::channel_count(count)],
                    json!({}),
                )
                .await?
            }
            ControlDirective::AdjustVolume {
                volume,
                volume_default,
            } => {
                let commands = volume::adjust(volume, volume_default);
                // The event payload names the button even when the delta
                // rounds to zero sends.
                let direction = if volume < 0 {
                    ButtonCommand::VolumeDown
                } else {
                    ButtonCommand::VolumeUp
                };
                self.answer_control(
                    directive,
                    &commands,
                    vec![ContextProperty::volume(volume), ContextProperty::muted()],
                    json!({ "button": direction.code() }),
                )
                .await?
            }
            ControlDirective::AcceptGrant => accept_grant_response(),
            ControlDirective::Unrecognized { namespace, name } => {
                tracing::warn!(%namespace, %name, "unrecognized directive");
                let endpoint_id = directive.require_endpoint_id().map_err(Error::Parse)?;
                error_response(
                    endpoint_id,
                    ErrorKind::InvalidDirective,
                    INVALID_DIRECTIVE_MESSAGE,
                )
            }
        };

        Ok(Reply::V3(envelope))
    }

    async fn answer_power(
        &self,
        directive: &Directive,
        state: PowerState,
    ) -> Result<EventEnvelope> {
        let command = power::translate(state);
        self.answer_control(
            directive,
            &[command],
            vec![ContextProperty::power_state(state)],
            json!({}),
        )
        .await
    }

    /// Sends the translated commands sequentially, then builds the success
    /// response; a downstream failure becomes an `ENDPOINT_UNREACHABLE`
    /// reply so the caller still gets a protocol-compliant answer.
    async fn answer_control(
        &self,
        directive: &Directive,
        commands: &[ButtonCommand],
        properties: Vec<ContextProperty>,
        payload: Value,
    ) -> Result<EventEnvelope> {
        let endpoint_id = directive.require_endpoint_id().map_err(Error::Parse)?;
        let correlation_token = directive.require_correlation_token().map_err(Error::Parse)?;

        for command in commands {
            if let Err(err) = self.sender.send(command).await {
                tracing::warn!(button = %command, error = %err, "downstream command failed");
                return Ok(error_response(
                    endpoint_id,
                    ErrorKind::EndpointUnreachable,
                    ENDPOINT_UNREACHABLE_MESSAGE,
                ));
            }
        }

        Ok(control_response(
            endpoint_id,
            correlation_token,
            directive.scope_token.as_deref(),
            properties,
            payload,
        ))
    }

    fn handle_legacy(&self, request: &Value) -> Result<Reply> {
        let namespace = request
            .pointer("/header/namespace")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::MissingField("header.namespace".to_string()))
            .map_err(Error::Parse)?;

        tracing::info!(%namespace, "handling legacy directive");

        if namespace == "Alexa.ConnectedHome.Discovery" {
            return Ok(Reply::Legacy(LegacyResponse::discovery(&self.catalog)));
        }

        let name = request
            .pointer("/header/name")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::MissingField("header.name".to_string()))
            .map_err(Error::Parse)?;

        match name {
            "TurnOnRequest" => Ok(Reply::Legacy(LegacyResponse::confirmation(
                "TurnOnConfirmation",
            ))),
            "TurnOffRequest" => Ok(Reply::Legacy(LegacyResponse::confirmation(
                "TurnOffConfirmation",
            ))),
            _ => Err(Error::InvalidDirective {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
        }
    }
}
