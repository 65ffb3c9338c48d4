// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `remo-bridge` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: directive parsing, dispatch routing, and outbound protocol
//! communication.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur while handling
/// a directive.
#[derive(Debug, Error)]
pub enum Error {
    /// The request carried no recognizable payload version.
    ///
    /// Neither the v3 `directive.header.payloadVersion` field nor the legacy
    /// v2 `header.payloadVersion` field was present. This is a fault and is
    /// returned to the invoking runtime rather than answered on the wire.
    #[error("request has no recognizable payload version")]
    UnsupportedVersion,

    /// A recognized protocol version carried an unknown namespace/name pair
    /// on a path that has no error-response envelope to recover into.
    ///
    /// On the v3 control path this condition is answered with a structured
    /// `ErrorResponse` instead; this variant only surfaces for legacy v2
    /// requests.
    #[error("unsupported directive: {namespace}::{name}")]
    InvalidDirective {
        /// The directive namespace.
        namespace: String,
        /// The directive name.
        name: String,
    },

    /// Error occurred while parsing an inbound request.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during outbound protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(ParseError::Json(err))
    }
}

/// Errors related to parsing inbound directive JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the request.
    #[error("missing field in request: {0}")]
    MissingField(String),

    /// A field was present but held an unusable value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to the outbound Nature Remo HTTP call.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication with the cloud API failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The cloud API answered with a non-success status.
    #[error("command rejected with HTTP {status}")]
    Rejected {
        /// The HTTP status code returned by the cloud API.
        status: u16,
    },

    /// Invalid base URL configuration.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_display() {
        let err = Error::UnsupportedVersion;
        assert_eq!(
            err.to_string(),
            "request has no recognizable payload version"
        );
    }

    #[test]
    fn invalid_directive_display() {
        let err = Error::InvalidDirective {
            namespace: "Alexa.Foo".to_string(),
            name: "Bar".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported directive: Alexa.Foo::Bar");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("endpointId".to_string());
        assert_eq!(err.to_string(), "missing field in request: endpointId");
    }

    #[test]
    fn error_from_parse_error() {
        let parse_err = ParseError::MissingField("channelCount".to_string());
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::Rejected { status: 500 };
        assert_eq!(err.to_string(), "command rejected with HTTP 500");
    }
}
