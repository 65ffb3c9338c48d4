// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound response envelopes.
//!
//! Typed serializers for everything the bridge puts on the wire back to the
//! voice platform: v3 `event`/`context` envelopes, v3 discovery payloads,
//! and the legacy v2 `header`/`payload` shape. Field names and nesting are
//! fixed protocol vocabulary.

mod discovery;
mod event;
mod legacy;

pub use discovery::{DiscoveredEndpoint, discovery_response};
pub use event::{
    Context, ContextProperty, ErrorKind, Event, EventEndpoint, EventEnvelope, Header, Scope,
    accept_grant_response, control_response, error_response,
};
pub use legacy::{LegacyHeader, LegacyResponse};

use chrono::Utc;

/// Formats the current UTC time in the platform's sample-time format.
pub(crate) fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S.00Z").to_string()
}
