// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Legacy v2 response construction.
//!
//! The v2 path is retained only because both epochs of clients must be
//! served during the protocol migration.

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::catalog::Catalog;

/// A legacy v2 response header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyHeader {
    /// Response namespace.
    pub namespace: String,
    /// Response name.
    pub name: String,
    /// Always `"2"` on this path.
    pub payload_version: String,
    /// Fresh unique message id.
    pub message_id: Uuid,
}

impl LegacyHeader {
    fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            payload_version: "2".to_string(),
            message_id: Uuid::new_v4(),
        }
    }
}

/// A complete legacy v2 response.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyResponse {
    /// Response header.
    pub header: LegacyHeader,
    /// Response payload.
    pub payload: Value,
}

impl LegacyResponse {
    /// Builds the v2 discovery response listing the raw catalog.
    #[must_use]
    pub fn discovery(catalog: &Catalog) -> Self {
        Self {
            header: LegacyHeader::new(
                "Alexa.ConnectedHome.Discovery",
                "DiscoverAppliancesResponse",
            ),
            payload: json!({ "discoveredAppliances": catalog.devices() }),
        }
    }

    /// Builds a v2 control confirmation with an empty payload.
    ///
    /// v2 control requests are acknowledged without an outbound device
    /// command, preserving the legacy behavior.
    #[must_use]
    pub fn confirmation(name: &str) -> Self {
        Self {
            header: LegacyHeader::new("Alexa.ConnectedHome.Control", name),
            payload: json!({}),
        }
    }
}
