// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! v3 discovery response construction.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::capabilities::{Capability, DisplayCategory, capabilities, display_categories};
use crate::catalog::{Catalog, DeviceDescriptor};
use crate::response::event::{Event, EventEnvelope, Header};

/// One endpoint object in a v3 discovery response.
///
/// Derived from a catalog descriptor via the capability mapper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredEndpoint {
    /// The endpoint id (the catalog appliance id).
    pub endpoint_id: String,
    /// Manufacturer display name.
    pub manufacturer_name: String,
    /// Display name.
    pub friendly_name: String,
    /// Display description.
    pub description: String,
    /// Display categories derived from the model name.
    pub display_categories: Vec<DisplayCategory>,
    /// Opaque detail map carried through from the catalog.
    pub cookie: BTreeMap<String, String>,
    /// Declared capability interfaces.
    pub capabilities: Vec<Capability>,
}

impl From<&DeviceDescriptor> for DiscoveredEndpoint {
    fn from(device: &DeviceDescriptor) -> Self {
        Self {
            endpoint_id: device.appliance_id.clone(),
            manufacturer_name: device.manufacturer_name.clone(),
            friendly_name: device.friendly_name.clone(),
            description: device.friendly_description.clone(),
            display_categories: display_categories(&device.model_name),
            cookie: device.additional_appliance_details.clone(),
            capabilities: capabilities(&device.model_name),
        }
    }
}

/// Builds the v3 discovery response for the whole catalog.
#[must_use]
pub fn discovery_response(catalog: &Catalog) -> EventEnvelope {
    let endpoints: Vec<DiscoveredEndpoint> = catalog
        .devices()
        .iter()
        .map(DiscoveredEndpoint::from)
        .collect();

    EventEnvelope {
        context: None,
        event: Event {
            header: Header::v3("Alexa.Discovery", "Discover.Response"),
            endpoint: None,
            payload: json!({ "endpoints": endpoints }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_endpoint_per_catalog_entry() {
        let catalog = Catalog::sample();
        let value = serde_json::to_value(discovery_response(&catalog)).unwrap();

        assert_eq!(value["event"]["header"]["namespace"], "Alexa.Discovery");
        assert_eq!(value["event"]["header"]["name"], "Discover.Response");
        assert_eq!(
            value["event"]["payload"]["endpoints"]
                .as_array()
                .unwrap()
                .len(),
            catalog.len()
        );
    }

    #[test]
    fn tv_endpoint_shape() {
        let catalog = Catalog::sample();
        let tv = DiscoveredEndpoint::from(catalog.find("endpoint-009").unwrap());
        let value = serde_json::to_value(&tv).unwrap();

        assert_eq!(value["endpointId"], "endpoint-009");
        assert_eq!(value["friendlyName"], "テレビ");
        assert_eq!(value["displayCategories"], json!(["OTHER"]));

        let interfaces: Vec<&str> = value["capabilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["interface"].as_str().unwrap())
            .collect();
        assert!(interfaces.contains(&"Alexa.ChannelController"));
        assert_eq!(interfaces.last(), Some(&"Alexa"));
    }

    #[test]
    fn cookie_carries_details() {
        let catalog = Catalog::sample();
        let switch = DiscoveredEndpoint::from(catalog.find("endpoint-001").unwrap());
        let value = serde_json::to_value(&switch).unwrap();
        assert_eq!(
            value["cookie"]["detail1"],
            "For simplicity, this is the only appliance"
        );
    }
}
