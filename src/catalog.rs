// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static device catalog.
//!
//! The catalog is the fixed set of appliances this bridge exposes to the
//! voice platform. Descriptors are defined in the legacy v2 appliance shape
//! and serialize to it verbatim; the v3 discovery path derives endpoint
//! objects from them via the capability mapper.
//!
//! The catalog is immutable after construction and safe to share by
//! reference across requests.

use std::collections::BTreeMap;

use serde::Serialize;

/// Descriptor of one appliance in the static catalog.
///
/// Serializes to the legacy v2 appliance JSON shape (`applianceId`,
/// `manufacturerName`, ...), which is returned as-is by v2 discovery.
///
/// # Examples
///
/// ```
/// use remo_bridge::Catalog;
///
/// let catalog = Catalog::sample();
/// let tv = catalog.find("endpoint-009").unwrap();
/// assert_eq!(tv.model_name, "Smart TV");
/// assert_eq!(tv.friendly_name, "テレビ");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    /// Unique appliance identifier (the v3 endpoint id).
    pub appliance_id: String,
    /// Manufacturer display name.
    pub manufacturer_name: String,
    /// Model name; drives the capability mapping.
    pub model_name: String,
    /// Appliance schema version.
    pub version: String,
    /// Display name, may be non-ASCII.
    pub friendly_name: String,
    /// Display description.
    pub friendly_description: String,
    /// Whether the appliance is reachable.
    pub is_reachable: bool,
    /// Ordered list of supported action names.
    pub actions: Vec<String>,
    /// Free-form detail map, passed through as the discovery cookie.
    pub additional_appliance_details: BTreeMap<String, String>,
}

impl DeviceDescriptor {
    fn new(
        appliance_id: &str,
        model_name: &str,
        friendly_name: &str,
        friendly_description: &str,
        actions: &[&str],
    ) -> Self {
        Self {
            appliance_id: appliance_id.to_string(),
            manufacturer_name: "Sample Manufacturer".to_string(),
            model_name: model_name.to_string(),
            version: "1".to_string(),
            friendly_name: friendly_name.to_string(),
            friendly_description: friendly_description.to_string(),
            is_reachable: true,
            actions: actions.iter().map(ToString::to_string).collect(),
            additional_appliance_details: BTreeMap::new(),
        }
    }
}

/// The read-only appliance catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<DeviceDescriptor>,
}

impl Catalog {
    /// Creates the built-in sample catalog.
    ///
    /// Contains one appliance per supported model, including the TV
    /// endpoint (`endpoint-009`) that the control path targets.
    #[must_use]
    pub fn sample() -> Self {
        let mut switch = DeviceDescriptor::new(
            "endpoint-001",
            "Smart Switch",
            "Switch",
            "001 Switch that can only be turned on/off",
            &["turnOn", "turnOff"],
        );
        switch.additional_appliance_details.insert(
            "detail1".to_string(),
            "For simplicity, this is the only appliance".to_string(),
        );
        switch.additional_appliance_details.insert(
            "detail2".to_string(),
            "that has some values in the additionalApplianceDetails".to_string(),
        );

        let devices = vec![
            switch,
            DeviceDescriptor::new(
                "endpoint-002",
                "Smart Light",
                "Light",
                "002 Light that is dimmable and can change color and color temperature",
                &[
                    "turnOn",
                    "turnOff",
                    "setPercentage",
                    "incrementPercentage",
                    "decrementPercentage",
                    "setColor",
                    "setColorTemperature",
                    "incrementColorTemperature",
                    "decrementColorTemperature",
                ],
            ),
            DeviceDescriptor::new(
                "endpoint-003",
                "Smart White Light",
                "White Light",
                "003 Light that is dimmable and can change color temperature only",
                &[
                    "turnOn",
                    "turnOff",
                    "setPercentage",
                    "incrementPercentage",
                    "decrementPercentage",
                    "setColorTemperature",
                    "incrementColorTemperature",
                    "decrementColorTemperature",
                ],
            ),
            DeviceDescriptor::new(
                "endpoint-004",
                "Smart Thermostat",
                "Thermostat",
                "004 Thermostat that can change and query temperatures",
                &[
                    "setTargetTemperature",
                    "incrementTargetTemperature",
                    "decrementTargetTemperature",
                    "getTargetTemperature",
                    "getTemperatureReading",
                ],
            ),
            DeviceDescriptor::new(
                "endpoint-004-1",
                "Smart Thermostat Dual",
                "Living Room Thermostat",
                "004-1 Thermostat that can change and query temperatures, supports dual setpoints",
                &[
                    "setTargetTemperature",
                    "incrementTargetTemperature",
                    "decrementTargetTemperature",
                    "getTargetTemperature",
                    "getTemperatureReading",
                ],
            ),
            DeviceDescriptor::new(
                "endpoint-005",
                "Smart Lock",
                "Lock",
                "005 Lock that can be locked and can query lock state",
                &["setLockState", "getLockState"],
            ),
            DeviceDescriptor::new(
                "endpoint-006",
                "Smart Scene",
                "Good Night Scene",
                "006 Scene that can only be turned on",
                &["turnOn"],
            ),
            DeviceDescriptor::new(
                "endpoint-007",
                "Smart Activity",
                "Watch TV",
                "007 Activity that runs sequentially that can be turned on and off",
                &["turnOn", "turnOff"],
            ),
            DeviceDescriptor::new(
                "endpoint-008",
                "Smart Camera",
                "Baby Camera",
                "008 Camera that streams from an RSTP source",
                &["retrieveCameraStreamUri"],
            ),
            DeviceDescriptor::new(
                "endpoint-009",
                "Smart TV",
                "テレビ",
                "009 TV that can be turned on/off and ajust volume up/down and change channel",
                &[
                    "AdjustVolume",
                    "turnOn",
                    "turnOff",
                    "ChangeChannel",
                    "SkipChannels",
                ],
            ),
        ];

        Self { devices }
    }

    /// Returns all catalog entries in declaration order.
    #[must_use]
    pub fn devices(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    /// Looks up a descriptor by appliance/endpoint id.
    #[must_use]
    pub fn find(&self, appliance_id: &str) -> Option<&DeviceDescriptor> {
        self.devices
            .iter()
            .find(|device| device.appliance_id == appliance_id)
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_size() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::sample();
        let tv = catalog.find("endpoint-009").unwrap();
        assert_eq!(tv.model_name, "Smart TV");
        assert!(tv.is_reachable);
        assert!(catalog.find("endpoint-999").is_none());
    }

    #[test]
    fn tv_actions_ordered() {
        let catalog = Catalog::sample();
        let tv = catalog.find("endpoint-009").unwrap();
        assert_eq!(
            tv.actions,
            vec![
                "AdjustVolume",
                "turnOn",
                "turnOff",
                "ChangeChannel",
                "SkipChannels"
            ]
        );
    }

    #[test]
    fn descriptor_serializes_to_v2_shape() {
        let catalog = Catalog::sample();
        let switch = catalog.find("endpoint-001").unwrap();
        let json = serde_json::to_value(switch).unwrap();

        assert_eq!(json["applianceId"], "endpoint-001");
        assert_eq!(json["manufacturerName"], "Sample Manufacturer");
        assert_eq!(json["modelName"], "Smart Switch");
        assert_eq!(json["isReachable"], true);
        assert_eq!(
            json["additionalApplianceDetails"]["detail1"],
            "For simplicity, this is the only appliance"
        );
    }

    #[test]
    fn non_ascii_friendly_name() {
        let catalog = Catalog::sample();
        let tv = catalog.find("endpoint-009").unwrap();
        assert_eq!(tv.friendly_name, "テレビ");
    }
}
