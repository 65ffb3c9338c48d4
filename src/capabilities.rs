// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability and display-category mapping.
//!
//! This module maps a catalog model name to the protocol capability
//! descriptors and display categories advertised during discovery. Both
//! mappers are pure, total functions over model names: unknown models fall
//! back to a minimal power-control capability and the `OTHER` category, and
//! every capability list ends with the endpoint-health capability followed
//! by the base `Alexa` interface marker.

use serde::Serialize;

/// Display category tag advertised for an endpoint.
///
/// Serialized values are fixed protocol vocabulary.
///
/// # Examples
///
/// ```
/// use remo_bridge::DisplayCategory;
///
/// assert_eq!(DisplayCategory::SceneTrigger.as_str(), "SCENE_TRIGGER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    /// Wall switch or plug.
    Switch,
    /// Light fixture or bulb.
    Light,
    /// Thermostat.
    Thermostat,
    /// Smart lock.
    Smartlock,
    /// Scene trigger.
    SceneTrigger,
    /// Activity trigger.
    ActivityTrigger,
    /// Camera.
    Camera,
    /// Anything without a more specific category.
    Other,
}

impl DisplayCategory {
    /// Returns the wire string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Switch => "SWITCH",
            Self::Light => "LIGHT",
            Self::Thermostat => "THERMOSTAT",
            Self::Smartlock => "SMARTLOCK",
            Self::SceneTrigger => "SCENE_TRIGGER",
            Self::ActivityTrigger => "ACTIVITY_TRIGGER",
            Self::Camera => "CAMERA",
            Self::Other => "OTHER",
        }
    }
}

/// One property name supported by a capability interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedProperty {
    /// The property name, e.g. `powerState`.
    pub name: String,
}

/// Property block of a capability interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProperties {
    /// Properties the interface supports.
    pub supported: Vec<SupportedProperty>,
    /// Whether state changes are proactively reported.
    pub proactively_reported: bool,
    /// Whether state can be queried.
    pub retrievable: bool,
}

/// One camera stream configuration advertised by a camera endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraStreamConfiguration {
    /// Stream protocols, e.g. `RTSP`.
    pub protocols: Vec<String>,
    /// Supported stream resolutions.
    pub resolutions: Vec<Resolution>,
    /// Authorization types, e.g. `NONE`.
    pub authorization_types: Vec<String>,
    /// Video codecs, e.g. `H264`.
    pub video_codecs: Vec<String>,
    /// Audio codecs, e.g. `AAC`.
    pub audio_codecs: Vec<String>,
}

/// Stream resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A declared protocol interface exposed by an endpoint.
///
/// Serializes to the `AlexaInterface` capability object; optional blocks
/// are omitted when absent, matching the consuming protocol's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    /// Capability type; always `AlexaInterface`.
    #[serde(rename = "type")]
    pub capability_type: String,
    /// Interface name, e.g. `Alexa.PowerController`.
    pub interface: String,
    /// Interface version.
    pub version: String,
    /// Property block for stateful interfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<CapabilityProperties>,
    /// Scene interfaces: whether deactivation is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_deactivation: Option<bool>,
    /// Scene interfaces: top-level proactive reporting flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proactively_reported: Option<bool>,
    /// Camera interfaces: stream configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_stream_configurations: Option<Vec<CameraStreamConfiguration>>,
}

impl Capability {
    /// Creates a stateful interface capability with the given supported
    /// property names, proactively reported and retrievable.
    #[must_use]
    pub fn stateful(interface: &str, properties: &[&str]) -> Self {
        Self {
            capability_type: "AlexaInterface".to_string(),
            interface: interface.to_string(),
            version: "3".to_string(),
            properties: Some(CapabilityProperties {
                supported: properties
                    .iter()
                    .map(|name| SupportedProperty {
                        name: (*name).to_string(),
                    })
                    .collect(),
                proactively_reported: true,
                retrievable: true,
            }),
            supports_deactivation: None,
            proactively_reported: None,
            camera_stream_configurations: None,
        }
    }

    /// Creates a scene-controller capability.
    #[must_use]
    pub fn scene(supports_deactivation: bool) -> Self {
        Self {
            capability_type: "AlexaInterface".to_string(),
            interface: "Alexa.SceneController".to_string(),
            version: "3".to_string(),
            properties: None,
            supports_deactivation: Some(supports_deactivation),
            proactively_reported: Some(true),
            camera_stream_configurations: None,
        }
    }

    /// Creates a camera-stream-controller capability with the default
    /// 720p RTSP configuration.
    #[must_use]
    pub fn camera() -> Self {
        Self {
            capability_type: "AlexaInterface".to_string(),
            interface: "Alexa.CameraStreamController".to_string(),
            version: "3".to_string(),
            properties: None,
            supports_deactivation: None,
            proactively_reported: None,
            camera_stream_configurations: Some(vec![CameraStreamConfiguration {
                protocols: vec!["RTSP".to_string()],
                resolutions: vec![Resolution {
                    width: 1280,
                    height: 720,
                }],
                authorization_types: vec!["NONE".to_string()],
                video_codecs: vec!["H264".to_string()],
                audio_codecs: vec!["AAC".to_string()],
            }]),
        }
    }

    /// Creates the endpoint-health capability appended to every endpoint.
    #[must_use]
    pub fn endpoint_health() -> Self {
        Self::stateful("Alexa.EndpointHealth", &["connectivity"])
    }

    /// Creates the base `Alexa` interface marker appended to every endpoint.
    #[must_use]
    pub fn base_interface() -> Self {
        Self {
            capability_type: "AlexaInterface".to_string(),
            interface: "Alexa".to_string(),
            version: "3".to_string(),
            properties: None,
            supports_deactivation: None,
            proactively_reported: None,
            camera_stream_configurations: None,
        }
    }
}

/// Model names the mappers recognize; anything else takes the fallback arm.
pub const KNOWN_MODELS: [&str; 10] = [
    "Smart Switch",
    "Smart Light",
    "Smart White Light",
    "Smart Thermostat",
    "Smart Thermostat Dual",
    "Smart Lock",
    "Smart Scene",
    "Smart Activity",
    "Smart Camera",
    "Smart TV",
];

/// Maps a model name to its display categories.
///
/// Total over all inputs; unknown models map to `[OTHER]`.
#[must_use]
pub fn display_categories(model_name: &str) -> Vec<DisplayCategory> {
    match model_name {
        "Smart Switch" => vec![DisplayCategory::Switch],
        "Smart Light" | "Smart White Light" => vec![DisplayCategory::Light],
        "Smart Thermostat" | "Smart Thermostat Dual" => vec![DisplayCategory::Thermostat],
        "Smart Lock" => vec![DisplayCategory::Smartlock],
        "Smart Scene" => vec![DisplayCategory::SceneTrigger],
        "Smart Activity" => vec![DisplayCategory::ActivityTrigger],
        "Smart Camera" => vec![DisplayCategory::Camera],
        _ => vec![DisplayCategory::Other],
    }
}

/// Maps a model name to its declared capability interfaces.
///
/// Total over all inputs; unknown models get a single power-controller
/// capability. The endpoint-health and base interface capabilities are
/// always appended last, in that order.
#[must_use]
pub fn capabilities(model_name: &str) -> Vec<Capability> {
    let mut capabilities = match model_name {
        "Smart Switch" => vec![Capability::stateful("Alexa.PowerController", &["powerState"])],
        "Smart Light" => vec![
            Capability::stateful("Alexa.PowerController", &["powerState"]),
            Capability::stateful("Alexa.ColorController", &["color"]),
            Capability::stateful(
                "Alexa.ColorTemperatureController",
                &["colorTemperatureInKelvin"],
            ),
            Capability::stateful("Alexa.BrightnessController", &["brightness"]),
            Capability::stateful("Alexa.PowerLevelController", &["powerLevel"]),
            Capability::stateful("Alexa.PercentageController", &["percentage"]),
        ],
        "Smart White Light" => vec![
            Capability::stateful("Alexa.PowerController", &["powerState"]),
            Capability::stateful(
                "Alexa.ColorTemperatureController",
                &["colorTemperatureInKelvin"],
            ),
            Capability::stateful("Alexa.BrightnessController", &["brightness"]),
            Capability::stateful("Alexa.PowerLevelController", &["powerLevel"]),
            Capability::stateful("Alexa.PercentageController", &["percentage"]),
        ],
        "Smart Thermostat" => vec![
            Capability::stateful(
                "Alexa.ThermostatController",
                &["targetSetpoint", "thermostatMode"],
            ),
            Capability::stateful("Alexa.TemperatureSensor", &["temperature"]),
        ],
        "Smart Thermostat Dual" => vec![
            Capability::stateful(
                "Alexa.ThermostatController",
                &["upperSetpoint", "lowerSetpoint", "thermostatMode"],
            ),
            Capability::stateful("Alexa.TemperatureSensor", &["temperature"]),
        ],
        "Smart Lock" => vec![Capability::stateful("Alexa.LockController", &["lockState"])],
        "Smart Scene" => vec![Capability::scene(false)],
        "Smart Activity" => vec![Capability::scene(true)],
        "Smart Camera" => vec![Capability::camera()],
        "Smart TV" => vec![
            Capability::stateful("Alexa.Speaker", &["AdjustVolume"]),
            Capability::stateful("Alexa.PowerController", &["powerState"]),
            Capability::stateful("Alexa.ChannelController", &["channel", "channelCount"]),
        ],
        _ => vec![Capability::stateful("Alexa.PowerController", &["powerState"])],
    };

    capabilities.push(Capability::endpoint_health());
    capabilities.push(Capability::base_interface());
    capabilities
}
