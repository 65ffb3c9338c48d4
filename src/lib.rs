// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `remo-bridge` - Alexa Smart Home directives to Nature Remo TV control.
//!
//! This library receives Alexa Smart Home directive requests (wire versions
//! v2 and v3), translates each control directive into discrete button
//! commands against the Nature Remo cloud API, and builds the
//! protocol-compliant acknowledgement or discovery response.
//!
//! # Supported Directives
//!
//! - **Power**: `TurnOn` / `TurnOff` (single toggle downstream)
//! - **Volume**: `AdjustVolume` with platform-default or explicit delta,
//!   clamped to 4 steps
//! - **Channel**: `ChangeChannel` (direct number) and `SkipChannels`
//!   (up/down)
//! - **Discovery**: v3 `Discover` and legacy v2 appliance discovery
//!
//! # Quick Start
//!
//! ```no_run
//! use remo_bridge::{Catalog, DirectiveHandler, RemoConfig};
//!
//! #[tokio::main]
//! async fn main() -> remo_bridge::Result<()> {
//!     // Deployment-time configuration; never hard-code these.
//!     let sender = RemoConfig::new(
//!         std::env::var("REMO_ACCESS_TOKEN").unwrap_or_default(),
//!         std::env::var("REMO_APPLIANCE_ID").unwrap_or_default(),
//!     )
//!     .into_client()?;
//!
//!     let handler = DirectiveHandler::new(Catalog::sample(), sender);
//!
//!     let request = serde_json::json!({
//!         "directive": {
//!             "header": {
//!                 "namespace": "Alexa.PowerController",
//!                 "name": "TurnOn",
//!                 "payloadVersion": "3",
//!                 "correlationToken": "tok1"
//!             },
//!             "endpoint": { "endpointId": "endpoint-009" }
//!         }
//!     });
//!
//!     let reply = handler.handle(&request).await?;
//!     println!("{}", serde_json::to_string_pretty(&reply)?);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Unknown v3 namespace/name pairs and downstream send failures are
//! answered on the wire with `INVALID_DIRECTIVE` and `ENDPOINT_UNREACHABLE`
//! error responses. Requests with no recognizable payload version and
//! malformed recognized directives surface as [`Error`] faults to the
//! invoking runtime, which owns redelivery.

pub mod capabilities;
mod catalog;
pub mod command;
pub mod directive;
mod dispatch;
pub mod error;
pub mod protocol;
pub mod response;

pub use capabilities::{Capability, DisplayCategory, capabilities, display_categories};
pub use catalog::{Catalog, DeviceDescriptor};
pub use command::{ButtonCommand, power::PowerState};
pub use directive::{ControlDirective, Directive, PayloadVersion};
pub use dispatch::{DirectiveHandler, Reply};
pub use error::{Error, ParseError, ProtocolError, Result};
pub use protocol::{CommandSender, RemoClient, RemoConfig};
pub use response::{ContextProperty, ErrorKind, EventEnvelope, LegacyResponse};
