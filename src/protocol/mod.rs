// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound protocol for the Nature Remo cloud API.
//!
//! The bridge speaks exactly one outbound protocol: an HTTP POST per button
//! command against the per-deployment TV appliance resource. The
//! [`CommandSender`] trait is the seam between the dispatcher and the wire;
//! [`RemoClient`] is the production implementation.

mod http;

pub use http::{RemoClient, RemoConfig};

use crate::command::ButtonCommand;
use crate::error::ProtocolError;

/// Trait for transports that can deliver a button command to the device
/// cloud.
///
/// Each call delivers exactly one command; multi-command translations call
/// this sequentially. No retry or timeout policy is layered here — the
/// invoking runtime already provides redelivery semantics.
#[allow(async_fn_in_trait)]
pub trait CommandSender {
    /// Sends one button command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or the cloud
    /// API rejects it.
    async fn send(&self, command: &ButtonCommand) -> Result<(), ProtocolError>;
}
