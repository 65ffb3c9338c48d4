// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power directive translation.

use std::fmt;

use crate::command::ButtonCommand;

/// The power state reported back to the voice platform.
///
/// This is the intent taken from the directive, not verified device state;
/// the layer is optimistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Power on.
    On,
    /// Power off.
    Off,
}

impl PowerState {
    /// Returns the wire string for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Translates a power directive into its outbound command.
///
/// TurnOn and TurnOff both map to the single `power` toggle; the downstream
/// device only exposes a toggle button, so the distinction affects only the
/// reported [`PowerState`]. Known limitation: without device feedback this
/// layer cannot guarantee idempotent on/off semantics.
#[must_use]
pub fn translate(state: PowerState) -> ButtonCommand {
    let _ = state;
    ButtonCommand::Power
}
