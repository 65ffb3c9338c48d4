// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound button commands and directive translation.
//!
//! The Nature Remo TV endpoint accepts one symbolic button code per HTTP
//! call. This module defines the [`ButtonCommand`] codes and the pure
//! per-namespace translators that turn a control directive into zero, one,
//! or several of them.
//!
//! | Translator | Directive | Commands produced |
//! |-----------|-----------|-------------------|
//! | [`power::translate`] | TurnOn / TurnOff | exactly one `power` toggle |
//! | [`channel::change`] | ChangeChannel N | exactly one `ch-<N>` |
//! | [`channel::skip`] | SkipChannels D | exactly one `ch-up` / `ch-down` |
//! | [`volume::adjust`] | AdjustVolume D | up to 4 `vol-up` / `vol-down` |

pub mod channel;
pub mod power;
pub mod volume;

use std::fmt;

/// One atomic outbound instruction, expressed as a symbolic button code.
///
/// Each command maps to exactly one HTTP call against the cloud API.
///
/// # Examples
///
/// ```
/// use remo_bridge::ButtonCommand;
///
/// assert_eq!(ButtonCommand::Power.code(), "power");
/// assert_eq!(ButtonCommand::VolumeDown.code(), "vol-down");
/// assert_eq!(ButtonCommand::Channel("8".to_string()).code(), "ch-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ButtonCommand {
    /// Power toggle.
    Power,
    /// Next channel.
    ChannelUp,
    /// Previous channel.
    ChannelDown,
    /// Direct channel selection.
    Channel(String),
    /// Volume up one step.
    VolumeUp,
    /// Volume down one step.
    VolumeDown,
}

impl ButtonCommand {
    /// Returns the wire button code for this command.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Power => "power".to_string(),
            Self::ChannelUp => "ch-up".to_string(),
            Self::ChannelDown => "ch-down".to_string(),
            Self::Channel(number) => format!("ch-{number}"),
            Self::VolumeUp => "vol-up".to_string(),
            Self::VolumeDown => "vol-down".to_string(),
        }
    }
}

impl fmt::Display for ButtonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
