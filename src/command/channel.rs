// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel directive translation.

use crate::command::ButtonCommand;

/// Translates a direct channel selection into its outbound command.
///
/// Channel number `N` maps to exactly one `ch-<N>` call; the number is
/// passed through verbatim.
#[must_use]
pub fn change(number: &str) -> ButtonCommand {
    ButtonCommand::Channel(number.to_string())
}

/// Translates a channel skip into its outbound command.
///
/// A positive count maps to `ch-up`, anything else to `ch-down`. Exactly
/// one command is produced regardless of the count's magnitude; unlike
/// volume, skips are not scaled by repeat count.
#[must_use]
pub fn skip(count: i64) -> ButtonCommand {
    if count > 0 {
        ButtonCommand::ChannelUp
    } else {
        ButtonCommand::ChannelDown
    }
}
