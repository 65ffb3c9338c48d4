// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume directive translation.

use crate::command::ButtonCommand;

/// Number of steps sent when the platform asks for its default delta.
pub const DEFAULT_STEPS: usize = 2;

/// Maximum number of steps sent for an explicit delta.
pub const MAX_STEPS: usize = 4;

/// Translates a volume adjustment into its outbound commands.
///
/// The sign of `volume` selects the direction (`vol-up` for zero and
/// positive deltas, `vol-down` for negative). When `volume_default` is set
/// the magnitude is ignored and exactly [`DEFAULT_STEPS`] commands are
/// produced; otherwise `min(|volume|, MAX_STEPS)` commands are produced,
/// so a zero delta with the flag unset produces none.
///
/// # Examples
///
/// ```
/// use remo_bridge::command::volume;
///
/// assert_eq!(volume::adjust(-7, false).len(), 4);
/// assert_eq!(volume::adjust(-7, true).len(), 2);
/// assert!(volume::adjust(0, false).is_empty());
/// ```
#[must_use]
pub fn adjust(volume: i64, volume_default: bool) -> Vec<ButtonCommand> {
    let command = if volume < 0 {
        ButtonCommand::VolumeDown
    } else {
        ButtonCommand::VolumeUp
    };

    let magnitude = usize::try_from(volume.unsigned_abs()).unwrap_or(usize::MAX);
    let steps = if volume_default {
        DEFAULT_STEPS
    } else {
        magnitude.min(MAX_STEPS)
    };

    std::iter::repeat_n(command, steps).collect()
}
