// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Setting key names.
//!
//! These strings are the on-disk contract with data persisted by earlier
//! releases of the game; they must never change.

/// Player name base key; the stored key is this plus the player index.
pub const PLAYER_NAME: &str = "playername_setting";
/// Number of players in the last match.
pub const PLAYER_COUNT: &str = "playernum_setting";
/// Player save-string base key; the stored key is this plus the player index.
pub const PLAYER_SAVE: &str = "playersave_setting";
/// Sound effects toggle.
pub const SOUND: &str = "sound_setting";
/// Dice roll animation toggle.
pub const ANIMATION: &str = "animation_setting";
/// Sort rolled dice toggle.
pub const SORTING: &str = "sorting_setting";
/// Haptic feedback toggle.
pub const VIBRATION: &str = "vibration_setting";
/// Dice style name.
pub const STYLE: &str = "style_setting";
/// `true` when the table background is an image, `false` for a solid color.
pub const BACKGROUND_TYPE: &str = "backgroundtype_setting";
/// Packed solid background color.
pub const BACKGROUND_SOLID_COLOR: &str = "background_solidcolor_setting";
/// Packed text color drawn over the background.
pub const BACKGROUND_TEXT_COLOR: &str = "background_textcolor_setting";
/// Background image identifier.
pub const BACKGROUND_IMAGE: &str = "background_image_setting";
/// Version string of the last build that ran.
pub const LAST_VERSION_RUN: &str = "lastversionrun_setting";
/// Saved chronometer value.
pub const CHRONO: &str = "chrono_setting";

/// Every key that is not scoped to a player.
pub const ALL_SCALAR_KEYS: [&str; 12] = [
    PLAYER_COUNT,
    SOUND,
    ANIMATION,
    SORTING,
    VIBRATION,
    STYLE,
    BACKGROUND_TYPE,
    BACKGROUND_SOLID_COLOR,
    BACKGROUND_TEXT_COLOR,
    BACKGROUND_IMAGE,
    LAST_VERSION_RUN,
    CHRONO,
];

/// Key holding the name of player `index`. The index is not range-checked.
pub fn player_name_key(index: i32) -> String {
    format!("{PLAYER_NAME}{index}")
}

/// Key holding the save string of player `index`. The index is not range-checked.
pub fn player_save_key(index: i32) -> String {
    format!("{PLAYER_SAVE}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_keys_append_decimal_index() {
        assert_eq!(player_name_key(0), "playername_setting0");
        assert_eq!(player_save_key(5), "playersave_setting5");
        assert_eq!(player_name_key(12), "playername_setting12");
        assert_eq!(player_save_key(-1), "playersave_setting-1");
    }

    #[test]
    fn scalar_keys_are_unique() {
        let mut keys = ALL_SCALAR_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL_SCALAR_KEYS.len());
    }
}
