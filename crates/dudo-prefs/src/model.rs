// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Domain types returned by the settings accessor, plus their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dice style used until the player picks one.
pub const DEFAULT_DICE_STYLE: &str = "CLASSIC";
/// Player count used until a match has been configured.
pub const DEFAULT_PLAYER_COUNT: i32 = 2;
/// Save string of a player who never saved.
pub const DEFAULT_SAVE: &str = "00000";
/// Version reported before any build recorded itself.
pub const DEFAULT_LAST_VERSION: &str = "0";
/// Chronometer value before anything was saved.
pub const DEFAULT_CHRONO: i64 = 0;
/// Image shown when the background is an image but none was chosen.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "GREENCARPET";
/// Highest number of seats at the table.
pub const MAX_PLAYERS: i32 = 6;

/// Name and save string of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Display name.
    pub name: String,
    /// Serialized score/history blob.
    pub save: String,
}

impl PlayerInfo {
    /// Build a player record.
    pub fn new(name: impl Into<String>, save: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            save: save.into(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialized score/history blob.
    pub fn save(&self) -> &str {
        &self.save
    }
}

/// Packed 0xAARRGGBB color.
///
/// Persisted as a signed 32-bit integer, so opaque colors are negative on
/// disk (black is `-16777216`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Fully transparent (the stored solid color default).
    pub const TRANSPARENT: Self = Self(0);

    /// Reinterpret a stored signed integer as a packed color.
    pub const fn from_bits_i32(bits: i32) -> Self {
        Self(bits.cast_unsigned())
    }

    /// Signed integer form used in the store.
    pub const fn to_bits_i32(self) -> i32 {
        self.0.cast_signed()
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Failure parsing a `#RRGGBB` / `#AARRGGBB` color.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ColorParseError(pub String);

impl FromStr for Argb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let bad = || ColorParseError(s.to_owned());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let raw = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | raw)),
            8 => Ok(Self(raw)),
            _ => Err(bad()),
        }
    }
}

impl From<Argb> for String {
    fn from(value: Argb) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What is drawn behind the dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundStatus {
    /// Flat color fill.
    SolidColor {
        /// Fill color.
        color: Argb,
        /// Text color drawn over the fill.
        text_color: Argb,
    },
    /// Bundled image.
    Image {
        /// Image identifier.
        image: String,
        /// Text color drawn over the image.
        text_color: Argb,
    },
}

impl BackgroundStatus {
    /// Text color, whichever variant this is.
    pub fn text_color(&self) -> Argb {
        match self {
            Self::SolidColor { text_color, .. } | Self::Image { text_color, .. } => *text_color,
        }
    }

    /// `true` for the image variant.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

impl Default for BackgroundStatus {
    fn default() -> Self {
        Self::SolidColor {
            color: Argb::TRANSPARENT,
            text_color: Argb::BLACK,
        }
    }
}

/// Every setting read at one point in time, for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// Sound effects enabled.
    pub sound: bool,
    /// Roll animation enabled.
    pub animation: bool,
    /// Dice sorting enabled.
    pub sorting: bool,
    /// Vibration enabled.
    pub vibration: bool,
    /// Dice style name.
    pub dice_style: String,
    /// Table background.
    pub background: BackgroundStatus,
    /// Stored player count (unclamped).
    pub player_count: i32,
    /// Seats `0..player_count`, clamped to the table size.
    pub players: Vec<PlayerInfo>,
    /// Last version run.
    pub last_version_run: String,
    /// Saved chronometer value.
    pub chrono_time: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn black_round_trips_through_signed_bits() {
        assert_eq!(Argb::BLACK.to_bits_i32(), -16_777_216);
        assert_eq!(Argb::from_bits_i32(-16_777_216), Argb::BLACK);
        assert_eq!(Argb::from_bits_i32(-1), Argb::WHITE);
        assert_eq!(Argb::BLACK.alpha(), 0xFF);
    }

    #[test]
    fn color_parsing_accepts_rgb_and_argb() {
        assert_eq!("#00FF00".parse::<Argb>().unwrap(), Argb(0xFF00_FF00));
        assert_eq!("80112233".parse::<Argb>().unwrap(), Argb(0x8011_2233));
        assert!("#12345".parse::<Argb>().is_err());
        assert!("#+1234567".parse::<Argb>().is_err());
        assert!("nothex".parse::<Argb>().is_err());
        assert_eq!(Argb(0xFF00_FF00).to_string(), "#FF00FF00");
    }

    #[test]
    fn text_color_is_shared_across_variants() {
        let solid = BackgroundStatus::SolidColor {
            color: Argb(0xFF12_3456),
            text_color: Argb::WHITE,
        };
        let image = BackgroundStatus::Image {
            image: "WOOD".into(),
            text_color: Argb::BLACK,
        };
        assert_eq!(solid.text_color(), Argb::WHITE);
        assert_eq!(image.text_color(), Argb::BLACK);
        assert!(!solid.is_image());
        assert!(image.is_image());
    }

    #[test]
    fn default_background_is_transparent_solid_with_black_text() {
        assert_eq!(
            BackgroundStatus::default(),
            BackgroundStatus::SolidColor {
                color: Argb(0),
                text_color: Argb::BLACK,
            }
        );
    }

    #[test]
    fn background_serializes_with_kind_tag() {
        let json = serde_json::to_value(BackgroundStatus::Image {
            image: "GREENCARPET".into(),
            text_color: Argb::WHITE,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "image", "image": "GREENCARPET", "text_color": "#FFFFFFFF"})
        );
    }
}
