// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Domain-named settings operations over a [`PreferenceStore`].

use crate::keys;
use crate::model::{
    Argb, BackgroundStatus, PlayerInfo, SettingsSnapshot, DEFAULT_BACKGROUND_IMAGE,
    DEFAULT_CHRONO, DEFAULT_DICE_STYLE, DEFAULT_LAST_VERSION, DEFAULT_PLAYER_COUNT, DEFAULT_SAVE,
    MAX_PLAYERS,
};
use crate::placeholder::{PlaceholderProvider, StaticPlaceholder};
use crate::store::{PreferenceEditor, PreferenceStore, PrefsError};
use crate::value::{PrefKind, PrefValue};
use std::time::Duration;
use tracing::warn;

/// Thin service that maps game settings onto store keys and applies defaults.
///
/// Getters never fail. A key that was never written, a store that cannot be
/// read, and a value stored with the wrong type all yield the documented
/// default (the last two are logged). Setters commit immediately and return
/// the store's real outcome. Nothing is cached between calls.
pub struct Settings<S, P = StaticPlaceholder> {
    store: S,
    placeholder: P,
}

impl<S> Settings<S> {
    /// Create a new accessor using the given store and the English placeholder name.
    pub fn new(store: S) -> Self {
        Self::with_placeholder(store, StaticPlaceholder::default())
    }
}

impl<S, P> Settings<S, P> {
    /// Create a new accessor with a custom placeholder for unnamed players.
    pub fn with_placeholder(store: S, placeholder: P) -> Self {
        Self { store, placeholder }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the accessor and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S, P> Settings<S, P>
where
    S: PreferenceStore,
    P: PlaceholderProvider,
{
    /// Sound effects on? Defaults to `true`.
    pub fn is_sound_enabled(&self) -> bool {
        self.read_bool(keys::SOUND, true)
    }

    /// Roll animation on? Defaults to `true`.
    pub fn is_animation_enabled(&self) -> bool {
        self.read_bool(keys::ANIMATION, true)
    }

    /// Sort dice after a roll? Defaults to `false`.
    pub fn is_sorting_enabled(&self) -> bool {
        self.read_bool(keys::SORTING, false)
    }

    /// Vibrate on roll? Defaults to `true`.
    pub fn is_vibration_enabled(&self) -> bool {
        self.read_bool(keys::VIBRATION, true)
    }

    /// Dice style name. Defaults to `"CLASSIC"`.
    pub fn dice_style(&self) -> String {
        self.read_string(keys::STYLE, || DEFAULT_DICE_STYLE.to_owned())
    }

    /// Table background.
    ///
    /// The type flag picks the variant; the text color is read on its own
    /// either way. With nothing stored this is a solid color `0` with black text.
    pub fn background_status(&self) -> BackgroundStatus {
        let is_image = self.read_bool(keys::BACKGROUND_TYPE, false);
        let text_color = Argb::from_bits_i32(
            self.read_int(keys::BACKGROUND_TEXT_COLOR, Argb::BLACK.to_bits_i32()),
        );
        if is_image {
            BackgroundStatus::Image {
                image: self.read_string(keys::BACKGROUND_IMAGE, || {
                    DEFAULT_BACKGROUND_IMAGE.to_owned()
                }),
                text_color,
            }
        } else {
            BackgroundStatus::SolidColor {
                color: Argb::from_bits_i32(self.read_int(keys::BACKGROUND_SOLID_COLOR, 0)),
                text_color,
            }
        }
    }

    /// Number of players in the last match. Defaults to `2`.
    pub fn player_count(&self) -> i32 {
        self.read_int(keys::PLAYER_COUNT, DEFAULT_PLAYER_COUNT)
    }

    /// Player `index`'s name and save string; unset fields get the placeholder name and `"00000"`.
    pub fn player_info(&self, index: i32) -> PlayerInfo {
        let name = self.read_string(&keys::player_name_key(index), || {
            self.placeholder.player_name(index)
        });
        let save = self.read_string(&keys::player_save_key(index), || DEFAULT_SAVE.to_owned());
        PlayerInfo { name, save }
    }

    /// Version string of the last build that ran. Defaults to `"0"`.
    pub fn last_version_run(&self) -> String {
        self.read_string(keys::LAST_VERSION_RUN, || DEFAULT_LAST_VERSION.to_owned())
    }

    /// `true` when `version` differs from the recorded last-run version.
    pub fn is_first_run_of(&self, version: &str) -> bool {
        self.last_version_run() != version
    }

    /// Saved chronometer value. Defaults to `0`.
    pub fn chrono_time(&self) -> i64 {
        self.read_long(keys::CHRONO, DEFAULT_CHRONO)
    }

    /// Chronometer value as a duration, reading the stored value as milliseconds.
    /// Negative values read as zero.
    pub fn chrono_duration(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.chrono_time()).unwrap_or_default())
    }

    /// Read every setting, including seats `0..player_count` (clamped to the table size).
    pub fn snapshot(&self) -> SettingsSnapshot {
        let player_count = self.player_count();
        let seats = player_count.clamp(0, MAX_PLAYERS);
        SettingsSnapshot {
            sound: self.is_sound_enabled(),
            animation: self.is_animation_enabled(),
            sorting: self.is_sorting_enabled(),
            vibration: self.is_vibration_enabled(),
            dice_style: self.dice_style(),
            background: self.background_status(),
            player_count,
            players: (0..seats).map(|i| self.player_info(i)).collect(),
            last_version_run: self.last_version_run(),
            chrono_time: self.chrono_time(),
        }
    }

    /// Store the player count. The value is not range-checked.
    pub fn set_player_count(&self, count: i32) -> Result<(), PrefsError> {
        self.edit().put_int(keys::PLAYER_COUNT, count).commit()
    }

    /// Store player `index`'s name and save string in one commit.
    pub fn set_player_info(&self, index: i32, info: &PlayerInfo) -> Result<(), PrefsError> {
        self.edit()
            .put_string(keys::player_name_key(index), info.name.as_str())
            .put_string(keys::player_save_key(index), info.save.as_str())
            .commit()
    }

    /// Record the version string of the running build.
    pub fn set_last_version_run(&self, version: &str) -> Result<(), PrefsError> {
        self.edit().put_string(keys::LAST_VERSION_RUN, version).commit()
    }

    /// Store the chronometer value.
    pub fn set_chrono_time(&self, time: i64) -> Result<(), PrefsError> {
        self.edit().put_long(keys::CHRONO, time).commit()
    }

    /// Toggle sound effects.
    pub fn set_sound_enabled(&self, enabled: bool) -> Result<(), PrefsError> {
        self.edit().put_bool(keys::SOUND, enabled).commit()
    }

    /// Toggle roll animation.
    pub fn set_animation_enabled(&self, enabled: bool) -> Result<(), PrefsError> {
        self.edit().put_bool(keys::ANIMATION, enabled).commit()
    }

    /// Toggle dice sorting.
    pub fn set_sorting_enabled(&self, enabled: bool) -> Result<(), PrefsError> {
        self.edit().put_bool(keys::SORTING, enabled).commit()
    }

    /// Toggle vibration.
    pub fn set_vibration_enabled(&self, enabled: bool) -> Result<(), PrefsError> {
        self.edit().put_bool(keys::VIBRATION, enabled).commit()
    }

    /// Store the dice style name.
    pub fn set_dice_style(&self, style: &str) -> Result<(), PrefsError> {
        self.edit().put_string(keys::STYLE, style).commit()
    }

    /// Store the background.
    ///
    /// Only the fields of the chosen variant are written; the other variant's
    /// last value stays in the store for when the player switches back.
    pub fn set_background_status(&self, status: &BackgroundStatus) -> Result<(), PrefsError> {
        let editor = self
            .edit()
            .put_bool(keys::BACKGROUND_TYPE, status.is_image())
            .put_int(keys::BACKGROUND_TEXT_COLOR, status.text_color().to_bits_i32());
        let editor = match status {
            BackgroundStatus::SolidColor { color, .. } => {
                editor.put_int(keys::BACKGROUND_SOLID_COLOR, color.to_bits_i32())
            }
            BackgroundStatus::Image { image, .. } => {
                editor.put_string(keys::BACKGROUND_IMAGE, image.as_str())
            }
        };
        editor.commit()
    }

    /// Forget every setting, including seats at any index.
    pub fn reset(&self) -> Result<(), PrefsError> {
        keys::ALL_SCALAR_KEYS
            .iter()
            .fold(self.edit(), |editor, key| editor.remove(*key))
            .remove_prefix(keys::PLAYER_NAME)
            .remove_prefix(keys::PLAYER_SAVE)
            .commit()
    }

    fn edit(&self) -> PreferenceEditor<'_, S> {
        PreferenceEditor::new(&self.store)
    }

    fn read_bool(&self, key: &str, default: bool) -> bool {
        self.read_or(key, PrefKind::Bool, PrefValue::as_bool, || default)
    }

    fn read_int(&self, key: &str, default: i32) -> i32 {
        self.read_or(key, PrefKind::Int, PrefValue::as_int, || default)
    }

    fn read_long(&self, key: &str, default: i64) -> i64 {
        self.read_or(key, PrefKind::Long, PrefValue::as_long, || default)
    }

    fn read_string(&self, key: &str, default: impl FnOnce() -> String) -> String {
        self.read_or(
            key,
            PrefKind::Str,
            |v| v.as_str().map(str::to_owned),
            default,
        )
    }

    fn read_or<T>(
        &self,
        key: &str,
        expected: PrefKind,
        extract: impl FnOnce(&PrefValue) -> Option<T>,
        default: impl FnOnce() -> T,
    ) -> T {
        match self.store.read(key) {
            Ok(Some(value)) => match extract(&value) {
                Some(v) => v,
                None => {
                    let err = PrefsError::TypeMismatch {
                        key: key.to_owned(),
                        expected,
                        found: value.kind(),
                    };
                    warn!(%err, "using default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(err) => {
                warn!(key, %err, "preference read failed; using default");
                default()
            }
        }
    }
}
