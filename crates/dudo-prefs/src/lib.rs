// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed preference access for the Dudo dice game.
//!
//! Game and UI code talk to [`Settings`] in domain terms (sound on?, player
//! three's name, last version run). `Settings` maps those onto fixed keys in
//! an injected [`PreferenceStore`] and substitutes documented defaults for
//! anything that was never written. Storage adapters live in their own crates
//! (`dudo-prefs-fs`, `dudo-dry-tests`) and only implement the store port.

pub mod accessor;
pub mod keys;
pub mod model;
pub mod placeholder;
pub mod store;
pub mod value;

pub use accessor::Settings;
pub use model::{Argb, BackgroundStatus, PlayerInfo, SettingsSnapshot};
pub use placeholder::{LocalizedPlaceholder, PlaceholderProvider, StaticPlaceholder};
pub use store::{Edit, EditTarget, PreferenceEditor, PreferenceStore, PrefsError};
pub use value::{PrefKind, PrefValue};
