// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text and JSON rendering of settings values.

use anyhow::Result;
use dudo_prefs::{BackgroundStatus, PlayerInfo, SettingsSnapshot};
use serde::Serialize;

/// Output format selected by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Render any value: JSON via serde, text via the supplied formatter.
pub fn render<T: Serialize>(
    format: Format,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Text => text(value),
    })
}

pub fn player_text(index: i32, info: &PlayerInfo) -> String {
    format!("player {index}: name={:?} save={:?}", info.name, info.save)
}

pub fn background_text(status: &BackgroundStatus) -> String {
    match status {
        BackgroundStatus::SolidColor { color, text_color } => {
            format!("solid color={color} text={text_color}")
        }
        BackgroundStatus::Image { image, text_color } => {
            format!("image {image} text={text_color}")
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub fn toggle_text(enabled: bool) -> String {
    on_off(enabled).to_owned()
}

pub fn snapshot_text(snap: &SettingsSnapshot) -> String {
    let header = [
        format!("sound:        {}", on_off(snap.sound)),
        format!("animation:    {}", on_off(snap.animation)),
        format!("sorting:      {}", on_off(snap.sorting)),
        format!("vibration:    {}", on_off(snap.vibration)),
        format!("dice style:   {}", snap.dice_style),
        format!("background:   {}", background_text(&snap.background)),
        format!("last version: {}", snap.last_version_run),
        format!("chrono:       {}", snap.chrono_time),
        format!("players:      {}", snap.player_count),
    ];
    let seats = (0..)
        .zip(&snap.players)
        .map(|(i, info)| format!("  {}", player_text(i, info)));
    header.into_iter().chain(seats).collect::<Vec<_>>().join("\n")
}
