// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dudo_prefs::Argb;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dudo-prefs",
    version,
    about = "Inspect and edit Dudo game preferences",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Directory holding the preference files (defaults to the platform config dir).
    #[arg(long, global = true, env = "DUDO_PREFS_DIR")]
    pub dir: Option<PathBuf>,

    /// Preference namespace (file stem).
    #[arg(long, global = true, default_value = dudo_prefs_fs::DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every setting.
    Show,
    /// Read or write player seats.
    #[command(subcommand)]
    Player(PlayerCommand),
    /// Read or set an on/off option.
    Toggle {
        /// Option to read or set.
        option: ToggleOption,
        /// New state; omit to print the current one.
        state: Option<OnOff>,
    },
    /// Read or set the dice style.
    Style {
        /// New style name; omit to print the current one.
        name: Option<String>,
    },
    /// Read or set the table background.
    #[command(subcommand)]
    Background(BackgroundCommand),
    /// Read or set the last version run.
    Version {
        /// New version string; omit to print the current one.
        version: Option<String>,
    },
    /// Read or set the saved chronometer value.
    Chrono {
        /// New value; omit to print the current one.
        #[arg(allow_negative_numbers = true)]
        millis: Option<i64>,
    },
    /// Forget every stored setting, including every player seat.
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Print one seat.
    Get {
        /// Seat index (0-5).
        #[arg(allow_negative_numbers = true)]
        index: i32,
    },
    /// Update one seat; fields left out keep their current value.
    Set(PlayerSetArgs),
    /// Read or set the number of players.
    Count {
        /// New count; omit to print the current one.
        #[arg(allow_negative_numbers = true)]
        count: Option<i32>,
    },
}

#[derive(Args, Debug)]
pub struct PlayerSetArgs {
    /// Seat index (0-5).
    #[arg(allow_negative_numbers = true)]
    pub index: i32,
    /// Display name.
    #[arg(long)]
    pub name: Option<String>,
    /// Save string.
    #[arg(long)]
    pub save: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum BackgroundCommand {
    /// Print the current background.
    Show,
    /// Use a flat color.
    Solid {
        /// Fill color (#RRGGBB or #AARRGGBB).
        color: Argb,
        /// Text color; keeps the current one when omitted.
        #[arg(long)]
        text: Option<Argb>,
    },
    /// Use a bundled image.
    Image {
        /// Image identifier.
        image: String,
        /// Text color; keeps the current one when omitted.
        #[arg(long)]
        text: Option<Argb>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOption {
    /// Sound effects.
    Sound,
    /// Roll animation.
    Animation,
    /// Sort dice after a roll.
    Sorting,
    /// Vibrate on roll.
    Vibration,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnOff {
    On,
    Off,
}

impl From<OnOff> for bool {
    fn from(value: OnOff) -> Self {
        value == OnOff::On
    }
}
