// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dudo preferences CLI.
//!
//! Reads and edits the preference file the game keeps under the platform
//! config directory (or `--dir`). Every subcommand that takes a value writes
//! it; the same subcommand without a value prints the current setting.
//!
//! # Usage
//! ```text
//! dudo-prefs show
//! dudo-prefs player set 3 --name Alice --save 12345
//! dudo-prefs toggle sound off
//! dudo-prefs background solid '#336699' --text '#FFFFFF'
//! ```
//!
//! Exits with code `0` on success and non-zero on error.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BackgroundCommand, Cli, Command, PlayerCommand, PlayerSetArgs, ToggleOption};
use dudo_prefs::{BackgroundStatus, PlayerInfo, PreferenceStore, Settings};
use dudo_prefs_fs::FsPreferenceStore;
use output::Format;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = open_store(&cli)?;
    info!(path = %store.path().display(), "using preference file");
    let settings = Settings::new(store);
    let format = if cli.json { Format::Json } else { Format::Text };

    let out = run(&settings, cli.command, format)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

fn open_store(cli: &Cli) -> Result<FsPreferenceStore> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => dudo_prefs_fs::default_base().context("failed to resolve config dir")?,
    };
    FsPreferenceStore::with_namespace(&dir, &cli.namespace)
        .with_context(|| format!("failed to open preferences in {}", dir.display()))
}

/// Execute one subcommand and return what should be printed.
fn run<S: PreferenceStore>(
    settings: &Settings<S>,
    command: Command,
    format: Format,
) -> Result<String> {
    match command {
        Command::Show => output::render(format, &settings.snapshot(), output::snapshot_text),
        Command::Player(cmd) => run_player(settings, cmd, format),
        Command::Toggle { option, state } => {
            if let Some(state) = state {
                let enabled = bool::from(state);
                let saved = match option {
                    ToggleOption::Sound => settings.set_sound_enabled(enabled),
                    ToggleOption::Animation => settings.set_animation_enabled(enabled),
                    ToggleOption::Sorting => settings.set_sorting_enabled(enabled),
                    ToggleOption::Vibration => settings.set_vibration_enabled(enabled),
                };
                saved.with_context(|| format!("failed to save {option:?}"))?;
            }
            let enabled = match option {
                ToggleOption::Sound => settings.is_sound_enabled(),
                ToggleOption::Animation => settings.is_animation_enabled(),
                ToggleOption::Sorting => settings.is_sorting_enabled(),
                ToggleOption::Vibration => settings.is_vibration_enabled(),
            };
            output::render(format, &enabled, |b| output::toggle_text(*b))
        }
        Command::Style { name } => {
            if let Some(name) = name {
                settings
                    .set_dice_style(&name)
                    .context("failed to save dice style")?;
            }
            output::render(format, &settings.dice_style(), Clone::clone)
        }
        Command::Background(cmd) => {
            let current = settings.background_status();
            let next = match cmd {
                BackgroundCommand::Show => None,
                BackgroundCommand::Solid { color, text } => Some(BackgroundStatus::SolidColor {
                    color,
                    text_color: text.unwrap_or_else(|| current.text_color()),
                }),
                BackgroundCommand::Image { image, text } => Some(BackgroundStatus::Image {
                    image,
                    text_color: text.unwrap_or_else(|| current.text_color()),
                }),
            };
            if let Some(next) = &next {
                settings
                    .set_background_status(next)
                    .context("failed to save background")?;
            }
            output::render(format, &settings.background_status(), output::background_text)
        }
        Command::Version { version } => {
            if let Some(version) = version {
                settings
                    .set_last_version_run(&version)
                    .context("failed to save last version run")?;
            }
            output::render(format, &settings.last_version_run(), Clone::clone)
        }
        Command::Chrono { millis } => {
            if let Some(millis) = millis {
                settings
                    .set_chrono_time(millis)
                    .context("failed to save chrono time")?;
            }
            output::render(format, &settings.chrono_time(), ToString::to_string)
        }
        Command::Reset => {
            settings.reset().context("failed to reset preferences")?;
            info!("preferences reset");
            Ok(String::new())
        }
    }
}

fn run_player<S: PreferenceStore>(
    settings: &Settings<S>,
    command: PlayerCommand,
    format: Format,
) -> Result<String> {
    match command {
        PlayerCommand::Get { index } => {
            output::render(format, &settings.player_info(index), |info| {
                output::player_text(index, info)
            })
        }
        PlayerCommand::Set(PlayerSetArgs { index, name, save }) => {
            let current = settings.player_info(index);
            let next = PlayerInfo {
                name: name.unwrap_or(current.name),
                save: save.unwrap_or(current.save),
            };
            settings
                .set_player_info(index, &next)
                .with_context(|| format!("failed to save player {index}"))?;
            output::render(format, &settings.player_info(index), |info| {
                output::player_text(index, info)
            })
        }
        PlayerCommand::Count { count } => {
            if let Some(count) = count {
                settings
                    .set_player_count(count)
                    .context("failed to save player count")?;
            }
            output::render(format, &settings.player_count(), ToString::to_string)
        }
    }
}
