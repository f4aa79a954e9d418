// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Filesystem store persistence across store instances.

use dudo_prefs::{keys, Argb, BackgroundStatus, PlayerInfo, PrefValue, PreferenceStore, Settings};
use dudo_prefs_fs::FsPreferenceStore;
use proptest::prelude::*;
use std::fs;
use std::thread;

#[test]
fn values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    {
        let settings = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
        settings.set_last_version_run("1.2.3").unwrap();
        settings.set_chrono_time(4200).unwrap();
        settings
            .set_player_info(3, &PlayerInfo::new("Alice", "12345"))
            .unwrap();
        settings
            .set_background_status(&BackgroundStatus::SolidColor {
                color: Argb(0xFF10_2030),
                text_color: Argb::WHITE,
            })
            .unwrap();
    }

    let settings = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
    assert_eq!(settings.last_version_run(), "1.2.3");
    assert_eq!(settings.chrono_time(), 4200);
    assert_eq!(settings.player_info(3), PlayerInfo::new("Alice", "12345"));
    assert_eq!(settings.player_info(2), PlayerInfo::new("Player", "00000"));
    assert_eq!(
        settings.background_status(),
        BackgroundStatus::SolidColor {
            color: Argb(0xFF10_2030),
            text_color: Argb::WHITE,
        }
    );
}

#[test]
fn unset_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
    assert!(settings.is_sound_enabled());
    assert_eq!(settings.player_count(), 2);
    assert_eq!(settings.last_version_run(), "0");
}

#[test]
fn two_handles_see_each_others_writes() {
    let dir = tempfile::tempdir().unwrap();
    let writer = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
    let reader = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());

    assert!(!reader.is_sorting_enabled());
    writer.set_sorting_enabled(true).unwrap();
    assert!(reader.is_sorting_enabled());
}

#[test]
fn concurrent_handles_keep_every_write() {
    let dir = tempfile::tempdir().unwrap();
    let writers: Vec<_> = [0..50, 1000..1050]
        .into_iter()
        .map(|seats| {
            let base = dir.path().to_path_buf();
            thread::spawn(move || {
                let settings = Settings::new(FsPreferenceStore::with_base(base).unwrap());
                for index in seats {
                    settings
                        .set_player_info(index, &PlayerInfo::new(format!("P{index}"), "12345"))
                        .unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let settings = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
    for index in (0..50).chain(1000..1050) {
        assert_eq!(
            settings.player_info(index),
            PlayerInfo::new(format!("P{index}"), "12345"),
            "seat {index} lost"
        );
    }
}

#[test]
fn namespaces_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let a = FsPreferenceStore::with_namespace(dir.path(), "alpha").unwrap();
    let b = FsPreferenceStore::with_namespace(dir.path(), "beta").unwrap();
    Settings::new(&a).set_player_count(6).unwrap();
    assert_eq!(Settings::new(&b).player_count(), 2);
    assert!(a.path().ends_with("alpha.json"));
}

#[test]
fn file_uses_tagged_values_under_exact_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPreferenceStore::with_base(dir.path()).unwrap();
    Settings::new(&store).set_chrono_time(4200).unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"chrono_setting": {"type": "long", "value": 4200}})
    );
}

#[test]
fn reads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPreferenceStore::with_base(dir.path()).unwrap();
    fs::write(
        store.path(),
        r#"{"sound_setting": {"type": "bool", "value": false},
            "playername_setting0": {"type": "str", "value": "Enrico"}}"#,
    )
    .unwrap();
    assert_eq!(
        store.read(keys::SOUND).unwrap(),
        Some(PrefValue::Bool(false))
    );
    let settings = Settings::new(store);
    assert!(!settings.is_sound_enabled());
    assert_eq!(settings.player_info(0).name(), "Enrico");
}

#[test]
fn reset_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPreferenceStore::with_base(dir.path()).unwrap();
    let settings = Settings::new(&store);
    settings.set_dice_style("WOOD").unwrap();
    settings.reset().unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({}));
    assert_eq!(settings.dice_style(), "CLASSIC");
}

#[test]
fn corrupt_file_reads_defaults_but_refuses_commit() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPreferenceStore::with_base(dir.path()).unwrap();
    fs::write(store.path(), b"garbage").unwrap();
    let settings = Settings::new(&store);
    assert_eq!(settings.dice_style(), "CLASSIC");
    assert!(settings.set_dice_style("WOOD").is_err());
    assert_eq!(fs::read(store.path()).unwrap(), b"garbage");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_player_strings_survive_the_file(
        index in 0i32..6,
        name in any::<String>(),
        save in any::<String>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let info = PlayerInfo::new(name, save);
        Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap())
            .set_player_info(index, &info)
            .unwrap();

        let reopened = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
        prop_assert_eq!(reopened.player_info(index), info);
    }

    #[test]
    fn arbitrary_scalars_survive_the_file(
        count in any::<i32>(),
        chrono in any::<i64>(),
        version in any::<String>(),
        style in any::<String>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let writer = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
        writer.set_player_count(count).unwrap();
        writer.set_chrono_time(chrono).unwrap();
        writer.set_last_version_run(&version).unwrap();
        writer.set_dice_style(&style).unwrap();

        let reopened = Settings::new(FsPreferenceStore::with_base(dir.path()).unwrap());
        prop_assert_eq!(reopened.player_count(), count);
        prop_assert_eq!(reopened.chrono_time(), chrono);
        prop_assert_eq!(reopened.last_version_run(), version);
        prop_assert_eq!(reopened.dice_style(), style);
    }
}
