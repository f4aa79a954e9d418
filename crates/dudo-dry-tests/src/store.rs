// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory preference store fake for testing without filesystem I/O.

use dudo_prefs::{Edit, PrefValue, PreferenceStore, PrefsError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`PreferenceStore`] for testing.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the other. Call counts and failure switches let tests check
/// how many round-trips an operation made and what happens when storage
/// fails.
///
/// # Example
///
/// ```
/// use dudo_dry_tests::InMemoryPreferenceStore;
/// use dudo_prefs::Settings;
///
/// let store = InMemoryPreferenceStore::new();
/// let settings = Settings::new(store.clone());
///
/// settings.set_chrono_time(4200).unwrap();
/// assert_eq!(settings.chrono_time(), 4200);
/// assert_eq!(store.commit_count(), 1);
/// assert_eq!(store.read_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, PrefValue>,
    read_count: usize,
    commit_count: usize,
    fail_on_read: bool,
    fail_on_commit: bool,
}

impl InMemoryPreferenceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given values.
    pub fn with_data<I, K>(data: I) -> Self
    where
        I: IntoIterator<Item = (K, PrefValue)>,
        K: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                data: data.into_iter().map(|(k, v)| (k.into(), v)).collect(),
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every `read` fail.
    pub fn set_fail_on_read(&self, fail: bool) {
        self.lock().fail_on_read = fail;
    }

    /// Make every `commit` fail without applying its edits.
    pub fn set_fail_on_commit(&self, fail: bool) {
        self.lock().fail_on_commit = fail;
    }

    /// Number of `read` calls attempted, failed ones included.
    pub fn read_count(&self) -> usize {
        self.lock().read_count
    }

    /// Number of `commit` calls attempted, failed ones included.
    pub fn commit_count(&self) -> usize {
        self.lock().commit_count
    }

    /// All keys currently present.
    pub fn keys(&self) -> Vec<String> {
        self.lock().data.keys().cloned().collect()
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    /// Peek at a value without touching the read counter.
    pub fn get(&self, key: &str) -> Option<PrefValue> {
        self.lock().data.get(key).cloned()
    }

    /// Clear data, counters and failure switches.
    pub fn reset(&self) {
        *self.lock() = Inner::default();
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError> {
        let mut inner = self.lock();
        inner.read_count += 1;

        if inner.fail_on_read {
            return Err(PrefsError::Other("simulated read failure".into()));
        }

        Ok(inner.data.get(key).cloned())
    }

    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError> {
        let mut inner = self.lock();
        inner.commit_count += 1;

        if inner.fail_on_commit {
            return Err(PrefsError::Other("simulated commit failure".into()));
        }

        for edit in edits {
            edit.apply(&mut inner.data);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn put(key: &str, value: impl Into<PrefValue>) -> Edit {
        Edit::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn commit_then_read() {
        let store = InMemoryPreferenceStore::new();
        store.commit(&[put("sound_setting", false)]).unwrap();
        assert_eq!(
            store.read("sound_setting").unwrap(),
            Some(PrefValue::Bool(false))
        );
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.read_count(), 1);
    }

    #[test]
    fn missing_key_reads_none() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn remove_edit_deletes_key() {
        let store = InMemoryPreferenceStore::with_data([("chrono_setting", PrefValue::Long(9))]);
        store
            .commit(&[Edit::Remove {
                key: "chrono_setting".into(),
            }])
            .unwrap();
        assert!(!store.contains_key("chrono_setting"));
    }

    #[test]
    fn failed_commit_applies_nothing_but_counts() {
        let store = InMemoryPreferenceStore::new();
        store.set_fail_on_commit(true);
        let result = store.commit(&[put("a", 1), put("b", 2)]);
        assert!(matches!(result, Err(PrefsError::Other(_))));
        assert!(store.keys().is_empty());
        assert_eq!(store.commit_count(), 1);
    }

    #[test]
    fn failed_read_counts() {
        let store = InMemoryPreferenceStore::new();
        store.set_fail_on_read(true);
        assert!(store.read("a").is_err());
        assert!(store.read("b").is_err());
        assert_eq!(store.read_count(), 2);
    }

    #[test]
    fn get_does_not_count_as_read() {
        let store = InMemoryPreferenceStore::with_data([("style_setting", PrefValue::from("WOOD"))]);
        assert_eq!(store.get("style_setting"), Some(PrefValue::from("WOOD")));
        assert_eq!(store.read_count(), 0);
    }

    #[test]
    fn clones_share_state_and_reset() {
        let a = InMemoryPreferenceStore::new();
        let b = a.clone();
        a.commit(&[put("k", "v")]).unwrap();
        a.set_fail_on_read(true);
        assert!(b.contains_key("k"));
        assert!(b.read("k").is_err());

        b.reset();
        assert!(a.keys().is_empty());
        assert_eq!(a.commit_count(), 0);
        assert_eq!(a.read("k").unwrap(), None);
    }
}
