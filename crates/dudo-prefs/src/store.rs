// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port for typed preference values and the editor that batches writes.

use crate::value::{PrefKind, PrefValue};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;
use thiserror::Error;

/// Storage port for preference values (keyed by setting name).
///
/// Implementations hold no snapshot for the caller: two reads may observe
/// different values if a commit happened in between.
pub trait PreferenceStore {
    /// Read the value stored under `key`. Returns `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError>;
    /// Durably apply a batch of edits, in order.
    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError>;
}

/// Error type for preference operations.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A key holds a value of a different type than the caller asked for.
    #[error("type mismatch for {key}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Offending key.
        key: String,
        /// Kind the caller asked for.
        expected: PrefKind,
        /// Kind actually stored.
        found: PrefKind,
    },
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// One change inside a commit batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Store `value` under `key`, replacing any previous value.
    Put {
        /// Setting key.
        key: String,
        /// New value.
        value: PrefValue,
    },
    /// Forget `key`; later reads fall back to the default.
    Remove {
        /// Setting key.
        key: String,
    },
    /// Forget every key starting with `prefix` (e.g. all player seats).
    RemovePrefix {
        /// Key prefix.
        prefix: String,
    },
}

impl Edit {
    /// Key (or key prefix) touched by this edit.
    pub fn key(&self) -> &str {
        match self {
            Self::Put { key, .. } | Self::Remove { key } => key,
            Self::RemovePrefix { prefix } => prefix,
        }
    }

    /// Apply this edit to an in-memory key/value map.
    ///
    /// Shared by adapters that load the whole table, edit it, and write it back.
    pub fn apply<M: EditTarget>(&self, table: &mut M) {
        match self {
            Self::Put { key, value } => table.put(key, value.clone()),
            Self::Remove { key } => table.remove(key),
            Self::RemovePrefix { prefix } => table.retain(|k| !k.starts_with(prefix.as_str())),
        }
    }
}

/// Map types an [`Edit`] can be applied to.
pub trait EditTarget {
    /// Insert or replace `key`.
    fn put(&mut self, key: &str, value: PrefValue);
    /// Drop `key` if present.
    fn remove(&mut self, key: &str);
    /// Keep only the keys for which `keep` returns `true`.
    fn retain(&mut self, keep: impl FnMut(&str) -> bool);
}

impl EditTarget for BTreeMap<String, PrefValue> {
    fn put(&mut self, key: &str, value: PrefValue) {
        self.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        BTreeMap::remove(self, key);
    }

    fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        BTreeMap::retain(self, |k, _| keep(k));
    }
}

impl<H: BuildHasher> EditTarget for HashMap<String, PrefValue, H> {
    fn put(&mut self, key: &str, value: PrefValue) {
        self.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        HashMap::remove(self, key);
    }

    fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        HashMap::retain(self, |k, _| keep(k));
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError> {
        (**self).read(key)
    }

    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError> {
        (**self).commit(edits)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError> {
        (**self).read(key)
    }

    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError> {
        (**self).commit(edits)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError> {
        (**self).read(key)
    }

    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError> {
        (**self).commit(edits)
    }
}

/// Collects puts/removes and hands them to the store in one `commit`.
///
/// Nothing reaches the store until [`commit`](Self::commit) is called; an
/// editor dropped without committing discards its edits.
#[must_use = "edits are discarded unless `commit` is called"]
pub struct PreferenceEditor<'a, S: ?Sized> {
    store: &'a S,
    edits: Vec<Edit>,
}

impl<'a, S> PreferenceEditor<'a, S>
where
    S: PreferenceStore + ?Sized,
{
    /// Start an empty batch against `store`.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            edits: Vec::new(),
        }
    }

    /// Queue an arbitrary value.
    pub fn put(mut self, key: impl Into<String>, value: impl Into<PrefValue>) -> Self {
        self.edits.push(Edit::Put {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Queue a boolean.
    pub fn put_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.put(key, value)
    }

    /// Queue a 32-bit integer.
    pub fn put_int(self, key: impl Into<String>, value: i32) -> Self {
        self.put(key, value)
    }

    /// Queue a 64-bit integer.
    pub fn put_long(self, key: impl Into<String>, value: i64) -> Self {
        self.put(key, value)
    }

    /// Queue a string.
    pub fn put_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, PrefValue::Str(value.into()))
    }

    /// Queue removal of `key`.
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.edits.push(Edit::Remove { key: key.into() });
        self
    }

    /// Queue removal of every key starting with `prefix`.
    pub fn remove_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.edits.push(Edit::RemovePrefix {
            prefix: prefix.into(),
        });
        self
    }

    /// Edits queued so far.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Flush the batch to the store.
    pub fn commit(self) -> Result<(), PrefsError> {
        if self.edits.is_empty() {
            return Ok(());
        }
        self.store.commit(&self.edits)
    }
}
