// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `PreferenceStore` for Dudo (uses platform config dir).

use directories::ProjectDirs;
use dudo_prefs::{Edit, PrefValue, PreferenceStore, PrefsError};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = "preferences";

type Table = BTreeMap<String, PrefValue>;

/// Platform config directory for Dudo.
pub fn default_base() -> Result<PathBuf, PrefsError> {
    let proj = ProjectDirs::from("it", "ecosw", "Dudo")
        .ok_or_else(|| PrefsError::Other("could not resolve config dir".into()))?;
    Ok(proj.config_dir().to_path_buf())
}

/// Store one namespace of preferences as a JSON file under the platform config directory.
///
/// Reads go to disk every time. A commit holds an exclusive lock on
/// `<namespace>.lock` while it loads, edits and rewrites the table, so
/// handles in other threads or processes never overwrite each other. The new
/// table goes to a uniquely named temp file that is synced and renamed over
/// the old one; a batch lands entirely or not at all.
pub struct FsPreferenceStore {
    dir: PathBuf,
    path: PathBuf,
    lock_path: PathBuf,
}

impl FsPreferenceStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/dudo`).
    pub fn new() -> Result<Self, PrefsError> {
        Self::with_base(default_base()?)
    }

    /// Create a store for the default namespace under `base`.
    pub fn with_base(base: impl AsRef<Path>) -> Result<Self, PrefsError> {
        Self::with_namespace(base, DEFAULT_NAMESPACE)
    }

    /// Create a store for `namespace` under `base`.
    pub fn with_namespace(base: impl AsRef<Path>, namespace: &str) -> Result<Self, PrefsError> {
        if namespace.is_empty() || namespace.contains(['/', '\\']) || namespace.starts_with('.') {
            return Err(PrefsError::Other(format!(
                "invalid namespace {namespace:?}"
            )));
        }
        let dir = base.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(format!("{namespace}.json")),
            lock_path: dir.join(format!("{namespace}.lock")),
            dir,
        })
    }

    /// File holding this namespace.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<Table, PrefsError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Table::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Table::new()),
            Err(err) => Err(PrefsError::Io(err)),
        }
    }

    /// Exclusive lock shared by every handle on this namespace; released on drop.
    fn lock_exclusive(&self) -> Result<File, PrefsError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        file.lock()?;
        Ok(file)
    }

    fn write_table(&self, table: &Table) -> Result<(), PrefsError> {
        let data = serde_json::to_vec_pretty(table)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(io::Error::from)?;
        sync_dir(&self.dir)
    }
}

/// Flush the rename itself so a reported commit survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<(), PrefsError> {
    File::open(dir)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<(), PrefsError> {
    Ok(())
}

impl PreferenceStore for FsPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<PrefValue>, PrefsError> {
        Ok(self.load_table()?.remove(key))
    }

    fn commit(&self, edits: &[Edit]) -> Result<(), PrefsError> {
        let _lock = self.lock_exclusive()?;
        let mut table = self.load_table()?;
        for edit in edits {
            edit.apply(&mut table);
        }
        self.write_table(&table)?;
        debug!(path = %self.path.display(), edits = edits.len(), "preferences committed");
        Ok(())
    }
}
