// SPDX-License-Identifier: MPL-2.0
//! Synchronous local key-value storage, persisted as CBOR.
//!
//! This is the desktop counterpart of a browser's `localStorage`: string keys,
//! string values, read once at startup and written through on every `set`.
//! The application stores a single entry, the theme preference under
//! [`THEME_KEY`]; tunable settings belong in `settings.toml` instead.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()` with an explicit directory
//! 2. Set `TIKSAVER_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct Entries {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// String key-value store with write-through persistence.
///
/// A store created with [`LocalStorage::in_memory`] has no backing file and
/// never touches the disk.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    entries: Entries,
    path: Option<PathBuf>,
}

impl LocalStorage {
    /// Creates an empty store with no backing file.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store from the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). If the file exists but
    /// cannot be read, the store starts empty (still backed by the same file)
    /// and an i18n warning key is returned.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STATE_FILE);
            dir
        }) else {
            log::warn!("No data directory available; preferences will not persist");
            return (Self::in_memory(), None);
        };

        if !path.exists() {
            return (Self::backed_by(path, Entries::default()), None);
        }

        match read_entries(&path) {
            Ok(entries) => (Self::backed_by(path, entries), None),
            Err(err) => {
                log::warn!("Ignoring unreadable state file {}: {err}", path.display());
                (
                    Self::backed_by(path, Entries::default()),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    fn backed_by(path: PathBuf, entries: Entries) -> Self {
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, overwriting in place, and writes the store
    /// to disk.
    ///
    /// The in-memory value is updated even if writing fails; in that case an
    /// i18n warning key is returned.
    pub fn set(&mut self, key: &str, value: &str) -> Option<String> {
        self.entries
            .values
            .insert(key.to_string(), value.to_string());

        let path = self.path.as_ref()?;
        match write_entries(path, &self.entries) {
            Ok(()) => None,
            Err(err) => {
                log::warn!("Failed to write state file {}: {err}", path.display());
                Some("notification-state-write-error".to_string())
            }
        }
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn read_entries(path: &Path) -> Result<Entries> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(ciborium::from_reader(reader)?)
}

fn write_entries(path: &Path, entries: &Entries) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(entries, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_store_starts_empty_and_never_writes() {
        let mut store = LocalStorage::in_memory();
        assert!(store.get(THEME_KEY).is_none());
        assert!(store.set(THEME_KEY, "dark").is_none());
        assert_eq!(store.get(THEME_KEY), Some("dark"));
        assert!(store.path().is_none());
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut store = LocalStorage::in_memory();
        store.set(THEME_KEY, "dark");
        store.set(THEME_KEY, "light");
        assert_eq!(store.get(THEME_KEY), Some("light"));
    }

    #[test]
    fn values_survive_reload() {
        let temp_dir = tempdir().expect("temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let (mut store, warning) = LocalStorage::load_from(base.clone());
        assert!(warning.is_none());
        assert!(store.set(THEME_KEY, "dark").is_none());

        let (reloaded, warning) = LocalStorage::load_from(base);
        assert!(warning.is_none());
        assert_eq!(reloaded.get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn set_creates_missing_data_directory() {
        let temp_dir = tempdir().expect("temp dir");
        let nested = temp_dir.path().join("deep").join("data");

        let (mut store, _) = LocalStorage::load_from(Some(nested.clone()));
        assert!(store.set(THEME_KEY, "light").is_none());
        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn corrupted_file_yields_empty_store_and_warning() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\x00garbage").expect("write");

        let (store, warning) = LocalStorage::load_from(Some(temp_dir.path().to_path_buf()));

        assert!(store.get(THEME_KEY).is_none());
        assert_eq!(warning.as_deref(), Some("notification-state-read-error"));
        assert!(store.path().is_some());
    }
}
