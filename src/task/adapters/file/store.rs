//! Directory-backed key-value store.
//!
//! Each key maps to one `<key>.json` file inside a capability-scoped
//! directory. Writes go to a sibling temporary file first and are renamed
//! into place, so a crash mid-write leaves the previous value intact.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::task::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

const SLOT_EXTENSION: &str = "json";

/// Key-value store keeping one file per key in a directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens the directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(KeyValueStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(KeyValueStoreError::persistence)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Maps a key onto its slot file name.
///
/// Keys are restricted to ASCII alphanumerics, `-`, `_` and `.` and may not
/// start with `.`, so a key can never escape the directory or collide with
/// the temporary files.
fn slot_file_name(key: &str) -> KeyValueStoreResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !is_valid {
        return Err(KeyValueStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{SLOT_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let file_name = slot_file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::persistence(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let file_name = slot_file_name(key)?;
        let temp_name = format!(".{file_name}.tmp");
        self.dir
            .write(&temp_name, value)
            .map_err(KeyValueStoreError::persistence)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(KeyValueStoreError::persistence)
    }
}
