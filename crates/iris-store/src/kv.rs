//! String key-value storage.
//!
//! The persistence contract is deliberately lossy in the failure direction:
//! reads that cannot be served come back as "absent" and writes that cannot
//! land are logged and dropped. Callers above never see an I/O error; a
//! session with broken storage degrades to an ephemeral one.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Abstract string-to-string storage with last-write-wins semantics.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key is absent or the
    /// value cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Deletes the key. Absent keys are fine.
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// One-file-per-key store rooted at a directory.
///
/// The root directory is created lazily on first write, so a store can be
/// constructed for a path that does not exist yet. Keys map to file names
/// through [`file_name_for`], which confines every key to the root.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[inline]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads and writes under.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(file_name_for(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.root) {
            log::warn!("cannot create store directory {}: {err}", self.root.display());
            return;
        }
        let path = self.path_for(key);
        if let Err(err) = fs::write(&path, value) {
            log::warn!("dropping write of {key:?} to {}: {err}", path.display());
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("cannot remove {}: {err}", path.display()),
        }
    }
}

/// Maps a key to a flat file name.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_`, so keys can never name a
/// path outside the store root. The empty key and the two dot directories
/// map to `_`.
fn file_name_for(key: &str) -> String {
    let name: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    if name.is_empty() || name == "." || name == ".." {
        return "_".to_string();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MemoryStore ───────────────────────────────────────────────────────

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v1");
        assert_eq!(store.get("k"), Some("v1".to_string()));
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn memory_store_remove_of_absent_key_is_fine() {
        let mut store = MemoryStore::new();
        store.remove("never-set");
    }

    // ── FileStore ─────────────────────────────────────────────────────────

    #[test]
    fn file_store_round_trips_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("alpha", "one");
        store.set("beta", "two");
        assert_eq!(store.get("alpha"), Some("one".to_string()));
        assert_eq!(store.get("beta"), Some("two".to_string()));
        store.remove("alpha");
        assert_eq!(store.get("alpha"), None);
        assert_eq!(store.get("beta"), Some("two".to_string()));
    }

    #[test]
    fn file_store_creates_a_missing_root_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("deeper");
        let mut store = FileStore::new(&root);
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
        assert!(root.is_dir());
    }

    #[test]
    fn file_store_survives_a_second_instance_over_the_same_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FileStore::new(dir.path());
        writer.set("shared", "payload");
        let reader = FileStore::new(dir.path());
        assert_eq!(reader.get("shared"), Some("payload".to_string()));
    }

    #[test]
    fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("../escape", "caught");
        assert!(!dir.path().parent().unwrap().join("escape").exists());
        assert_eq!(store.get("../escape"), Some("caught".to_string()));
    }

    #[test]
    fn file_names_stay_flat() {
        assert_eq!(file_name_for("iris-gradients"), "iris-gradients");
        assert_eq!(file_name_for("a/b\\c d"), "a_b_c_d");
        assert_eq!(file_name_for(""), "_");
        assert_eq!(file_name_for("."), "_");
        assert_eq!(file_name_for(".."), "_");
    }
}
