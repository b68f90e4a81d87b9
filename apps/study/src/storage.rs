//! Storage port.
//!
//! The browser build of this tool keeps its state in `localStorage`; here the
//! same two string-keyed entries live behind a [`StoragePort`] trait so the
//! backing can be swapped in tests. [`FileStorage`] writes one file per key
//! under a state directory; [`MemoryStorage`] backs the test suite.

use crate::error::StorageError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key holding the serialized array of mastered entry ids.
pub const PROGRESS_KEY: &str = "oxford_progress";

/// Key holding the theme preference token.
pub const THEME_KEY: &str = "theme";

/// String-keyed durable storage, mirroring the browser's local storage
/// surface. Keys are simple tokens; values are opaque strings.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage handle shared between the progress store and the controller.
pub type SharedStorage = Arc<Mutex<dyn StoragePort + Send>>;

/// Wrap a concrete storage backend into a [`SharedStorage`] handle.
pub fn shared<S: StoragePort + Send + 'static>(storage: S) -> SharedStorage {
    Arc::new(Mutex::new(storage))
}

/// File-backed storage: one file per key under a state directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory on demand.
    pub fn open(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Default state directory, under the platform's local data directory.
pub fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-study")
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_storage_round_trips() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path().join("state")).unwrap();
        assert_eq!(storage.get(PROGRESS_KEY).unwrap(), None);
        storage.set(PROGRESS_KEY, "[1,2,3]").unwrap();
        assert_eq!(storage.get(PROGRESS_KEY).unwrap(), Some("[1,2,3]".to_string()));
        storage.remove(PROGRESS_KEY).unwrap();
        assert_eq!(storage.get(PROGRESS_KEY).unwrap(), None);
        // Removing a missing key stays quiet.
        storage.remove(PROGRESS_KEY).unwrap();
    }

    #[test]
    fn file_storage_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path().to_path_buf()).unwrap();
        storage.set(PROGRESS_KEY, "[0]").unwrap();
        storage.set(THEME_KEY, "dark").unwrap();
        storage.remove(PROGRESS_KEY).unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }
}
