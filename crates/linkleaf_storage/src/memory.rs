//! In-memory feed store for testing.

use crate::error::{StorageError, StorageResult};
use crate::store::FeedStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An in-memory feed store.
///
/// Keeps whole files in a map keyed by path. Replacement is trivially atomic
/// because every write swaps the entry under a lock.
///
/// # Example
///
/// ```rust
/// use linkleaf_storage::{FeedStore, InMemoryStore};
/// use std::path::Path;
///
/// let store = InMemoryStore::new();
/// store.write(Path::new("feed.bin"), b"test data").unwrap();
/// assert_eq!(store.read(Path::new("feed.bin")).unwrap(), b"test data");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one pre-existing file.
    ///
    /// Useful for testing decode failures on corrupted contents.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let store = Self::new();
        store.files.write().insert(path.into(), bytes);
        store
    }

    /// Returns true if a file is stored at `path`.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.read().contains_key(path)
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Returns true if no files are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl FeedStore for InMemoryStore {
    fn read(&self, path: &Path) -> StorageResult<Vec<u8>> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        self.files.write().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> StorageResult<bool> {
        Ok(self.contains(path))
    }
}
