//! Feed store trait definition.

use crate::error::StorageResult;
use std::path::Path;

/// Whole-file byte storage for feeds.
///
/// Stores are **opaque byte stores**: they read and replace entire files and
/// never interpret the bytes. Feed encoding is owned by the codec.
///
/// # Invariants
///
/// - `read` returns exactly the bytes of the last successful `write`
/// - `write` replaces the file atomically: a reader sees either the old or
///   the new contents, never a mix
/// - A failed `write` leaves the previous contents untouched
///
/// # Implementors
///
/// - [`super::FileStore`] - Atomic rename on the local file system
/// - [`super::InMemoryStore`] - For testing
pub trait FeedStore: Send + Sync {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorageError::NotFound`] if the file does not exist
    /// and [`crate::StorageError::Io`] for any other failure.
    fn read(&self, path: &Path) -> StorageResult<Vec<u8>>;

    /// Atomically replaces the file at `path` with `bytes`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorageError::Io`] if any step fails.
    fn write(&self, path: &Path, bytes: &[u8]) -> StorageResult<()>;

    /// Returns whether a file exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorageError::Io`] if existence cannot be determined.
    fn exists(&self, path: &Path) -> StorageResult<bool>;
}
