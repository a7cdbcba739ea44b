//! Atomic file-system store.

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};
use crate::store::FeedStore;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Prefix of temp files created next to the target.
pub const TEMP_PREFIX: &str = ".tmp-";

/// A file-system store with atomic replacement.
///
/// Writes go through the write-then-rename pattern:
/// 1. Create missing parent directories
/// 2. Write to a temp file in the target's directory
/// 3. Apply the configured permissions and fsync the temp file
/// 4. Rename the temp file onto the target
/// 5. Fsync the directory so the rename itself is durable
///
/// A crash before step 4 leaves the target untouched and at most an orphaned
/// `.tmp-*` file. Any error before or during the rename removes the temp file.
///
/// # Example
///
/// ```no_run
/// use linkleaf_storage::{FeedStore, FileStore};
/// use std::path::Path;
///
/// let store = FileStore::new();
/// store.write(Path::new("feed.bin"), b"bytes").unwrap();
/// assert_eq!(store.read(Path::new("feed.bin")).unwrap(), b"bytes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Writes `bytes` to a temp file next to `path` without touching `path`.
    ///
    /// The returned [`PendingWrite`] replaces the target on
    /// [`PendingWrite::commit`]. Dropping it instead discards the temp file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the temp file cannot be created
    /// or written.
    pub fn stage(&self, path: &Path, bytes: &[u8]) -> StorageResult<PendingWrite> {
        let dir = parent_dir(path);
        self.create_dir_all(dir)?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(dir)
            .map_err(|e| StorageError::io(dir, e))?;
        let temp_path = temp.path().to_path_buf();

        temp.write_all(bytes)
            .map_err(|e| StorageError::io(&temp_path, e))?;
        set_mode(temp.as_file(), self.config.file_mode)
            .map_err(|e| StorageError::io(&temp_path, e))?;
        if self.config.sync {
            temp.as_file()
                .sync_all()
                .map_err(|e| StorageError::io(&temp_path, e))?;
        }

        Ok(PendingWrite {
            temp,
            target: path.to_path_buf(),
            sync: self.config.sync,
        })
    }

    fn create_dir_all(&self, dir: &Path) -> StorageResult<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.config.dir_mode);
        }
        builder.create(dir).map_err(|e| StorageError::io(dir, e))
    }
}

impl FeedStore for FileStore {
    fn read(&self, path: &Path) -> StorageResult<Vec<u8>> {
        let bytes = fs::read(path).map_err(|e| StorageError::read(path, e))?;
        debug!(path = %path.display(), len = bytes.len(), "read file");
        Ok(bytes)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        self.stage(path, bytes)?.commit()?;
        debug!(path = %path.display(), len = bytes.len(), "replaced file");
        Ok(())
    }

    fn exists(&self, path: &Path) -> StorageResult<bool> {
        path.try_exists().map_err(|e| StorageError::io(path, e))
    }
}

/// A fully written temp file waiting to replace its target.
#[derive(Debug)]
pub struct PendingWrite {
    temp: NamedTempFile,
    target: PathBuf,
    sync: bool,
}

impl PendingWrite {
    /// Returns the path of the temp file.
    #[must_use]
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Returns the path this write will replace.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Renames the temp file onto the target.
    ///
    /// Once the rename has happened the new contents are in place, so a
    /// failed directory sync afterwards is logged and the commit still
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails. A failed rename removes the temp
    /// file and leaves the target untouched.
    pub fn commit(self) -> StorageResult<()> {
        self.commit_with(sync_directory)
    }

    fn commit_with(self, sync_dir: impl FnOnce(&Path) -> io::Result<()>) -> StorageResult<()> {
        let Self { temp, target, sync } = self;
        temp.persist(&target)
            .map_err(|e| StorageError::io(&target, e.error))?;

        if sync {
            let dir = parent_dir(&target);
            if let Err(e) = sync_dir(dir) {
                warn!(
                    dir = %dir.display(),
                    error = %e,
                    "directory sync failed after rename"
                );
            }
        }
        Ok(())
    }
}

/// Directory holding `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Syncs a directory so that a rename inside it is durable.
///
/// Windows NTFS journals metadata updates and has no directory fsync, so
/// this is a no-op there.
#[cfg(unix)]
fn sync_directory(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_directory(_dir: &Path) -> io::Result<()> {
    Ok(())
}
