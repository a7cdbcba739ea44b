//! File store configuration.

/// Configuration for a [`crate::FileStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Permission bits applied to written files (Unix only).
    pub file_mode: u32,

    /// Permission bits for directories created on demand (Unix only).
    pub dir_mode: u32,

    /// Whether to fsync the temp file and the directory around the rename.
    pub sync: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_mode: 0o644,
            dir_mode: 0o755,
            sync: true,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the permission bits of written files.
    #[must_use]
    pub const fn file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Sets the permission bits of created directories.
    #[must_use]
    pub const fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Sets whether writes are fsynced.
    #[must_use]
    pub const fn sync(mut self, value: bool) -> Self {
        self.sync = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.file_mode, 0o644);
        assert_eq!(config.dir_mode, 0o755);
        assert!(config.sync);
    }

    #[test]
    fn builder_pattern() {
        let config = StoreConfig::new().file_mode(0o600).dir_mode(0o700).sync(false);

        assert_eq!(config.file_mode, 0o600);
        assert_eq!(config.dir_mode, 0o700);
        assert!(!config.sync);
    }
}
