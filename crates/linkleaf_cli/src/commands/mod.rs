//! CLI command implementations.

pub mod add;
pub mod convert;
pub mod init;
pub mod list;
pub mod print;

use linkleaf_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Errors surfaced by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A feed operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing to standard output failed.
    #[error("writing output: {0}")]
    Stdout(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(e) if e.kind() == ErrorKind::Validation => 2,
            _ => 1,
        }
    }
}

impl From<linkleaf_storage::StorageError> for CliError {
    fn from(e: linkleaf_storage::StorageError) -> Self {
        Self::Core(e.into())
    }
}
