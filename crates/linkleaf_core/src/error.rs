//! Error types for Linkleaf core.

use linkleaf_codec::CodecError;
use linkleaf_storage::StorageError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Coarse classification of every core failure.
///
/// Callers map these to exit codes and messages; each [`CoreError`] has
/// exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The feed file does not exist.
    NotFound,
    /// The environment failed: the file system (permissions, disk full,
    /// rename) or a clock value that cannot be recorded.
    Io,
    /// The bytes are not a valid feed encoding.
    Decode,
    /// A record is missing required data.
    Validation,
}

/// Errors that can occur in Linkleaf core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Binary or text codec error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A new link lacks a required field.
    #[error("missing required link field `{field}`")]
    MissingField {
        /// Name of the first missing field.
        field: &'static str,
    },

    /// A link read from the text form lacks a required field.
    #[error("link #{position} is missing required field `{field}`")]
    InvalidLink {
        /// 1-based position of the link in the feed.
        position: usize,
        /// Name of the first missing field.
        field: &'static str,
    },

    /// The clock produced an instant that cannot be written as RFC3339.
    #[error("invalid timestamp: {message}")]
    InvalidTimestamp {
        /// Description of the failure.
        message: String,
    },
}

impl CoreError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Storage(e) if e.is_not_found() => ErrorKind::NotFound,
            Self::Storage(_) | Self::InvalidTimestamp { .. } => ErrorKind::Io,
            Self::Codec(_) => ErrorKind::Decode,
            Self::MissingField { .. } | Self::InvalidLink { .. } => ErrorKind::Validation,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn storage_errors_split_by_kind() {
        let missing = CoreError::from(StorageError::NotFound {
            path: PathBuf::from("feed.bin"),
        });
        let denied = CoreError::from(StorageError::Io {
            path: PathBuf::from("feed.bin"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });

        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(denied.kind(), ErrorKind::Io);
    }

    #[test]
    fn codec_and_validation_kinds() {
        assert_eq!(
            CoreError::from(CodecError::UnexpectedEof).kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            CoreError::MissingField { field: "url" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CoreError::invalid_timestamp("year 10000").kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn messages_name_the_field() {
        let err = CoreError::InvalidLink {
            position: 2,
            field: "date",
        };
        assert_eq!(err.to_string(), "link #2 is missing required field `date`");
    }
}
