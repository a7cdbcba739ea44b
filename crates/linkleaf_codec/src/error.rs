//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
///
/// Every variant describes bytes that are not a valid feed encoding; callers
/// treat them uniformly as a decode failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Float values are forbidden in canonical CBOR.
    #[error("float values are forbidden in canonical CBOR")]
    FloatForbidden,

    /// Indefinite-length items are forbidden.
    #[error("indefinite-length items are forbidden")]
    IndefiniteLengthForbidden,

    /// Invalid UTF-8 string.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// Unexpected end of input.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Bytes left over after the root item.
    #[error("{count} trailing bytes after root item")]
    TrailingBytes {
        /// Number of unread bytes.
        count: usize,
    },

    /// Invalid CBOR structure.
    #[error("invalid CBOR structure: {message}")]
    InvalidStructure {
        /// Description of the structural error.
        message: String,
    },

    /// Unsupported CBOR type.
    #[error("unsupported CBOR type: {type_name}")]
    UnsupportedType {
        /// Name of the unsupported type.
        type_name: String,
    },

    /// Integer does not fit the target type.
    #[error("integer overflow")]
    IntegerOverflow,

    /// A length prefix exceeds the decoder's limits.
    #[error("size limit exceeded: claimed {claimed}, max {max_allowed}")]
    SizeLimitExceeded {
        /// Length claimed by the input.
        claimed: u64,
        /// Largest accepted length.
        max_allowed: u64,
    },

    /// Arrays and maps are nested deeper than the decoder allows.
    #[error("nesting depth exceeds {max_depth}")]
    DepthLimitExceeded {
        /// Deepest accepted nesting.
        max_depth: usize,
    },

    /// The CBOR is well formed but does not match the feed schema.
    #[error("schema mismatch: {message}")]
    Schema {
        /// What did not match.
        message: String,
    },

    /// The encoding-level format marker is not supported.
    #[error("unsupported feed format {found} (supported: {supported})")]
    UnsupportedFormat {
        /// Marker found in the input.
        found: i64,
        /// Marker this build writes and reads.
        supported: i64,
    },

    /// The text form could not be parsed.
    #[error("text form: {message}")]
    Text {
        /// Parser message.
        message: String,
    },
}

impl CodecError {
    /// Create an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Create an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a schema mismatch error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Text {
            message: err.to_string(),
        }
    }
}
