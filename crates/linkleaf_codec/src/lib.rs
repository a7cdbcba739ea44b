//! # Linkleaf Codec
//!
//! Encodings for Linkleaf feeds.
//!
//! - **Binary**: canonical CBOR, the only persisted form. Deterministic
//!   (equal feeds produce equal bytes) and strictly decoded.
//! - **Text**: pretty JSON for hand editing. Decoding ignores unknown fields.
//!
//! ## Canonical CBOR Rules
//!
//! - Maps are sorted by key (length-first, then bytewise on encoded keys)
//! - Integers use shortest encoding
//! - No floats, tags or indefinite-length items
//! - Strings must be UTF-8
//! - Exactly one root item, no trailing bytes
//!
//! ## Usage
//!
//! ```
//! use linkleaf_codec::{decode_binary, encode_binary, Feed};
//!
//! let feed = Feed {
//!     version: 1,
//!     title: "My Links".to_string(),
//!     ..Feed::default()
//! };
//! let bytes = encode_binary(&feed);
//! assert_eq!(decode_binary(&bytes).unwrap(), feed);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod binary;
mod decoder;
mod encoder;
mod error;
mod model;
mod text;
mod value;

pub use binary::{decode_binary, encode_binary, FORMAT_VERSION};
pub use decoder::{from_cbor, CanonicalDecoder};
pub use encoder::{to_canonical_cbor, CanonicalEncoder};
pub use error::{CodecError, CodecResult};
pub use model::{Feed, Link};
pub use text::{decode_text, encode_text};
pub use value::Value;
