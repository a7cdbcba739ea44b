//! Editable text form of a feed (JSON).
//!
//! Keys are written in declaration order of [`Feed`] and [`Link`], so equal
//! feeds produce equal text. Reading is forgiving: unknown keys are ignored
//! and missing keys take their default values. The text form is a derived
//! view; the binary form stays the persisted source of truth.

use crate::error::CodecResult;
use crate::model::Feed;

/// Encode a feed as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_text(feed: &Feed) -> CodecResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(feed)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode a feed from JSON text, ignoring unrecognized fields.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or a known field has the
/// wrong type.
pub fn decode_text(bytes: &[u8]) -> CodecResult<Feed> {
    Ok(serde_json::from_slice(bytes)?)
}
