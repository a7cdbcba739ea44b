//! Deterministic link identifiers.
//!
//! A derived id is the first 12 hex characters (48 bits) of
//! `SHA-256(url + "|" + date)`. Ids are not checked for uniqueness and
//! collisions are not retried; two links with the same url and date share
//! an id.

use sha2::{Digest, Sha256};

/// Length of a derived id in hex characters.
pub const ID_LEN: usize = 12;

/// Derives the id of a link from its url and date.
#[must_use]
pub fn derive(url: &str, date: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(b"|");
    hasher.update(date.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(ID_LEN);
    hex
}

/// Returns `explicit` when it is non-blank, otherwise the derived id.
#[must_use]
pub fn resolve(explicit: Option<&str>, url: &str, date: &str) -> String {
    match explicit {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => derive(url, date),
    }
}
