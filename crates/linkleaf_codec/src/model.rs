//! Feed and link records.

use serde::{Deserialize, Serialize};

/// A feed: the root record persisted in one file.
///
/// Field declaration order is the key order of the text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    /// Caller-assigned version number, opaque to the codec.
    pub version: u32,
    /// Feed title, may be empty.
    pub title: String,
    /// RFC3339 UTC timestamp of the last modification.
    pub generated_at: String,
    /// Links, newest first.
    pub links: Vec<Link>,
}

/// One bookmarked resource inside a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Short identifier, unique by convention only.
    pub id: String,
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Optional summary. `Some("")` and `None` are distinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Labels in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Date in `YYYY-MM-DD` form, stored verbatim.
    pub date: String,
    /// Optional attribution (URL or free text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}
