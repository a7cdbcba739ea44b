//! Canonical binary form of a feed.
//!
//! A feed is one canonical CBOR map:
//!
//! ```text
//! {
//!   "format": 1,            # encoding marker, not the feed's version
//!   "version": <uint>,
//!   "title": <text>,
//!   "generated_at": <text>,
//!   "links": [ <link>, ... ]
//! }
//! ```
//!
//! Each link is a map with `id`, `title`, `url` and `date` always present.
//! `summary` and `via` are present only when set, `tags` only when non-empty.
//!
//! Decoding is strict: unknown keys, wrong types and missing keys are errors.

use crate::decoder::from_cbor;
use crate::encoder::to_canonical_cbor;
use crate::error::{CodecError, CodecResult};
use crate::model::{Feed, Link};
use crate::value::Value;

/// Encoding marker written into every feed.
pub const FORMAT_VERSION: i64 = 1;

const FEED_FIELDS: &[&str] = &["format", "version", "title", "generated_at", "links"];
const LINK_FIELDS: &[&str] = &["id", "title", "url", "summary", "tags", "date", "via"];

/// Encode a feed to its canonical binary form.
///
/// Equal feeds always produce equal bytes.
pub fn encode_binary(feed: &Feed) -> Vec<u8> {
    to_canonical_cbor(&feed_to_value(feed))
}

/// Decode a feed from its canonical binary form.
///
/// # Errors
///
/// Returns an error if the bytes are not canonical CBOR, do not match the
/// feed schema, or carry an unsupported format marker.
pub fn decode_binary(bytes: &[u8]) -> CodecResult<Feed> {
    let value = from_cbor(bytes)?;
    feed_from_value(&value)
}

fn feed_to_value(feed: &Feed) -> Value {
    Value::map(vec![
        (Value::from("format"), Value::Integer(FORMAT_VERSION)),
        (Value::from("version"), Value::from(feed.version)),
        (Value::from("title"), Value::from(feed.title.as_str())),
        (
            Value::from("generated_at"),
            Value::from(feed.generated_at.as_str()),
        ),
        (
            Value::from("links"),
            Value::Array(feed.links.iter().map(link_to_value).collect()),
        ),
    ])
}

fn link_to_value(link: &Link) -> Value {
    let mut pairs = vec![
        (Value::from("id"), Value::from(link.id.as_str())),
        (Value::from("title"), Value::from(link.title.as_str())),
        (Value::from("url"), Value::from(link.url.as_str())),
        (Value::from("date"), Value::from(link.date.as_str())),
    ];
    if let Some(summary) = &link.summary {
        pairs.push((Value::from("summary"), Value::from(summary.as_str())));
    }
    if !link.tags.is_empty() {
        let tags = link.tags.iter().map(|t| Value::from(t.as_str())).collect();
        pairs.push((Value::from("tags"), Value::Array(tags)));
    }
    if let Some(via) = &link.via {
        pairs.push((Value::from("via"), Value::from(via.as_str())));
    }
    Value::map(pairs)
}

fn feed_from_value(value: &Value) -> CodecResult<Feed> {
    let fields = Fields::new("feed", value, FEED_FIELDS)?;

    let format = fields.required("format", Value::as_integer)?;
    if format != FORMAT_VERSION {
        return Err(CodecError::UnsupportedFormat {
            found: format,
            supported: FORMAT_VERSION,
        });
    }

    let version = fields.required("version", Value::as_integer)?;
    let version = u32::try_from(version)
        .map_err(|_| CodecError::schema(format!("feed version {version} out of range")))?;

    let links = fields
        .required("links", Value::as_array)?
        .iter()
        .map(link_from_value)
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(Feed {
        version,
        title: fields.required("title", Value::as_text)?.to_string(),
        generated_at: fields.required("generated_at", Value::as_text)?.to_string(),
        links,
    })
}

fn link_from_value(value: &Value) -> CodecResult<Link> {
    let fields = Fields::new("link", value, LINK_FIELDS)?;

    let tags = match fields.optional("tags", Value::as_array)? {
        Some(items) => items
            .iter()
            .map(|item| {
                item.as_text().map(str::to_string).ok_or_else(|| {
                    CodecError::schema(format!("link tag must be text, got {}", item.type_name()))
                })
            })
            .collect::<CodecResult<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Link {
        id: fields.required("id", Value::as_text)?.to_string(),
        title: fields.required("title", Value::as_text)?.to_string(),
        url: fields.required("url", Value::as_text)?.to_string(),
        summary: fields.optional("summary", Value::as_text)?.map(str::to_string),
        tags,
        date: fields.required("date", Value::as_text)?.to_string(),
        via: fields.optional("via", Value::as_text)?.map(str::to_string),
    })
}

/// Typed view over the text-keyed map of one record.
struct Fields<'a> {
    record: &'static str,
    map: &'a Value,
}

impl<'a> Fields<'a> {
    fn new(record: &'static str, value: &'a Value, known: &[&str]) -> CodecResult<Self> {
        let pairs = value.as_map().ok_or_else(|| {
            CodecError::schema(format!("{record} must be a map, got {}", value.type_name()))
        })?;
        for (key, _) in pairs {
            match key.as_text() {
                Some(name) if known.contains(&name) => {}
                Some(name) => {
                    return Err(CodecError::schema(format!(
                        "unknown field `{name}` in {record}"
                    )))
                }
                None => {
                    return Err(CodecError::schema(format!(
                        "{record} key must be text, got {}",
                        key.type_name()
                    )))
                }
            }
        }
        Ok(Self { record, map: value })
    }

    fn optional<T>(
        &self,
        key: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CodecResult<Option<T>> {
        match self.map.get(key) {
            Some(value) => extract(value).map(Some).ok_or_else(|| {
                CodecError::schema(format!(
                    "{}.{key} has unexpected type {}",
                    self.record,
                    value.type_name()
                ))
            }),
            None => Ok(None),
        }
    }

    fn required<T>(
        &self,
        key: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CodecResult<T> {
        self.optional(key, extract)?
            .ok_or_else(|| CodecError::schema(format!("missing field `{key}` in {}", self.record)))
    }
}
