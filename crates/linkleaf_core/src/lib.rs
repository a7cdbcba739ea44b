//! # Linkleaf Core
//!
//! Feed repository for Linkleaf link feeds.
//!
//! This crate provides:
//! - [`FeedRepository`]: create, load, append, save and text import/export
//! - [`NewLink`]: validated construction of new links
//! - [`id`]: deterministic link ids derived from url and date
//! - [`Clock`]: injectable time source for `generated_at`
//! - [`CoreError`] with a four-way [`ErrorKind`] classification
//!
//! Feeds are persisted only in the canonical binary form from
//! [`linkleaf_codec`], through the atomic stores in [`linkleaf_storage`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod error;
pub mod id;
mod model;
mod repository;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use model::{list, LinkSummary, NewLink};
pub use repository::FeedRepository;

pub use linkleaf_codec::{Feed, Link};
