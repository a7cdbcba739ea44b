//! # Linkleaf Storage
//!
//! Whole-file byte storage for Linkleaf feeds.
//!
//! Stores are **opaque byte stores**: they read and atomically replace entire
//! files and never interpret the bytes they hold.
//!
//! ## Design Principles
//!
//! - A file on disk is always either the old or the new version, never torn
//! - Temp files live next to their target so the final rename stays on one
//!   file system
//! - No locking: concurrent writers race and the last rename wins
//!
//! ## Available Stores
//!
//! - [`FileStore`] - Atomic write-then-rename on the local file system
//! - [`InMemoryStore`] - For testing
//!
//! ## Example
//!
//! ```rust
//! use linkleaf_storage::{FeedStore, InMemoryStore};
//! use std::path::Path;
//!
//! let store = InMemoryStore::new();
//! store.write(Path::new("links.bin"), b"hello world").unwrap();
//! assert_eq!(store.read(Path::new("links.bin")).unwrap(), b"hello world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod memory;
mod store;

pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
pub use file::{FileStore, PendingWrite, TEMP_PREFIX};
pub use memory::InMemoryStore;
pub use store::FeedStore;
