//! Feed-level operations over a store, a codec and a clock.
//!
//! Every operation works on the whole feed: it is loaded in full, optionally
//! changed, and written back in full. No feed value outlives a call.
//!
//! `create` and `append` deliberately differ when a file already exists:
//!
//! | operation     | file missing          | file present              |
//! |---------------|-----------------------|---------------------------|
//! | `create`      | writes an empty feed  | **overwrites** it         |
//! | `append`      | starts a version-0 feed | merges into it          |
//! | `import_text` | writes the imported feed | **overwrites** it      |

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::id;
use crate::model::{missing_required, NewLink};
use linkleaf_codec::{decode_binary, decode_text, encode_binary, encode_text, Feed};
use linkleaf_storage::{FeedStore, FileStore};
use std::path::Path;
use tracing::{debug, info};

/// Loads, mutates and persists feeds.
///
/// # Example
///
/// ```no_run
/// use linkleaf_core::{FeedRepository, NewLink};
/// use std::path::Path;
///
/// let repo = FeedRepository::new();
/// let path = Path::new("feed.bin");
/// repo.create(path, "My Links", 1)?;
/// let (_, id) = repo.append(path, NewLink::new("Rust", "https://rust-lang.org", "2025-08-18"))?;
/// println!("added {id}");
/// # Ok::<(), linkleaf_core::CoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct FeedRepository<S = FileStore, C = SystemClock> {
    store: S,
    clock: C,
}

impl FeedRepository {
    /// Creates a repository over the local file system and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: FeedStore, C: Clock> FeedRepository<S, C> {
    /// Creates a repository from a store and a clock.
    #[must_use]
    pub fn with_parts(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes a new empty feed to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock value cannot be formatted or the
    /// write fails.
    pub fn create(&self, path: &Path, title: impl Into<String>, version: u32) -> CoreResult<Feed> {
        let feed = Feed {
            version,
            title: title.into(),
            generated_at: self.timestamp()?,
            links: Vec::new(),
        };
        self.save(path, &feed)?;
        info!(path = %path.display(), version, title = %feed.title, "created feed");
        Ok(feed)
    }

    /// Reads and decodes the feed at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`ErrorKind::NotFound`] if the file is
    /// missing and [`ErrorKind::Decode`] if it is not a valid feed.
    pub fn load(&self, path: &Path) -> CoreResult<Feed> {
        let bytes = self.store.read(path)?;
        let feed = decode_binary(&bytes)?;
        debug!(path = %path.display(), links = feed.links.len(), "loaded feed");
        Ok(feed)
    }

    /// Prepends a link to the feed at `path` and returns the updated feed
    /// with the id that was assigned.
    ///
    /// A missing file starts a fresh feed (version 0, empty title). A file
    /// that exists but does not decode is an error and is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the existing file
    /// cannot be read or decoded, or the write fails.
    pub fn append(&self, path: &Path, link: NewLink) -> CoreResult<(Feed, String)> {
        link.validate()?;

        let mut feed = match self.load(path) {
            Ok(feed) => feed,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no feed yet, starting a new one");
                Feed::default()
            }
            Err(e) => return Err(e),
        };

        let id = id::resolve(link.id.as_deref(), &link.url, &link.date);
        if link.id.as_deref().map_or(true, |explicit| explicit.trim().is_empty()) {
            debug!(id = %id, url = %link.url, date = %link.date, "derived link id");
        }

        feed.links.insert(0, link.into_link(id.clone()));
        feed.generated_at = self.timestamp()?;
        self.save(path, &feed)?;

        info!(path = %path.display(), id = %id, links = feed.links.len(), "appended link");
        Ok((feed, id))
    }

    /// Encodes `feed` and atomically replaces the file at `path`.
    ///
    /// The feed is written as given; `generated_at` is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, path: &Path, feed: &Feed) -> CoreResult<()> {
        self.store.write(path, &encode_binary(feed))?;
        Ok(())
    }

    /// Renders the feed at `path` in its editable text form.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::load`].
    pub fn export_text(&self, path: &Path) -> CoreResult<Vec<u8>> {
        let feed = self.load(path)?;
        Ok(encode_text(&feed)?)
    }

    /// Replaces the feed at `path` with one read from the text form.
    ///
    /// Links with a blank id get a derived one and `generated_at` is set to
    /// the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse, a link lacks a required
    /// field, or the write fails.
    pub fn import_text(&self, path: &Path, text: &[u8]) -> CoreResult<Feed> {
        let mut feed = decode_text(text)?;

        for (index, link) in feed.links.iter_mut().enumerate() {
            if let Some(field) = missing_required(&link.title, &link.url, &link.date) {
                return Err(CoreError::InvalidLink {
                    position: index + 1,
                    field,
                });
            }
            if link.id.trim().is_empty() {
                link.id = id::derive(&link.url, &link.date);
                debug!(id = %link.id, url = %link.url, "backfilled link id");
            }
        }

        feed.generated_at = self.timestamp()?;
        self.save(path, &feed)?;
        info!(path = %path.display(), links = feed.links.len(), "imported feed");
        Ok(feed)
    }

    fn timestamp(&self) -> CoreResult<String> {
        format_timestamp(self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::list;
    use linkleaf_storage::InMemoryStore;
    use time::macros::datetime;
    use time::Duration;

    fn repo() -> FeedRepository<InMemoryStore, FixedClock> {
        FeedRepository::with_parts(
            InMemoryStore::new(),
            FixedClock::new(datetime!(2025-08-18 09:30:00 UTC)),
        )
    }

    #[test]
    fn unformattable_clock_fails_without_writing() {
        let at = time::Date::from_calendar_date(-1, time::Month::January, 1)
            .unwrap()
            .midnight()
            .assume_utc();
        let repo = FeedRepository::with_parts(InMemoryStore::new(), FixedClock::new(at));
        let path = Path::new("feed.bin");

        let err = repo.create(path, "t", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(repo.store().is_empty());
    }

    fn link(title: &str, url: &str) -> NewLink {
        NewLink::new(title, url, "2025-08-18")
    }

    #[test]
    fn create_then_load() {
        let repo = repo();
        let path = Path::new("feed.bin");

        let created = repo.create(path, "My Links", 1).unwrap();
        let loaded = repo.load(path).unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.title, "My Links");
        assert_eq!(loaded.generated_at, "2025-08-18T09:30:00Z");
        assert!(loaded.links.is_empty());
    }

    #[test]
    fn create_overwrites_existing_feed() {
        let repo = repo();
        let path = Path::new("feed.bin");
        repo.append(path, link("A", "https://a")).unwrap();

        let feed = repo.create(path, "Fresh", 7).unwrap();

        assert!(feed.links.is_empty());
        assert_eq!(repo.load(path).unwrap().title, "Fresh");
    }

    #[test]
    fn load_missing_is_not_found() {
        let err = repo().load(Path::new("absent.bin")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn load_corrupted_is_decode_error() {
        let store = InMemoryStore::with_file("bad.bin", vec![0xa5, 0x61, b'a']);
        let repo = FeedRepository::with_parts(store, FixedClock::new(datetime!(2025-01-01 0:00 UTC)));

        let err = repo.load(Path::new("bad.bin")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn append_prepends() {
        let repo = repo();
        let path = Path::new("feed.bin");
        repo.create(path, "t", 1).unwrap();

        repo.append(path, link("B", "https://b")).unwrap();
        repo.append(path, link("A", "https://a")).unwrap();
        let (feed, _) = repo.append(path, link("C", "https://c")).unwrap();

        let titles: Vec<_> = feed.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        assert_eq!(repo.load(path).unwrap(), feed);
    }

    #[test]
    fn append_derives_id_when_absent() {
        let repo = repo();
        let new_link = NewLink::new("Best Practices", "https://example.org/bp", "2025-08-18")
            .tags(["protobuf", "design"]);

        let (feed, id) = repo.append(Path::new("feed.bin"), new_link).unwrap();

        assert_eq!(id, "037614d4e642");
        assert_eq!(feed.links[0].id, id);
        assert_eq!(feed.links[0].tags, vec!["protobuf", "design"]);
    }

    #[test]
    fn append_keeps_explicit_id() {
        let (_, id) = repo()
            .append(Path::new("feed.bin"), link("A", "https://a").id("mine"))
            .unwrap();
        assert_eq!(id, "mine");
    }

    #[test]
    fn append_same_link_twice_shares_id() {
        let repo = repo();
        let path = Path::new("feed.bin");

        let (_, first) = repo.append(path, link("A", "https://a")).unwrap();
        let (feed, second) = repo.append(path, link("A again", "https://a")).unwrap();

        assert_eq!(first, second);
        assert_eq!(feed.links.len(), 2);
    }

    #[test]
    fn append_to_missing_file_starts_fresh_feed() {
        let repo = repo();
        let path = Path::new("new.bin");

        let (feed, _) = repo.append(path, link("A", "https://a")).unwrap();

        assert_eq!(feed.version, 0);
        assert_eq!(feed.title, "");
        assert_eq!(feed.links.len(), 1);
        assert!(repo.store().contains(path));
    }

    #[test]
    fn append_refuses_missing_fields() {
        let repo = repo();
        let path = Path::new("feed.bin");

        let err = repo.append(path, NewLink::new("t", "", "2025-01-01")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!repo.store().contains(path));
    }

    #[test]
    fn append_does_not_clobber_corrupted_file() {
        let store = InMemoryStore::with_file("bad.bin", b"not cbor at all".to_vec());
        let repo = FeedRepository::with_parts(store, FixedClock::new(datetime!(2025-01-01 0:00 UTC)));
        let path = Path::new("bad.bin");

        let err = repo.append(path, link("A", "https://a")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(repo.store().read(path).unwrap(), b"not cbor at all");
    }

    #[test]
    fn mutations_refresh_timestamp_reads_do_not() {
        let repo = repo();
        let path = Path::new("feed.bin");

        let created = repo.create(path, "t", 1).unwrap();
        repo.clock.advance(Duration::minutes(5));

        let loaded = repo.load(path).unwrap();
        let _ = list(&loaded);
        assert_eq!(repo.load(path).unwrap().generated_at, created.generated_at);

        let (appended, _) = repo.append(path, link("A", "https://a")).unwrap();
        assert_eq!(appended.generated_at, "2025-08-18T09:35:00Z");
        assert!(appended.generated_at > created.generated_at);
    }

    #[test]
    fn save_writes_feed_as_given() {
        let repo = repo();
        let path = Path::new("feed.bin");
        let feed = Feed {
            version: 4,
            title: "t".to_string(),
            generated_at: "2000-01-01T00:00:00Z".to_string(),
            links: Vec::new(),
        };

        repo.save(path, &feed).unwrap();

        assert_eq!(repo.load(path).unwrap(), feed);
    }

    #[test]
    fn export_text_is_read_only() {
        let repo = repo();
        let path = Path::new("feed.bin");
        repo.append(path, link("A", "https://a")).unwrap();
        let before = repo.store().read(path).unwrap();

        let text = repo.export_text(path).unwrap();

        assert_eq!(decode_text(&text).unwrap(), repo.load(path).unwrap());
        assert_eq!(repo.store().read(path).unwrap(), before);
    }

    #[test]
    fn import_text_backfills_ids_and_stamps_time() {
        let repo = repo();
        let path = Path::new("feed.bin");
        let text = br#"{
            "version": 2,
            "title": "Imported",
            "generated_at": "1999-01-01T00:00:00Z",
            "links": [
                {"id": "", "title": "BP", "url": "https://example.org/bp", "date": "2025-08-18"},
                {"id": "keep", "title": "K", "url": "https://k", "date": "2025-08-01", "extra": true}
            ]
        }"#;

        let feed = repo.import_text(path, text).unwrap();

        assert_eq!(feed.links[0].id, "037614d4e642");
        assert_eq!(feed.links[1].id, "keep");
        assert_eq!(feed.generated_at, "2025-08-18T09:30:00Z");
        assert_eq!(repo.load(path).unwrap(), feed);
    }

    #[test]
    fn import_text_rejects_incomplete_links() {
        let repo = repo();
        let path = Path::new("feed.bin");
        let text = br#"{"links": [{"title": "a", "url": "u", "date": "d"}, {"title": "b"}]}"#;

        let err = repo.import_text(path, text).unwrap_err();

        assert!(matches!(err, CoreError::InvalidLink { position: 2, field: "url" }));
        assert!(!repo.store().contains(path));
    }

    #[test]
    fn import_text_rejects_malformed_json() {
        let err = repo().import_text(Path::new("feed.bin"), b"{").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
