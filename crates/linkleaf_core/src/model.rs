//! Link construction and read-only views.

use crate::error::{CoreError, CoreResult};
use linkleaf_codec::{Feed, Link};

/// Fields of a link about to be appended.
///
/// `title`, `url` and `date` are required; everything else is optional.
/// Values are stored verbatim: nothing is trimmed, and `date` is not checked
/// against the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLink {
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    /// Optional summary.
    pub summary: Option<String>,
    /// Labels in insertion order.
    pub tags: Vec<String>,
    /// Optional attribution.
    pub via: Option<String>,
    /// Explicit id; derived from url and date when absent or blank.
    pub id: Option<String>,
}

impl NewLink {
    /// Creates a link with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attribution.
    #[must_use]
    pub fn via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }

    /// Sets an explicit id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Checks that the required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming the first blank field among
    /// `title`, `url` and `date`.
    pub fn validate(&self) -> CoreResult<()> {
        match missing_required(&self.title, &self.url, &self.date) {
            Some(field) => Err(CoreError::MissingField { field }),
            None => Ok(()),
        }
    }

    pub(crate) fn into_link(self, id: String) -> Link {
        Link {
            id,
            title: self.title,
            url: self.url,
            summary: self.summary,
            tags: self.tags,
            date: self.date,
            via: self.via,
        }
    }
}

/// Returns the first blank required field, if any.
pub(crate) fn missing_required(title: &str, url: &str, date: &str) -> Option<&'static str> {
    [("title", title), ("url", url), ("date", date)]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
}

/// Borrowed view of one link for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSummary<'a> {
    /// 1-based position in the feed (1 is the newest link).
    pub position: usize,
    /// Link id.
    pub id: &'a str,
    /// Link title.
    pub title: &'a str,
    /// Target URL.
    pub url: &'a str,
    /// Link date.
    pub date: &'a str,
    /// Labels in insertion order.
    pub tags: &'a [String],
    /// Summary, if set.
    pub summary: Option<&'a str>,
    /// Attribution, if set.
    pub via: Option<&'a str>,
}

/// Projects a feed's links in stored order (newest first).
#[must_use]
pub fn list(feed: &Feed) -> Vec<LinkSummary<'_>> {
    feed.links
        .iter()
        .enumerate()
        .map(|(index, link)| LinkSummary {
            position: index + 1,
            id: &link.id,
            title: &link.title,
            url: &link.url,
            date: &link.date,
            tags: &link.tags,
            summary: link.summary.as_deref(),
            via: link.via.as_deref(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let link = NewLink::new("Title", "https://example.org", "2025-08-18")
            .summary("About things")
            .tags(["a", "b"])
            .via("https://news.example")
            .id("custom");

        assert_eq!(link.summary.as_deref(), Some("About things"));
        assert_eq!(link.tags, vec!["a", "b"]);
        assert_eq!(link.via.as_deref(), Some("https://news.example"));
        assert_eq!(link.id.as_deref(), Some("custom"));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        assert!(NewLink::new("t", "u", "d").validate().is_ok());

        let err = NewLink::new("", "", "d").validate().unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "title" }));

        let err = NewLink::new("t", "   ", "d").validate().unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "url" }));

        let err = NewLink::new("t", "u", "").validate().unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "date" }));
    }

    #[test]
    fn malformed_date_is_kept_verbatim() {
        let link = NewLink::new(" t ", "u", "2025-02-31");
        assert!(link.validate().is_ok());

        let stored = link.into_link("x".to_string());
        assert_eq!(stored.date, "2025-02-31");
        assert_eq!(stored.title, " t ");
    }

    #[test]
    fn list_preserves_order() {
        let feed = Feed {
            links: vec![
                NewLink::new("newest", "u1", "2025-02-01").into_link("a".to_string()),
                NewLink::new("older", "u2", "2025-01-01")
                    .summary("s")
                    .into_link("b".to_string()),
            ],
            ..Feed::default()
        };

        let summaries = list(&feed);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].position, 1);
        assert_eq!(summaries[0].title, "newest");
        assert_eq!(summaries[0].summary, None);
        assert_eq!(summaries[1].position, 2);
        assert_eq!(summaries[1].id, "b");
        assert_eq!(summaries[1].summary, Some("s"));
    }
}
