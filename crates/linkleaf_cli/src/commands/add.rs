//! Add command implementation.

use super::CliError;
use linkleaf_core::{FeedRepository, NewLink};
use std::io::Write;
use std::path::Path;

/// Prepends `link` to the feed at `path`, creating the feed if needed.
pub fn run(path: &Path, link: NewLink, out: &mut impl Write) -> Result<(), CliError> {
    let title = link.title.clone();
    let (feed, id) = FeedRepository::new().append(path, link)?;
    tracing::debug!(links = feed.links.len(), "feed updated");
    writeln!(out, "added [{id}] {title}")?;
    Ok(())
}
