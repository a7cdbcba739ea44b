//! Init command implementation.

use super::CliError;
use linkleaf_core::FeedRepository;
use std::io::Write;
use std::path::Path;

/// Creates (or overwrites) the feed at `path`.
pub fn run(path: &Path, title: &str, version: u32, out: &mut impl Write) -> Result<(), CliError> {
    let feed = FeedRepository::new().create(path, title, version)?;
    writeln!(
        out,
        "initialized {} (version={}, title={:?})",
        path.display(),
        feed.version,
        feed.title
    )?;
    Ok(())
}
