//! Export and import between the binary feed and its JSON text form.

use super::CliError;
use linkleaf_core::FeedRepository;
use linkleaf_storage::{FeedStore, FileStore};
use std::io::Write;
use std::path::Path;

/// Writes the feed at `path` as JSON, to `output` if given or else to `out`.
pub fn export(path: &Path, output: Option<&Path>, out: &mut impl Write) -> Result<(), CliError> {
    let repo = FeedRepository::new();
    let text = repo.export_text(path)?;

    match output {
        Some(target) => {
            repo.store().write(target, &text)?;
            writeln!(out, "exported {} to {}", path.display(), target.display())?;
        }
        None => out.write_all(&text)?,
    }
    Ok(())
}

/// Replaces the feed at `path` with the JSON read from `input`.
pub fn import(input: &Path, path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let text = FileStore::new().read(input)?;
    let feed = FeedRepository::new().import_text(path, &text)?;
    writeln!(out, "imported {} links into {}", feed.links.len(), path.display())?;
    Ok(())
}
