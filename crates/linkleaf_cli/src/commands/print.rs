//! Print command implementation.

use super::CliError;
use linkleaf_core::{Feed, FeedRepository};
use std::io::Write;
use std::path::Path;

/// Dumps the feed at `path` as plain key/value text.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let feed = FeedRepository::new().load(path)?;
    render(&feed, out)?;
    Ok(())
}

fn render(feed: &Feed, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "FEED")?;
    writeln!(out, "----")?;
    writeln!(out, "version: {}", feed.version)?;
    writeln!(out, "title: {}", feed.title)?;
    writeln!(out, "generated_at: {}", feed.generated_at)?;
    writeln!(out, "links: {}", feed.links.len())?;
    writeln!(out)?;

    for link in &feed.links {
        writeln!(out, "- id: {}", link.id)?;
        writeln!(out, "  title: {}", link.title)?;
        writeln!(out, "  url: {}", link.url)?;
        writeln!(out, "  date: {}", link.date)?;
        if !link.tags.is_empty() {
            writeln!(out, "  tags: {}", link.tags.join(", "))?;
        }
        if let Some(summary) = &link.summary {
            writeln!(out, "  summary: {summary}")?;
        }
        if let Some(via) = &link.via {
            writeln!(out, "  via: {via}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkleaf_core::Link;

    #[test]
    fn dumps_every_field() {
        let feed = Feed {
            version: 2,
            title: "Reading".to_string(),
            generated_at: "2025-08-18T09:30:00Z".to_string(),
            links: vec![Link {
                id: "037614d4e642".to_string(),
                title: "Blog post".to_string(),
                url: "https://example.org/bp".to_string(),
                summary: Some("Short note".to_string()),
                tags: vec!["rust".to_string(), "cli".to_string()],
                date: "2025-08-18".to_string(),
                via: None,
            }],
        };
        let mut out = Vec::new();
        render(&feed, &mut out).unwrap();

        let expected = "\
FEED
----
version: 2
title: Reading
generated_at: 2025-08-18T09:30:00Z
links: 1

- id: 037614d4e642
  title: Blog post
  url: https://example.org/bp
  date: 2025-08-18
  tags: rust, cli
  summary: Short note

";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
