//! List command implementation.

use super::CliError;
use crate::format::wrap;
use linkleaf_core::{list, Feed, FeedRepository};
use std::io::Write;
use std::path::Path;

const SUMMARY_WIDTH: usize = 76;
const INDENT: &str = "     ";

/// Prints a numbered listing of the feed at `path`.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let feed = FeedRepository::new().load(path)?;
    render(&feed, out)?;
    Ok(())
}

fn render(feed: &Feed, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Feed: {:?}  (version={}, generated_at={})",
        feed.title, feed.version, feed.generated_at
    )?;

    for link in list(feed) {
        writeln!(out, "{:3}) [{}] {}", link.position, link.id, link.title)?;
        writeln!(out, "{INDENT}{}", link.url)?;
        writeln!(out, "{INDENT}date={} tags={}", link.date, link.tags.join(","))?;
        if let Some(summary) = link.summary.filter(|s| !s.trim().is_empty()) {
            writeln!(out, "{}", wrap(summary, SUMMARY_WIDTH, INDENT))?;
        }
        if let Some(via) = link.via.filter(|v| !v.is_empty()) {
            writeln!(out, "{INDENT}via: {via}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkleaf_core::Link;

    fn feed() -> Feed {
        Feed {
            version: 1,
            title: "Reading".to_string(),
            generated_at: "2025-08-18T09:30:00Z".to_string(),
            links: vec![
                Link {
                    id: "037614d4e642".to_string(),
                    title: "Blog post".to_string(),
                    url: "https://example.org/bp".to_string(),
                    summary: Some("Short note".to_string()),
                    tags: vec!["rust".to_string(), "cli".to_string()],
                    date: "2025-08-18".to_string(),
                    via: Some("https://lobste.rs".to_string()),
                },
                Link {
                    id: "aaaaaaaaaaaa".to_string(),
                    title: "Older".to_string(),
                    url: "https://example.org/old".to_string(),
                    date: "2025-08-01".to_string(),
                    ..Link::default()
                },
            ],
        }
    }

    fn rendered(feed: &Feed) -> String {
        let mut out = Vec::new();
        render(feed, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_header_and_links() {
        let expected = "\
Feed: \"Reading\"  (version=1, generated_at=2025-08-18T09:30:00Z)
  1) [037614d4e642] Blog post
     https://example.org/bp
     date=2025-08-18 tags=rust,cli
     Short note
     via: https://lobste.rs
  2) [aaaaaaaaaaaa] Older
     https://example.org/old
     date=2025-08-01 tags=
";
        assert_eq!(rendered(&feed()), expected);
    }

    #[test]
    fn long_summary_is_wrapped_under_the_link() {
        let mut feed = feed();
        feed.links[0].summary = Some("word ".repeat(40));

        let text = rendered(&feed);
        let summary_lines: Vec<_> = text.lines().filter(|l| l.contains("word")).collect();
        assert!(summary_lines.len() > 1);
        for line in summary_lines {
            assert!(line.starts_with(INDENT));
            assert!(line.len() <= INDENT.len() + SUMMARY_WIDTH);
        }
    }

    #[test]
    fn empty_feed_prints_header_only() {
        let text = rendered(&Feed::default());
        assert_eq!(text, "Feed: \"\"  (version=0, generated_at=)\n");
    }
}
