//! Property tests for both feed encodings.

use linkleaf_codec::{decode_binary, decode_text, encode_binary, encode_text, Feed, Link};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~é漢]{0,24}").expect("Invalid regex")
}

fn link_strategy() -> impl Strategy<Value = Link> {
    (
        prop::string::string_regex("[0-9a-f]{12}").expect("Invalid regex"),
        text_strategy(),
        text_strategy(),
        prop::option::of(text_strategy()),
        prop::collection::vec(text_strategy(), 0..4),
        prop::string::string_regex("[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Invalid regex"),
        prop::option::of(text_strategy()),
    )
        .prop_map(|(id, title, url, summary, tags, date, via)| Link {
            id,
            title,
            url,
            summary,
            tags,
            date,
            via,
        })
}

fn feed_strategy() -> impl Strategy<Value = Feed> {
    (
        any::<u32>(),
        text_strategy(),
        text_strategy(),
        prop::collection::vec(link_strategy(), 0..6),
    )
        .prop_map(|(version, title, generated_at, links)| Feed {
            version,
            title,
            generated_at,
            links,
        })
}

proptest! {
    #[test]
    fn binary_roundtrip(feed in feed_strategy()) {
        let bytes = encode_binary(&feed);
        prop_assert_eq!(decode_binary(&bytes).unwrap(), feed);
    }

    #[test]
    fn binary_encoding_is_deterministic(feed in feed_strategy()) {
        prop_assert_eq!(encode_binary(&feed), encode_binary(&feed.clone()));
    }

    #[test]
    fn text_roundtrip(feed in feed_strategy()) {
        let bytes = encode_text(&feed).unwrap();
        prop_assert_eq!(decode_text(&bytes).unwrap(), feed);
    }

    #[test]
    fn truncated_binary_never_decodes(feed in feed_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = encode_binary(&feed);
        let len = cut.index(bytes.len());
        prop_assert!(decode_binary(&bytes[..len]).is_err());
    }
}
