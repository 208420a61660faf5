// crates/feed-parser/tests/parser_tests.rs
//! Dispatcher behavior through the public API

use syndic_feed_parser::{
    parse_with, AtomAdapter, DateNormalizer, FeedAdapter, FeedError, FeedParser, FeedType,
    RssAdapter,
};

const MINIMAL_RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Minimal</title>
    <item>
      <title>Only item</title>
      <enclosure url="http://example.com/file.zip" type="application/zip" length="1000"/>
      <pubDate>Thu, 27 Feb 2014 18:46:18 +0100</pubDate>
    </item>
  </channel>
</rss>"#;

const MINIMAL_ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Minimal Atom</title>
  <updated>2014-02-27T17:46:18Z</updated>
  <entry>
    <title>Only entry</title>
    <id>urn:uuid:1234</id>
    <updated>2014-02-27T17:46:18Z</updated>
  </entry>
</feed>"#;

#[test]
fn test_minimal_rss_with_enclosure() {
    let feed = FeedParser::new().parse(MINIMAL_RSS.as_bytes()).expect("Should parse RSS");

    assert_eq!(feed.feed_type, FeedType::Rss);
    assert_eq!(feed.item_count(), 1);
    assert_eq!(feed.items[0].attachment, "http://example.com/file.zip");
    assert_eq!(feed.items[0].published.timestamp(), 1393523178);
}

#[test]
fn test_minimal_atom_updated_only() {
    let feed = FeedParser::new().parse(MINIMAL_ATOM.as_bytes()).expect("Should parse Atom");

    assert_eq!(feed.feed_type, FeedType::Atom);
    assert_eq!(feed.item_count(), 1);
    assert_eq!(Some(feed.items[0].published), feed.updated);
    assert_eq!(feed.items[0].published.timestamp(), 1393523178);
}

#[test]
fn test_empty_buffer_is_unknown_format() {
    let err = FeedParser::new().parse(&[]).unwrap_err();
    assert!(matches!(err, FeedError::UnknownFeedFormat { .. }));
    assert_eq!(err.to_string(), "Unknown feed format");
}

#[test]
fn test_unknown_format_keeps_last_error() {
    let err = FeedParser::new()
        .parse_str("<opml version=\"2.0\"><head/></opml>")
        .unwrap_err();

    let last = err.last_attempt().expect("last adapter error is kept");
    assert!(last.is_malformed());
    // The Atom adapter ran last
    assert!(last.to_string().contains("Atom"));
}

#[test]
fn test_date_error_surfaces_through_last_attempt() {
    let rss = r#"<rss><channel><title>t</title>
        <item><pubDate>Die, 42 Feb 1842</pubDate></item></channel></rss>"#;

    let parser = FeedParser::from_kinds(&[FeedType::Rss], DateNormalizer::default());
    let err = parser.parse_str(rss).unwrap_err();
    match err.last_attempt() {
        Some(FeedError::DateFormatUnrecognized { input, .. }) => {
            assert_eq!(input, "Die, 42 Feb 1842");
        }
        other => panic!("unexpected last attempt: {other:?}"),
    }
}

#[test]
fn test_date_error_survives_default_adapter_order() {
    let rss = r#"<rss><channel><title>t</title>
        <item><pubDate>Die, 42 Feb 1842</pubDate></item></channel></rss>"#;

    let err = FeedParser::new().parse_str(rss).unwrap_err();
    assert!(err.is_unknown_format());
    match err.last_attempt() {
        Some(FeedError::DateFormatUnrecognized { input, .. }) => {
            assert_eq!(input, "Die, 42 Feb 1842");
        }
        other => panic!("unexpected last attempt: {other:?}"),
    }
}

#[test]
fn test_wrong_weekday_does_not_lose_the_feed() {
    let rss = r#"<rss version="2.0"><channel><title>t</title>
        <item><title>a</title><pubDate>Thu, 27 Feb 2014 18:46:18 +0100</pubDate></item>
        <item><title>b</title><pubDate>Mon, 27 Feb 2014 19:46:18 +0100</pubDate></item>
      </channel></rss>"#;

    let feed = FeedParser::new().parse_str(rss).expect("Should parse");
    assert_eq!(feed.item_count(), 2);
    assert_eq!(feed.items[0].title, "b");
    assert_eq!(feed.items[0].published.timestamp(), 1393526778);
}

#[test]
fn test_adapter_order_is_respected() {
    let atom_only = FeedParser::from_kinds(&[FeedType::Atom], DateNormalizer::default());
    assert!(atom_only.parse_str(MINIMAL_RSS).is_err());
    assert!(atom_only.parse_str(MINIMAL_ATOM).is_ok());

    let reversed = FeedParser::from_kinds(&[FeedType::Atom, FeedType::Rss], DateNormalizer::default());
    assert_eq!(reversed.feed_types(), vec![FeedType::Atom, FeedType::Rss]);
    assert_eq!(reversed.parse_str(MINIMAL_RSS).unwrap().feed_type, FeedType::Rss);
}

#[test]
fn test_parse_with_known_format() {
    let rss = RssAdapter::new();
    let feed = parse_with(MINIMAL_RSS.as_bytes(), &[&rss]).expect("Should parse");
    assert_eq!(feed.title, "Minimal");

    let atom = AtomAdapter::new();
    assert!(parse_with(MINIMAL_RSS.as_bytes(), &[&atom]).is_err());
}

#[test]
fn test_adapters_parse_bytes_directly() {
    assert_eq!(RssAdapter::new().parse(MINIMAL_RSS.as_bytes()).unwrap().item_count(), 1);
    assert!(RssAdapter::new().parse(MINIMAL_ATOM.as_bytes()).unwrap_err().is_malformed());
}

#[test]
fn test_reference_offset_applies_to_zoneless_dates() {
    let rss = r#"<rss><channel><title>t</title>
        <item><pubDate>2014-02-27 18:46:18</pubDate></item></channel></rss>"#;

    let plus_one = chrono::FixedOffset::east_opt(3600).unwrap();
    let parser = FeedParser::from_kinds(&FeedType::ALL, DateNormalizer::with_reference_offset(plus_one));
    let feed = parser.parse_str(rss).unwrap();
    assert_eq!(feed.items[0].published.timestamp(), 1393523178);
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(FeedParser::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse_str(MINIMAL_RSS).map(|f| f.item_count()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 1);
    }
}
