// crates/feed-parser/tests/integration_tests.rs
//! Integration tests for feed parser

use pretty_assertions::assert_eq;
use syndic_feed_parser::{FeedParser, FeedType};

#[test]
fn test_parse_complex_rss_feed() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>The Weekly Dispatch</title>
    <description>News from the city desk</description>
    <link>https://example.com/dispatch</link>
    <language>en-us</language>
    <managingEditor>editor@example.com (Ed)</managingEditor>
    <dc:creator>Not the channel author</dc:creator>

    <item>
      <title>Council approves new budget</title>
      <description>The council voted on Monday evening...</description>
      <link>https://example.com/budget</link>
      <guid>https://example.com/budget</guid>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/budget.pdf" type="application/pdf" length="100000"/>
      <author>Jane Doe</author>
    </item>

    <item>
      <title>Bridge reopens after repairs</title>
      <description>Traffic resumed early Tuesday...</description>
      <pubDate>Tue, 02 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/bridge.jpg" type="image/jpeg" length="95000"/>
    </item>
  </channel>
</rss>"#;

    let feed = FeedParser::new().parse_str(rss).expect("Should parse complex RSS");

    assert_eq!(feed.feed_type, FeedType::Rss);
    assert_eq!(feed.title, "The Weekly Dispatch");
    assert_eq!(feed.description, "News from the city desk");
    assert_eq!(feed.link, "https://example.com/dispatch");
    assert_eq!(feed.author, "editor@example.com (Ed)");
    assert_eq!(feed.item_count(), 2);

    // Newest first
    let latest = feed.latest().expect("has items");
    assert_eq!(latest.title, "Bridge reopens after repairs");
    assert_eq!(latest.attachment, "https://example.com/bridge.jpg");

    let oldest = &feed.items[1];
    assert_eq!(oldest.title, "Council approves new budget");
    assert_eq!(oldest.id, "https://example.com/budget");
    assert_eq!(oldest.link, "https://example.com/budget");
    assert_eq!(oldest.author, "Jane Doe");
    assert!(oldest.content.starts_with("The council voted"));
}

#[test]
fn test_parse_complex_atom_feed() {
    let atom = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="en">
  <title type="text">Atom Release Feed</title>
  <subtitle>Releases in Atom format</subtitle>
  <link rel="self" type="application/atom+xml" href="http://example.com/atom.xml"/>
  <link rel="alternate" type="text/html" href="http://example.com/"/>
  <updated>2024-01-02T12:00:00Z</updated>
  <logo>http://example.com/logo.png</logo>
  <icon>http://example.com/icon.png</icon>
  <entry>
    <title>Release 0.9</title>
    <link href="http://example.com/releases/0.9"/>
    <link rel="enclosure" type="application/gzip" href="http://example.com/dist/0.9.tar.gz"/>
    <id>urn:uuid:1234</id>
    <published>2024-01-01T12:00:00Z</published>
    <updated>2024-01-03T12:00:00Z</updated>
    <summary>First public preview</summary>
  </entry>
  <entry>
    <title>Release 1.0</title>
    <link rel="self" href="http://example.com/releases/1.0.atom"/>
    <link rel="alternate" type="text/html" href="http://example.com/releases/1.0"/>
    <id>urn:uuid:1235</id>
    <updated>2024-01-02T12:00:00+00:00</updated>
  </entry>
</feed>"#;

    let feed = FeedParser::new().parse_str(atom).expect("Should parse Atom");

    assert_eq!(feed.feed_type, FeedType::Atom);
    assert_eq!(feed.title, "Atom Release Feed");
    assert_eq!(feed.description, "Releases in Atom format");
    assert_eq!(feed.link, "http://example.com/");
    assert_eq!(feed.image, "http://example.com/logo.png");

    let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Release 1.0", "Release 0.9"]);

    assert_eq!(feed.items[0].link, "http://example.com/releases/1.0");
    assert!(!feed.items[0].has_attachment());
    assert_eq!(feed.items[1].link, "http://example.com/releases/0.9");
    assert_eq!(feed.items[1].attachment, "http://example.com/dist/0.9.tar.gz");
    assert_eq!(feed.items[1].content, "First public preview");
}

/// Encodes ASCII-plus-Latin-1 text one byte per char
fn latin1(text: &str) -> Vec<u8> {
    text.chars().map(|c| u8::try_from(u32::from(c)).unwrap()).collect()
}

#[test]
fn test_latin1_feed_is_transcoded() {
    let bytes = latin1(
        r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<rss version="2.0"><channel><title>Café Müller</title>
<item><title>Straße</title><pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate></item>
</channel></rss>"#,
    );
    assert!(std::str::from_utf8(&bytes).is_err());

    let feed = FeedParser::new().parse(&bytes).expect("Should transcode Latin-1");
    assert_eq!(feed.title, "Café Müller");
    assert_eq!(feed.items[0].title, "Straße");
}

#[test]
fn test_windows_1252_label() {
    let mut bytes = br#"<?xml version="1.0" encoding="windows-1252"?><rss><channel><title>"#.to_vec();
    bytes.push(0x93);
    bytes.extend_from_slice(b"quoted");
    bytes.push(0x94);
    bytes.extend_from_slice(b"</title></channel></rss>");

    let feed = FeedParser::new().parse(&bytes).unwrap();
    assert_eq!(feed.title, "\u{201C}quoted\u{201D}");
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let bytes = b"<rss><channel><title>\xFF\xFE</title></channel></rss>";
    let err = FeedParser::new().parse(bytes).unwrap_err();
    assert!(err.is_unknown_format());
    assert!(err.last_attempt().is_some_and(|e| e.is_malformed()));
}

#[test]
fn test_html_entities_and_cdata() {
    let rss = r#"<rss><channel><title>Tom &amp; Jerry&#8217;s</title>
      <item>
        <title>Ep</title>
        <description><![CDATA[<p>Some <b>HTML</b></p>]]></description>
        <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      </item></channel></rss>"#;

    let feed = FeedParser::new().parse_str(rss).unwrap();
    assert_eq!(feed.title, "Tom & Jerry\u{2019}s");
    assert_eq!(feed.items[0].content, "<p>Some <b>HTML</b></p>");
}

#[test]
fn test_feed_serializes_to_json() {
    let rss = r#"<rss><channel><title>JSON</title>
      <item><title>A</title><pubDate>2024-01-01T00:00:00Z</pubDate></item>
    </channel></rss>"#;

    let feed = FeedParser::new().parse_str(rss).unwrap();
    let value = serde_json::to_value(&feed).unwrap();

    assert_eq!(value["type"], "rss");
    assert_eq!(value["title"], "JSON");
    assert_eq!(value["items"][0]["title"], "A");
    assert_eq!(value["items"][0]["published"], "2024-01-01T00:00:00Z");
}

#[test]
fn test_mixed_date_layouts_sort_consistently() {
    let rss = r#"<rss><channel><title>Dates</title>
      <item><title>rfc3339</title><pubDate>2024-01-02T00:00:00+02:00</pubDate></item>
      <item><title>rfc1123</title><pubDate>Mon, 01 Jan 2024 23:00:00 GMT</pubDate></item>
      <item><title>named</title><pubDate>Mon, 01 Jan 2024 20:00:00 EST</pubDate></item>
    </channel></rss>"#;

    let feed = FeedParser::new().parse_str(rss).unwrap();
    let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_str()).collect();
    // named = 2024-01-02T01:00Z, rfc1123 = 2024-01-01T23:00Z, rfc3339 = 2024-01-01T22:00Z
    assert_eq!(titles, vec!["named", "rfc1123", "rfc3339"]);
}
