// crates/feed-parser/examples/parse_feed.rs
//! Example of normalizing RSS and Atom feeds

use syndic_feed_parser::{parse_instant, Feed, FeedParser};

fn main() {
    println!("=== Syndic Feed Parser Demo ===\n");

    println!("Example 1: RSS 2.0 Feed");
    println!("{}", "=".repeat(60));
    parse_rss_example();

    println!("\n");

    println!("Example 2: Atom Feed");
    println!("{}", "=".repeat(60));
    parse_atom_example();

    println!("\n");

    println!("Example 3: Date normalization");
    println!("{}", "=".repeat(60));
    date_example();
}

fn print_feed(feed: &Feed) {
    println!("Feed: {} ({})", feed.title, feed.feed_type);
    if !feed.description.is_empty() {
        println!("Description: {}", feed.description);
    }
    if !feed.link.is_empty() {
        println!("Link: {}", feed.link);
    }
    if let Some(updated) = feed.updated {
        println!("Updated: {}", updated.to_rfc3339());
    }

    println!("\nItems: {}", feed.item_count());
    println!("{}", "-".repeat(60));

    for (i, item) in feed.items.iter().enumerate() {
        println!("\n{}. {}", i + 1, item.title);
        println!("   Published: {}", item.published.format("%Y-%m-%d %H:%M UTC"));
        if !item.link.is_empty() {
            println!("   Link: {}", item.link);
        }
        if item.has_attachment() {
            println!("   Attachment: {}", item.attachment);
        }
    }
}

fn parse_rss_example() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Engineering Blog</title>
    <description>Notes from the platform team</description>
    <link>https://example.com/blog</link>
    <lastBuildDate>Wed, 03 Jan 2024 08:00:00 GMT</lastBuildDate>

    <item>
      <title>Moving to a new build cache</title>
      <link>https://example.com/blog/build-cache</link>
      <guid>build-cache</guid>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/files/build-cache.pdf" type="application/pdf" length="150000"/>
    </item>

    <item>
      <title>Postmortem: January outage</title>
      <pubDate>Tue, 02 Jan 2024 07:00:00 EST</pubDate>
      <enclosure url="https://example.com/files/outage.pdf" type="application/pdf" length="145000"/>
    </item>
  </channel>
</rss>"#;

    match FeedParser::new().parse_str(rss) {
        Ok(feed) => print_feed(&feed),
        Err(e) => eprintln!("Error parsing RSS: {}", e),
    }
}

fn parse_atom_example() {
    let atom = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Project Changelog</title>
  <subtitle>Releases and notable fixes</subtitle>
  <link rel="self" href="https://example.com/atom.xml"/>
  <link rel="alternate" type="text/html" href="https://example.com/changelog"/>
  <updated>2024-01-02T12:00:00Z</updated>

  <entry>
    <title>Version 1.4.0</title>
    <link href="https://example.com/changelog/1.4.0"/>
    <link rel="enclosure" type="application/gzip" href="https://example.com/dist/v1.4.0.tar.gz"/>
    <id>urn:uuid:release-1-4-0</id>
    <updated>2024-01-01T12:00:00Z</updated>
    <summary>Faster startup and a smaller binary</summary>
  </entry>
</feed>"#;

    match FeedParser::new().parse_str(atom) {
        Ok(feed) => print_feed(&feed),
        Err(e) => eprintln!("Error parsing Atom: {}", e),
    }
}

fn date_example() {
    let inputs = [
        "Thu, 27 Feb 2014 18:46:18 +0100",
        "2014-02-27T17:46:18Z",
        "Thursday, 27 February 2014 17:46:18 GMT",
        "02/27/2014 05:46:18 PM",
        "Die, 42 Feb 1842",
    ];

    for input in inputs {
        match parse_instant(input) {
            Ok(instant) => println!("{input:40} -> {}", instant.to_rfc3339()),
            Err(e) => println!("{input:40} -> {e}"),
        }
    }
}
