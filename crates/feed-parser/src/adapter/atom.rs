// crates/feed-parser/src/adapter/atom.rs
//! Atom 1.0 adapter

use super::{required_date, text_of, FeedAdapter};
use crate::date::DateNormalizer;
use crate::document::Element;
use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedItem, FeedType};
use crate::link::{select_attachment, select_primary, Link};

/// Atom namespace URI
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Adapter for documents with a `<feed>` root
#[derive(Debug, Clone, Default)]
pub struct AtomAdapter {
    dates: DateNormalizer,
}

impl AtomAdapter {
    /// Creates an adapter reading zone-less dates as UTC
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom date normalizer for `updated` and `published`
    pub fn with_normalizer(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    fn entry(&self, entry: &Element) -> FeedResult<FeedItem> {
        let published = required_date(
            &self.dates,
            entry
                .child_text("published")
                .or_else(|| entry.child_text("updated")),
            "entry",
        )?;

        let links = links(entry);
        let mut item = FeedItem::new(text_of(entry, "title"), published);
        item.id = text_of(entry, "id");
        item.link = select_primary(&links).href;
        item.attachment = select_attachment(&links).href;
        item.content = entry
            .child_text("content")
            .or_else(|| entry.child_text("summary"))
            .unwrap_or_default()
            .to_string();
        item.author = author(entry);
        item.categories = categories(entry);

        Ok(item)
    }
}

fn links(element: &Element) -> Vec<Link> {
    element
        .children("link")
        .map(|link| Link {
            href: link.attr("href").unwrap_or_default().to_string(),
            rel: link.attr("rel").unwrap_or_default().to_string(),
            media_type: link.attr("type").unwrap_or_default().to_string(),
            title: link.attr("title").map(str::to_string),
            length: link.attr("length").and_then(|l| l.trim().parse().ok()),
        })
        .collect()
}

/// First author's email, else their name
fn author(element: &Element) -> String {
    element
        .child("author")
        .and_then(|person| person.child_text("email").or_else(|| person.child_text("name")))
        .unwrap_or_default()
        .to_string()
}

fn categories(element: &Element) -> Vec<String> {
    element
        .children("category")
        .filter_map(|c| c.attr("term"))
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

impl FeedAdapter for AtomAdapter {
    fn feed_type(&self) -> FeedType {
        FeedType::Atom
    }

    fn recognizes(&self, root: &Element) -> bool {
        root.is("feed", Some(ATOM_NS)) || root.is("feed", None)
    }

    fn adapt(&self, root: &Element) -> FeedResult<Feed> {
        if !self.recognizes(root) {
            return Err(FeedError::malformed(format!(
                "expected Atom <feed> root, found <{}>",
                root.name
            )));
        }

        let title = root
            .child("title")
            .ok_or_else(|| FeedError::malformed("feed has no <title>"))?;

        let mut feed = Feed::new(FeedType::Atom, title.text.clone());
        feed.link = select_primary(&links(root)).href;
        feed.description = text_of(root, "subtitle");
        feed.generator = text_of(root, "generator");
        feed.rights = text_of(root, "rights");
        feed.image = root
            .child_text("logo")
            .or_else(|| root.child_text("icon"))
            .unwrap_or_default()
            .to_string();
        feed.author = author(root);
        feed.categories = categories(root);
        feed.updated = Some(required_date(&self.dates, root.child_text("updated"), "feed")?);

        for entry in root.children("entry") {
            feed.add_item(self.entry(entry)?);
        }

        log::debug!("atom feed {:?} with {} entries", feed.title, feed.item_count());
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::read_str;
    use pretty_assertions::assert_eq;

    fn adapt(xml: &str) -> FeedResult<Feed> {
        AtomAdapter::new().adapt(&read_str(xml).unwrap())
    }

    const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
    <feed xmlns="http://www.w3.org/2005/Atom">
      <title>Example Feed</title>
      <subtitle>A subtitle</subtitle>
      <link href="http://example.org/feed/" rel="self"/>
      <link href="http://example.org/" rel="alternate" type="text/html"/>
      <updated>2003-12-13T18:30:02Z</updated>
      <author><name>John Doe</name><email>johndoe@example.com</email></author>
      <generator>Example Toolkit</generator>
      <rights>Copyright (c) 2003</rights>
      <icon>http://example.org/icon.png</icon>
      <category term="news"/>
      <entry>
        <title>Atom-Powered Robots Run Amok</title>
        <link href="http://example.org/2003/12/13/atom03"/>
        <link rel="enclosure" type="audio/mpeg" length="1337" href="http://example.org/audio.mp3"/>
        <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
        <updated>2003-12-13T18:30:02Z</updated>
        <published>2003-12-13T08:29:29-04:00</published>
        <summary>Some text.</summary>
        <author><name>Jane</name></author>
        <category term="robots"/>
      </entry>
    </feed>"#;

    #[test]
    fn test_feed_fields() {
        let feed = adapt(FEED).unwrap();

        assert_eq!(feed.feed_type, FeedType::Atom);
        assert_eq!(feed.title, "Example Feed");
        assert_eq!(feed.description, "A subtitle");
        assert_eq!(feed.link, "http://example.org/");
        assert_eq!(feed.author, "johndoe@example.com");
        assert_eq!(feed.generator, "Example Toolkit");
        assert_eq!(feed.rights, "Copyright (c) 2003");
        assert_eq!(feed.image, "http://example.org/icon.png");
        assert_eq!(feed.categories, vec!["news"]);
        assert_eq!(feed.updated.unwrap().timestamp(), 1071340202);
    }

    #[test]
    fn test_entry_fields() {
        let feed = adapt(FEED).unwrap();
        let item = &feed.items[0];

        assert_eq!(item.id, "urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a");
        assert_eq!(item.title, "Atom-Powered Robots Run Amok");
        assert_eq!(item.link, "http://example.org/2003/12/13/atom03");
        assert_eq!(item.attachment, "http://example.org/audio.mp3");
        assert_eq!(item.content, "Some text.");
        assert_eq!(item.author, "Jane");
        assert_eq!(item.categories, vec!["robots"]);
        // published wins over updated
        assert_eq!(item.published.timestamp(), 1071318569);
    }

    #[test]
    fn test_updated_only_entry() {
        let feed = adapt(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title>
               <updated>2003-12-13T18:30:02Z</updated>
               <entry><title>e</title><updated>2003-12-13T18:30:02Z</updated></entry></feed>"#,
        )
        .unwrap();
        assert_eq!(feed.items[0].published.timestamp(), 1071340202);
        assert!(!feed.items[0].has_attachment());
    }

    #[test]
    fn test_unqualified_feed_accepted() {
        let feed = adapt("<feed><title>t</title><updated>2003-12-13T18:30:02Z</updated></feed>").unwrap();
        assert_eq!(feed.feed_type, FeedType::Atom);
    }

    #[test]
    fn test_content_preferred_over_summary() {
        let feed = adapt(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title>
               <updated>2003-12-13T18:30:02Z</updated>
               <entry><updated>2003-12-13T18:30:02Z</updated>
                 <summary>short</summary><content type="html">&lt;p&gt;long&lt;/p&gt;</content>
               </entry></feed>"#,
        )
        .unwrap();
        assert_eq!(feed.items[0].content, "<p>long</p>");
    }

    #[test]
    fn test_rejections() {
        assert!(adapt("<rss><channel><title>t</title></channel></rss>").unwrap_err().is_malformed());
        assert!(adapt(r#"<feed xmlns="urn:other"><title>t</title></feed>"#).unwrap_err().is_malformed());
        assert!(adapt("<feed><updated>2003-12-13T18:30:02Z</updated></feed>").unwrap_err().is_malformed());
        assert!(adapt("<feed><title>t</title></feed>").unwrap_err().is_malformed());
        assert!(adapt("<feed><title>t</title><updated>2003-12-13T18:30:02Z</updated><entry/></feed>")
            .unwrap_err()
            .is_malformed());
        assert!(adapt("<feed><title>t</title><updated>yesterday</updated></feed>")
            .unwrap_err()
            .is_date_error());
    }
}
