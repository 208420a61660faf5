// crates/feed-parser/src/adapter/rss.rs
//! RSS 2.0 (and 0.9x) adapter

use super::{optional_date, required_date, text_of, FeedAdapter};
use crate::date::DateNormalizer;
use crate::document::Element;
use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedItem, FeedType};

/// Adapter for documents with an `<rss>` root
#[derive(Debug, Clone, Default)]
pub struct RssAdapter {
    dates: DateNormalizer,
}

impl RssAdapter {
    /// Creates an adapter reading zone-less dates as UTC
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom date normalizer for `pubDate` and `lastBuildDate`
    pub fn with_normalizer(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    fn item(&self, entry: &Element) -> FeedResult<FeedItem> {
        let published = required_date(&self.dates, entry.child_text("pubDate"), "item")?;

        let mut item = FeedItem::new(text_of(entry, "title"), published);
        item.id = text_of(entry, "guid");
        item.link = text_of(entry, "link");
        item.content = text_of(entry, "description");
        item.author = text_of(entry, "author");
        item.attachment = entry
            .child("enclosure")
            .and_then(|e| e.attr("url"))
            .unwrap_or_default()
            .to_string();
        item.categories = categories(entry);

        Ok(item)
    }
}

fn categories(element: &Element) -> Vec<String> {
    element
        .children("category")
        .map(|c| c.text.clone())
        .filter(|name| !name.is_empty())
        .collect()
}

impl FeedAdapter for RssAdapter {
    fn feed_type(&self) -> FeedType {
        FeedType::Rss
    }

    fn recognizes(&self, root: &Element) -> bool {
        root.is("rss", None)
    }

    fn adapt(&self, root: &Element) -> FeedResult<Feed> {
        if !self.recognizes(root) {
            return Err(FeedError::malformed(format!(
                "expected <rss> root, found <{}>",
                root.name
            )));
        }

        let channel = root
            .child("channel")
            .ok_or_else(|| FeedError::malformed("rss document has no <channel>"))?;
        let title = channel
            .child("title")
            .ok_or_else(|| FeedError::malformed("channel has no <title>"))?;

        let mut feed = Feed::new(FeedType::Rss, title.text.clone());
        feed.link = text_of(channel, "link");
        feed.description = text_of(channel, "description");
        feed.generator = text_of(channel, "generator");
        feed.rights = text_of(channel, "copyright");
        feed.author = channel
            .child_text("managingEditor")
            .or_else(|| channel.child_text("webMaster"))
            .unwrap_or_default()
            .to_string();
        feed.image = channel
            .child("image")
            .map(|image| text_of(image, "url"))
            .unwrap_or_default();
        feed.categories = categories(channel);
        feed.updated = optional_date(
            &self.dates,
            channel
                .child_text("lastBuildDate")
                .or_else(|| channel.child_text("pubDate")),
        )?;

        for entry in channel.children("item") {
            feed.add_item(self.item(entry)?);
        }

        log::debug!("rss channel {:?} with {} items", feed.title, feed.item_count());
        Ok(feed)
    }
}
