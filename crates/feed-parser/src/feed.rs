// crates/feed-parser/src/feed.rs
//! Canonical feed data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format a feed was decoded from
///
/// Set once by the adapter that accepted the document, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    /// RSS 0.9x / 2.0 (`<rss>` root)
    Rss,
    /// Atom 1.0 (`<feed>` root)
    Atom,
}

impl FeedType {
    /// All supported formats, in default dispatch order
    pub const ALL: [FeedType; 2] = [FeedType::Rss, FeedType::Atom];

    /// Lowercase tag used in output and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Rss => "rss",
            FeedType::Atom => "atom",
        }
    }

    /// Looks up a format by its tag, ignoring ASCII case
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag.trim()))
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized feed with metadata and items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Format the feed was decoded from
    #[serde(rename = "type")]
    pub feed_type: FeedType,
    /// Feed title
    pub title: String,
    /// Canonical link to the website
    pub link: String,
    /// Description or subtitle
    pub description: String,
    /// Software used to generate the feed
    pub generator: String,
    /// Rights text, for example a copyright notice
    pub rights: String,
    /// Author identifier (usually an email address)
    pub author: String,
    /// Last time the feed was updated, when the document says so
    pub updated: Option<DateTime<Utc>>,
    /// URL of an image representing the feed
    pub image: String,
    /// Category labels
    pub categories: Vec<String>,
    /// Items, most recent first once returned by the parser
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Creates an empty feed of the given type
    pub fn new(feed_type: FeedType, title: impl Into<String>) -> Self {
        Self {
            feed_type,
            title: title.into(),
            link: String::new(),
            description: String::new(),
            generator: String::new(),
            rights: String::new(),
            author: String::new(),
            updated: None,
            image: String::new(),
            categories: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns the number of items in the feed
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the feed has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item to the feed
    pub fn add_item(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    /// The most recent item, once items are in recency order
    pub fn latest(&self) -> Option<&FeedItem> {
        self.items.first()
    }

    /// Sorts items by publication date, newest first
    ///
    /// Items sharing an instant keep their relative order.
    pub fn sort_by_recency(&mut self) {
        crate::sort::sort_by_recency(&mut self.items);
    }
}

/// A single entry of a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Identifier from the source document; empty when the format has none
    pub id: String,
    /// Item title
    pub title: String,
    /// Canonical link
    pub link: String,
    /// Content body
    pub content: String,
    /// Attachment URL; empty when there is none
    pub attachment: String,
    /// Author identifier
    pub author: String,
    /// Category labels
    pub categories: Vec<String>,
    /// Publication instant
    pub published: DateTime<Utc>,
}

impl FeedItem {
    /// Creates an item with the given title and publication instant
    pub fn new(title: impl Into<String>, published: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            link: String::new(),
            content: String::new(),
            attachment: String::new(),
            author: String::new(),
            categories: Vec::new(),
            published,
        }
    }

    /// Returns true if this item has an attachment
    pub fn has_attachment(&self) -> bool {
        !self.attachment.is_empty()
    }
}
