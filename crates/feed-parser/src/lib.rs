// crates/feed-parser/src/lib.rs
//! RSS and Atom normalization into one canonical feed model
//!
//! This crate turns raw syndication documents into a [`Feed`]:
//! - RSS 2.0 / 0.9x and Atom 1.0 documents
//! - Any encoding declared in the XML prolog or signalled by a byte-order mark
//! - Dates in dozens of real-world layouts, normalized to UTC
//! - Items ordered newest first
//!
//! # Example
//!
//! ```rust
//! use syndic_feed_parser::{FeedParser, FeedType};
//!
//! let rss = r#"<?xml version="1.0"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>Example News</title>
//!     <item>
//!       <title>Release notes</title>
//!       <enclosure url="http://example.com/notes.pdf" type="application/pdf"/>
//!       <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let feed = FeedParser::new().parse_str(rss).expect("Failed to parse feed");
//! assert_eq!(feed.feed_type, FeedType::Rss);
//! println!("Feed: {} with {} items", feed.title, feed.item_count());
//! ```

pub mod adapter;
pub mod date;
pub mod document;
mod error;
mod feed;
pub mod link;
mod parser;
mod sort;

pub use adapter::{AtomAdapter, FeedAdapter, RssAdapter};
pub use date::{parse_instant, DateNormalizer};
pub use error::{FeedError, FeedResult};
pub use feed::{Feed, FeedItem, FeedType};
pub use parser::{parse_with, FeedParser};
pub use sort::sort_by_recency;
