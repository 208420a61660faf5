// crates/feed-parser/src/adapter/mod.rs
//! Format adapters
//!
//! Each adapter recognizes one concrete syndication format and maps it onto
//! the canonical [`Feed`] model. The dispatcher in [`crate::parser`] tries
//! them in order until one accepts the document.

mod atom;
mod rss;

pub use atom::AtomAdapter;
pub use rss::RssAdapter;

use crate::date::DateNormalizer;
use crate::document::{read_document, Element};
use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedType};
use chrono::{DateTime, Utc};

/// A parser for one concrete feed format
pub trait FeedAdapter: Send + Sync {
    /// The format this adapter produces
    fn feed_type(&self) -> FeedType;

    /// True if `root` looks like this adapter's format
    ///
    /// The dispatcher uses this to report the error of the adapter that
    /// owned the document rather than that of the last one tried.
    fn recognizes(&self, _root: &Element) -> bool {
        false
    }

    /// Maps an already decoded element tree onto a [`Feed`]
    ///
    /// Fails with `DocumentMalformed` when the root element belongs to a
    /// different format or a required field is missing.
    fn adapt(&self, root: &Element) -> FeedResult<Feed>;

    /// Decodes raw bytes and adapts the resulting tree
    fn parse(&self, bytes: &[u8]) -> FeedResult<Feed> {
        let root = read_document(bytes)?;
        self.adapt(&root)
    }
}

/// Creates the built-in adapter for a format
pub fn adapter_for(kind: FeedType, dates: DateNormalizer) -> Box<dyn FeedAdapter> {
    match kind {
        FeedType::Rss => Box::new(RssAdapter::with_normalizer(dates)),
        FeedType::Atom => Box::new(AtomAdapter::with_normalizer(dates)),
    }
}

/// Text of a child element, empty when absent
fn text_of(element: &Element, name: &str) -> String {
    element.child_text(name).unwrap_or_default().to_string()
}

fn optional_date(dates: &DateNormalizer, value: Option<&str>) -> FeedResult<Option<DateTime<Utc>>> {
    value.map(|text| dates.parse_instant(text)).transpose()
}

fn required_date(
    dates: &DateNormalizer,
    value: Option<&str>,
    context: &str,
) -> FeedResult<DateTime<Utc>> {
    let text = value.ok_or_else(|| FeedError::malformed(format!("{context} has no date")))?;
    dates.parse_instant(text)
}
