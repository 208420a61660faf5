// crates/feed-parser/src/parser.rs
//! Format dispatch
//!
//! [`FeedParser`] owns an ordered list of adapters. A document is offered to
//! each in turn; the first adapter that accepts it wins and its items are
//! sorted newest first.

use crate::adapter::{adapter_for, AtomAdapter, FeedAdapter, RssAdapter};
use crate::date::DateNormalizer;
use crate::document::{read_document, Element};
use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedType};
use std::io::Read;

/// Feed parser that tries a list of format adapters in order
pub struct FeedParser {
    adapters: Vec<Box<dyn FeedAdapter>>,
}

impl FeedParser {
    /// Creates a parser trying RSS, then Atom
    pub fn new() -> Self {
        Self::with_adapters(vec![
            Box::new(RssAdapter::new()),
            Box::new(AtomAdapter::new()),
        ])
    }

    /// Creates a parser with a custom adapter list
    pub fn with_adapters(adapters: Vec<Box<dyn FeedAdapter>>) -> Self {
        Self { adapters }
    }

    /// Creates a parser from a list of built-in formats sharing one normalizer
    pub fn from_kinds(kinds: &[FeedType], dates: DateNormalizer) -> Self {
        Self::with_adapters(kinds.iter().map(|&kind| adapter_for(kind, dates)).collect())
    }

    /// Formats tried, in order
    pub fn feed_types(&self) -> Vec<FeedType> {
        self.adapters.iter().map(|a| a.feed_type()).collect()
    }

    /// Parses a raw document
    ///
    /// Fails with `UnknownFeedFormat` when no adapter accepts the bytes; the
    /// last adapter's error is kept as its source.
    pub fn parse(&self, bytes: &[u8]) -> FeedResult<Feed> {
        let adapters: Vec<&dyn FeedAdapter> = self.adapters.iter().map(|a| a.as_ref()).collect();
        parse_with(bytes, &adapters)
    }

    /// Parses a document that is already a string
    pub fn parse_str(&self, content: &str) -> FeedResult<Feed> {
        self.parse(content.as_bytes())
    }

    /// Reads a whole document from `reader` and parses it
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> FeedResult<Feed> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.parse(&bytes)
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `bytes` with an explicit adapter list
///
/// When every adapter fails, the error kept is that of the first adapter
/// that recognized the root element, else that of the last adapter tried.
pub fn parse_with(bytes: &[u8], adapters: &[&dyn FeedAdapter]) -> FeedResult<Feed> {
    let mut last = None;
    let mut owner: Option<FeedError> = None;
    let mut root: Option<Option<Element>> = None;

    for adapter in adapters {
        match adapter.parse(bytes) {
            Ok(mut feed) => {
                feed.sort_by_recency();
                log::debug!(
                    "parsed {} feed {:?} ({} items)",
                    feed.feed_type,
                    feed.title,
                    feed.item_count()
                );
                return Ok(feed);
            }
            Err(err) => {
                log::debug!("{} adapter rejected document: {}", adapter.feed_type(), err);
                let tree = root.get_or_insert_with(|| read_document(bytes).ok());
                if owner.is_none() && tree.as_ref().is_some_and(|r| adapter.recognizes(r)) {
                    owner = Some(err);
                } else {
                    last = Some(err);
                }
            }
        }
    }

    Err(FeedError::UnknownFeedFormat {
        last: owner.or(last).map(Box::new),
    })
}
