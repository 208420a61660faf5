//! Recency ordering for feed items

use crate::feed::FeedItem;

/// Orders items by publication instant, most recent first
///
/// The sort is stable: items published at the same instant keep the order
/// in which the adapter emitted them, so index 0 is always the latest item
/// and ties resolve deterministically.
pub fn sort_by_recency(items: &mut [FeedItem]) {
    items.sort_by(|a, b| b.published.cmp(&a.published));
}
