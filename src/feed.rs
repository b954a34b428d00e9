//! Newest-first feed timeline over extracted pages.
//!
//! The pipeline returns items in assembly order, page by page. A feed
//! shows them across pages, most recently keyed first.

use crate::model::{ContentItem, OrderKey, Page};

/// One item placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedEntry<'a> {
    /// Page the item came from
    pub page_number: u32,
    /// The item itself
    pub item: &'a ContentItem,
}

impl FeedEntry<'_> {
    /// Order key of the underlying item.
    pub fn order_key(&self) -> OrderKey {
        self.item.order_key()
    }
}

/// Flatten all pages' items and sort them by descending order key.
pub fn timeline(pages: &[Page]) -> Vec<FeedEntry<'_>> {
    let mut entries: Vec<FeedEntry<'_>> = pages
        .iter()
        .flat_map(|page| {
            page.content_items.iter().map(move |item| FeedEntry {
                page_number: page.page_number,
                item,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.order_key().cmp(&a.order_key()));
    entries
}
