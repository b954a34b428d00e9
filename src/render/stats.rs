//! Summary statistics over extracted pages.

use crate::model::Page;
use crate::pipeline::{ChunkLimits, TextChunker};
use serde::{Deserialize, Serialize};

/// Counts collected from a set of extracted pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages processed
    pub page_count: u32,

    /// Number of text chunk items (placeholders excluded)
    pub text_item_count: u32,

    /// Number of page image items
    pub image_item_count: u32,

    /// Pages with no text chunks and no images
    pub empty_page_count: u32,

    /// Characters of raw page text
    pub char_count: usize,
}

impl ExtractionStats {
    /// Collect statistics from pages extracted with the given chunk limits.
    ///
    /// A page is empty when its text yields no chunks under `limits` and it
    /// kept no image; its single text item is the placeholder.
    pub fn from_pages(pages: &[Page], limits: ChunkLimits) -> Self {
        let chunker = TextChunker::new(limits);
        let mut stats = Self {
            page_count: pages.len() as u32,
            ..Self::default()
        };

        for page in pages {
            stats.char_count += page.char_count();
            stats.image_item_count += page.image_items().count() as u32;

            if page.images.is_empty() && chunker.chunk(&page.full_text).is_empty() {
                stats.empty_page_count += 1;
            } else {
                stats.text_item_count += page.text_items().count() as u32;
            }
        }

        stats
    }

    /// Total number of content items, placeholders included.
    pub fn total_items(&self) -> u32 {
        self.text_item_count + self.image_item_count + self.empty_page_count
    }
}
