//! Page-level types.

use super::ContentItem;
use serde::{Deserialize, Serialize};

/// A single processed page of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed, document order)
    pub page_number: u32,

    /// Raw text runs of the page, concatenated without separator
    pub full_text: String,

    /// Content items in assembly order
    pub content_items: Vec<ContentItem>,

    /// Encoded page images kept after blank-page filtering
    pub images: Vec<String>,
}

impl Page {
    /// Create a page from its assembled parts.
    pub fn new(
        page_number: u32,
        full_text: impl Into<String>,
        content_items: Vec<ContentItem>,
        images: Vec<String>,
    ) -> Self {
        Self {
            page_number,
            full_text: full_text.into(),
            content_items,
            images,
        }
    }

    /// Iterate over the text items of the page.
    pub fn text_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.content_items.iter().filter(|item| item.is_text())
    }

    /// Iterate over the image items of the page.
    pub fn image_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.content_items.iter().filter(|item| item.is_image())
    }

    /// Number of characters in the raw page text.
    pub fn char_count(&self) -> usize {
        self.full_text.chars().count()
    }

    /// Check if the page produced no text at all.
    pub fn is_text_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}
