//! Builds the content items of one page.

use super::clock::OrderClock;
use crate::model::ContentItem;

/// Caption of the placeholder item emitted for pages with no content.
pub const NO_CONTENT_CAPTION: &str = "（このページにはテキストコンテンツがありません）";

/// Caption of a page image item.
pub fn image_caption(page_number: u32) -> String {
    format!("Page {}", page_number)
}

/// Merge a page's text chunks and images into ordered content items.
///
/// Text items come first, then images, each one `item_step` after the
/// previous. A page with neither gets a single placeholder text item at
/// the page base key, so every page yields at least one item.
pub fn assemble(
    page_number: u32,
    chunks: &[String],
    images: &[String],
    clock: &OrderClock,
) -> Vec<ContentItem> {
    let total = chunks.len() + images.len();
    if total > clock.items_per_page() {
        log::debug!(
            "Page {} has {} items, more than the {} that fit before the next page",
            page_number,
            total,
            clock.items_per_page()
        );
    }

    let mut items = Vec::with_capacity(total.max(1));

    for (i, chunk) in chunks.iter().enumerate() {
        items.push(ContentItem::text(chunk.as_str(), clock.key(page_number, i)));
    }

    for (j, data) in images.iter().enumerate() {
        items.push(ContentItem::image(
            image_caption(page_number),
            data.as_str(),
            clock.key(page_number, chunks.len() + j),
        ));
    }

    if items.is_empty() {
        items.push(ContentItem::text(
            NO_CONTENT_CAPTION,
            clock.page_base(page_number),
        ));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn clock() -> OrderClock {
        OrderClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_page_gets_placeholder() {
        let clock = clock();
        let items = assemble(4, &[], &[], &clock);
        assert_eq!(items.len(), 1);
        assert!(items[0].is_text());
        assert_eq!(items[0].content(), NO_CONTENT_CAPTION);
        assert_eq!(items[0].order_key(), clock.page_base(4));
    }

    #[test]
    fn test_text_before_images() {
        let clock = clock();
        let chunks = strings(&["first chunk of text", "second chunk of text"]);
        let images = strings(&["data:image/png;base64,AAA"]);
        let items = assemble(2, &chunks, &images, &clock);

        assert_eq!(items.len(), 3);
        assert!(items[0].is_text());
        assert!(items[1].is_text());
        assert!(items[2].is_image());
        assert_eq!(items[2].content(), "Page 2");
        assert_eq!(items[2].image_data(), Some("data:image/png;base64,AAA"));
        assert_eq!(items[2].order_key(), clock.key(2, 2));
    }

    #[test]
    fn test_keys_strictly_increase_within_page() {
        let clock = clock();
        let chunks = strings(&["aaaaaaaaaaaa", "bbbbbbbbbbbb", "cccccccccccc"]);
        let images = strings(&["x", "y"]);
        let items = assemble(1, &chunks, &images, &clock);

        assert!(items
            .windows(2)
            .all(|w| w[0].order_key() < w[1].order_key()));
    }

    #[test]
    fn test_pages_strictly_separated() {
        let clock = clock();
        let chunks: Vec<String> = (0..40).map(|i| format!("chunk number {}", i)).collect();
        let page1 = assemble(1, &chunks, &strings(&["img"]), &clock);
        let page2 = assemble(2, &[], &[], &clock);

        let max1 = page1.iter().map(|i| i.order_key()).max().unwrap();
        let min2 = page2.iter().map(|i| i.order_key()).min().unwrap();
        assert!(max1 < min2);
    }
}
