//! Plain text rendering of a feed timeline.

use crate::feed::FeedEntry;
use crate::model::ContentItem;

/// Render feed entries as plain text, one block per entry.
///
/// Image payloads are not printed, only their caption and size.
pub fn feed_to_text(entries: &[FeedEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| {
            let header = format!("[{}] page {}", entry.order_key(), entry.page_number);
            match entry.item {
                ContentItem::Text { content, .. } => format!("{}\n{}", header, content),
                ContentItem::Image {
                    content,
                    image_data,
                    ..
                } => format!("{}\n<{}: {} bytes>", header, content, image_data.len()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::timeline;
    use crate::model::{OrderKey, Page};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_feed_to_text() {
        let key = OrderKey::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 10).unwrap());
        let pages = vec![Page::new(
            1,
            "",
            vec![
                ContentItem::text("Some chunk of text", key),
                ContentItem::image("Page 1", "data:abc", key.offset_millis(100)),
            ],
            vec!["data:abc".to_string()],
        )];

        let text = feed_to_text(&timeline(&pages));
        assert_eq!(
            text,
            "[2024-01-01T00:00:10.100Z] page 1\n<Page 1: 8 bytes>\n\n\
             [2024-01-01T00:00:10.000Z] page 1\nSome chunk of text"
        );
    }
}
