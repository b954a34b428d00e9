//! Content items and their ordering keys.

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Synthetic, totally ordered position of a content item in the feed.
///
/// Serialized as an RFC 3339 timestamp with millisecond precision and a
/// `Z` suffix, so string order and chronological order agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey(DateTime<Utc>);

impl OrderKey {
    /// Wrap an instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The underlying instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Key shifted forward by `millis` milliseconds.
    pub fn offset_millis(&self, millis: i64) -> Self {
        Self(self.0 + Duration::milliseconds(millis))
    }

    /// Parse a key from its RFC 3339 representation.
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for OrderKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid order key: {}", s)))
    }
}

/// One displayable unit derived from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A text chunk
    Text {
        /// Chunk text
        content: String,
        /// Feed position
        order_key: OrderKey,
    },

    /// A rendered page image
    Image {
        /// Caption, e.g. "Page 3"
        content: String,
        /// Encoded raster as a data URL
        image_data: String,
        /// Feed position
        order_key: OrderKey,
    },
}

impl ContentItem {
    /// Create a text item.
    pub fn text(content: impl Into<String>, order_key: OrderKey) -> Self {
        ContentItem::Text {
            content: content.into(),
            order_key,
        }
    }

    /// Create an image item.
    pub fn image(
        content: impl Into<String>,
        image_data: impl Into<String>,
        order_key: OrderKey,
    ) -> Self {
        ContentItem::Image {
            content: content.into(),
            image_data: image_data.into(),
            order_key,
        }
    }

    /// Text of the item (the caption for images).
    pub fn content(&self) -> &str {
        match self {
            ContentItem::Text { content, .. } | ContentItem::Image { content, .. } => content,
        }
    }

    /// Feed position of the item.
    pub fn order_key(&self) -> OrderKey {
        match self {
            ContentItem::Text { order_key, .. } | ContentItem::Image { order_key, .. } => {
                *order_key
            }
        }
    }

    /// Image payload, if this is an image item.
    pub fn image_data(&self) -> Option<&str> {
        match self {
            ContentItem::Image { image_data, .. } => Some(image_data),
            ContentItem::Text { .. } => None,
        }
    }

    /// Check if this is a text item.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentItem::Text { .. })
    }

    /// Check if this is an image item.
    pub fn is_image(&self) -> bool {
        matches!(self, ContentItem::Image { .. })
    }
}
