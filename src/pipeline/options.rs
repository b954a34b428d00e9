//! Extraction options and configuration.

use chrono::{DateTime, Utc};

use crate::detect::DEFAULT_MAX_FILE_SIZE;

/// Longest chunk, in characters, the chunker aims for.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 200;

/// Chunks whose trimmed length is at or below this are dropped.
pub const DEFAULT_MIN_CHUNK_CHARS: usize = 10;

/// Channel value below which a pixel counts as visible content.
pub const DEFAULT_BLANK_THRESHOLD: u8 = 250;

/// Order key distance between consecutive pages.
pub const DEFAULT_PAGE_OFFSET_MS: i64 = 10_000;

/// Order key distance between consecutive items of one page.
pub const DEFAULT_ITEM_STEP_MS: i64 = 100;

/// Points-to-pixels scale pages are rendered at.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Size limits applied by the text chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLimits {
    /// Target maximum chunk length in characters
    pub max_chars: usize,

    /// Chunks with trimmed length `<= min_chars` are discarded
    pub min_chars: usize,
}

impl Default for ChunkLimits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHUNK_CHARS,
            min_chars: DEFAULT_MIN_CHUNK_CHARS,
        }
    }
}

/// Options for extracting a document into feed content.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Chunker size limits
    pub chunk_limits: ChunkLimits,

    /// Blank-page pixel threshold
    pub blank_threshold: u8,

    /// Render scale
    pub scale: f32,

    /// Whether to render pages into image items
    pub extract_images: bool,

    /// Order key distance between pages, in milliseconds
    pub page_offset_ms: i64,

    /// Order key distance between items of a page, in milliseconds
    pub item_step_ms: i64,

    /// Base instant for order keys (`None` = captured once per run)
    pub base_time: Option<DateTime<Utc>>,

    /// Maximum accepted upload size in bytes
    pub max_file_size: usize,

    /// Password for encrypted documents
    pub password: Option<String>,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk length.
    pub fn with_max_chunk_chars(mut self, max_chars: usize) -> Self {
        self.chunk_limits.max_chars = max_chars;
        self
    }

    /// Set the minimum kept chunk length.
    pub fn with_min_chunk_chars(mut self, min_chars: usize) -> Self {
        self.chunk_limits.min_chars = min_chars;
        self
    }

    /// Set the blank-page threshold.
    pub fn with_blank_threshold(mut self, threshold: u8) -> Self {
        self.blank_threshold = threshold;
        self
    }

    /// Set the render scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Enable or disable page image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Extract text only.
    pub fn text_only(mut self) -> Self {
        self.extract_images = false;
        self
    }

    /// Set order key spacing.
    pub fn with_order_spacing(mut self, page_offset_ms: i64, item_step_ms: i64) -> Self {
        self.page_offset_ms = page_offset_ms;
        self.item_step_ms = item_step_ms;
        self
    }

    /// Fix the base instant used for order keys.
    pub fn with_base_time(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Set the maximum accepted upload size.
    pub fn with_max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set password for encrypted documents.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            chunk_limits: ChunkLimits::default(),
            blank_threshold: DEFAULT_BLANK_THRESHOLD,
            scale: DEFAULT_SCALE,
            extract_images: true,
            page_offset_ms: DEFAULT_PAGE_OFFSET_MS,
            item_step_ms: DEFAULT_ITEM_STEP_MS,
            base_time: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            password: None,
        }
    }
}
