//! Extraction pipeline.
//!
//! Each page flows through independent stages:
//!
//! ```text
//! PageSource ──▶ text runs ──▶ chunker ──┐
//!            └─▶ render ────▶ image ─────┴─▶ assembler ──▶ Page
//! ```
//!
//! The orchestrator runs the stages page by page and folds the outcome
//! into an [`ExtractionResult`](crate::model::ExtractionResult).

pub mod assembler;
pub mod chunker;
pub mod clock;
pub mod page_image;
mod options;
mod orchestrator;

pub use assembler::{assemble, image_caption, NO_CONTENT_CAPTION};
pub use chunker::{chunk, chunk_with, TextChunker};
pub use clock::OrderClock;
pub use page_image::{
    encode_data_url, extract_page_image, has_visible_content, PageImage, PNG_DATA_URL_PREFIX,
};
pub use options::{
    ChunkLimits, ExtractOptions, DEFAULT_BLANK_THRESHOLD, DEFAULT_ITEM_STEP_MS,
    DEFAULT_MAX_CHUNK_CHARS, DEFAULT_MIN_CHUNK_CHARS, DEFAULT_PAGE_OFFSET_MS, DEFAULT_SCALE,
};
#[cfg(feature = "async")]
pub use orchestrator::extract_bytes_async;
pub use orchestrator::{extract, extract_bytes, extract_file, open_bytes, try_extract};
