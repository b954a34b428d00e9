//! # pdfeed
//!
//! Turns PDF documents into feeds of small, renderable content items.
//!
//! Every page is split into display-sized text chunks plus, when the page
//! source can rasterize, a rendered page image that survived blank-page
//! filtering. Each item carries a synthetic order key so the whole
//! document can be shown as a newest-first timeline.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfeed::{extract_file, feed, ExtractOptions};
//!
//! let result = extract_file("document.pdf", &ExtractOptions::default());
//! match result.into_result() {
//!     Ok(pages) => {
//!         for entry in feed::timeline(&pages) {
//!             println!("{} p{}: {}", entry.order_key(), entry.page_number, entry.item.content());
//!         }
//!     }
//!     Err(message) => eprintln!("{}", message),
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Page source**: [`source::PageSource`] yields raw text runs and page
//!   rasters ([`source::LopdfSource`] by default)
//! - **Chunker**: paragraph and sentence aware splitting, 200 characters
//!   per chunk by default
//! - **Image extractor**: renders a page and drops it if every pixel is
//!   near-white
//! - **Assembler**: tags items and assigns order keys from an explicit
//!   [`pipeline::OrderClock`]
//! - **Orchestrator**: processes pages in order; any fatal failure yields
//!   a single fixed error message

pub mod detect;
pub mod error;
pub mod feed;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, is_pdf, is_pdf_bytes, validate_upload, PdfFormat};
pub use error::{Error, Result};
pub use model::{ContentItem, ExtractionResult, OrderKey, Page, EXTRACTION_FAILED_MESSAGE};
#[cfg(feature = "async")]
pub use pipeline::extract_bytes_async;
pub use pipeline::{
    chunk, extract, extract_bytes, extract_file, try_extract, ChunkLimits, ExtractOptions,
    OrderClock, TextChunker,
};
pub use render::{to_json, ExtractionStats, JsonFormat};
pub use source::{LopdfSource, PageSource, RasterImage, Viewport};
