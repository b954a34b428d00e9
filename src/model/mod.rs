//! Data model for extracted feed content.
//!
//! A document becomes a list of [`Page`]s, each holding the
//! [`ContentItem`]s derived from it. The whole run is reported through
//! [`ExtractionResult`].

mod content;
mod page;
mod result;

pub use content::{ContentItem, OrderKey};
pub use page::Page;
pub use result::{ExtractionResult, EXTRACTION_FAILED_MESSAGE};
