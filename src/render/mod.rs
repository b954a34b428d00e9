//! Rendering module for presenting extraction output.

mod json;
mod stats;
mod text;

pub use json::{to_json, JsonFormat};
pub use stats::ExtractionStats;
pub use text::feed_to_text;
