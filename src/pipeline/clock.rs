//! Order key generation.
//!
//! Documents carry no per-item time, so keys are synthesized from one base
//! instant fixed for the whole run: every page gets its own window of
//! `page_offset_ms`, and items inside it are `item_step_ms` apart.

use chrono::{DateTime, Utc};

use super::options::{ExtractOptions, DEFAULT_ITEM_STEP_MS, DEFAULT_PAGE_OFFSET_MS};
use crate::model::OrderKey;

/// Deterministic order key generator for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderClock {
    base: OrderKey,
    page_offset_ms: i64,
    item_step_ms: i64,
}

impl OrderClock {
    /// Clock with default spacing starting at `base`.
    pub fn new(base: DateTime<Utc>) -> Self {
        Self::with_spacing(base, DEFAULT_PAGE_OFFSET_MS, DEFAULT_ITEM_STEP_MS)
    }

    /// Clock with custom spacing.
    pub fn with_spacing(base: DateTime<Utc>, page_offset_ms: i64, item_step_ms: i64) -> Self {
        Self {
            base: OrderKey::new(base),
            page_offset_ms,
            item_step_ms,
        }
    }

    /// Clock configured from extraction options.
    ///
    /// Without a fixed base time, the current time is read once here.
    pub fn from_options(options: &ExtractOptions) -> Self {
        let base = options.base_time.unwrap_or_else(Utc::now);
        Self::with_spacing(base, options.page_offset_ms, options.item_step_ms)
    }

    /// Number of items that fit in one page window without spilling into
    /// the next page.
    pub fn items_per_page(&self) -> usize {
        if self.item_step_ms <= 0 {
            return usize::MAX;
        }
        (self.page_offset_ms / self.item_step_ms).max(0) as usize
    }

    /// First key of a page's window.
    pub fn page_base(&self, page_number: u32) -> OrderKey {
        self.base
            .offset_millis(i64::from(page_number) * self.page_offset_ms)
    }

    /// Key of the `index`-th item of a page.
    pub fn key(&self, page_number: u32, index: usize) -> OrderKey {
        self.page_base(page_number)
            .offset_millis(index as i64 * self.item_step_ms)
    }
}
