//! Outcome of one extraction run.

use super::Page;
use serde::{Deserialize, Serialize};

/// The single user-facing message reported for any fatal failure.
pub const EXTRACTION_FAILED_MESSAGE: &str = "PDFの解析に失敗しました";

/// Result of extracting a document.
///
/// `pages` is present iff `success`, `error` iff not. There is no
/// partial-success state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether every page was processed
    pub success: bool,

    /// Processed pages in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,

    /// User-facing failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Successful extraction.
    pub fn ok(pages: Vec<Page>) -> Self {
        Self {
            success: true,
            pages: Some(pages),
            error: None,
        }
    }

    /// Failed extraction with the fixed user-facing message.
    pub fn failed() -> Self {
        Self {
            success: false,
            pages: None,
            error: Some(EXTRACTION_FAILED_MESSAGE.to_string()),
        }
    }

    /// Pages of a successful run (empty slice on failure).
    pub fn pages(&self) -> &[Page] {
        self.pages.as_deref().unwrap_or(&[])
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> std::result::Result<Vec<Page>, String> {
        match (self.success, self.pages) {
            (true, Some(pages)) => Ok(pages),
            _ => Err(self
                .error
                .unwrap_or_else(|| EXTRACTION_FAILED_MESSAGE.to_string())),
        }
    }
}

impl From<crate::error::Result<Vec<Page>>> for ExtractionResult {
    fn from(result: crate::error::Result<Vec<Page>>) -> Self {
        match result {
            Ok(pages) => Self::ok(pages),
            Err(_) => Self::failed(),
        }
    }
}
