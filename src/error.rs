//! Error types for pdfeed library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfeed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a PDF into content items.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The uploaded file has no content.
    #[error("File is empty")]
    EmptyFile,

    /// The uploaded file exceeds the configured size limit.
    #[error("File is too large: {size} bytes (limit is {limit} bytes)")]
    FileTooLarge {
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and requires a password.
    #[error("Document is encrypted")]
    Encrypted,

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error rasterizing a page.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The page source has no rasterizer.
    #[error("Page rendering is not supported by this source")]
    RenderUnsupported,

    /// Error encoding a raster as an image payload.
    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageEncode(err.to_string())
    }
}
