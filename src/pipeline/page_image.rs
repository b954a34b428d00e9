//! Page rendering and blank-page filtering.
//!
//! A page is rendered, scanned for any pixel darker than the blank
//! threshold and, if one exists, encoded as a PNG data URL. Failures here
//! are never fatal: they are logged and the page simply has no image.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

use crate::error::Result;
use crate::source::{PageSource, RasterImage, Viewport};

/// Data URL prefix for encoded page images.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// An encoded page image that passed the blank-page check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// PNG data URL
    pub data_url: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Check whether a raster has anything visibly non-white.
///
/// Stops at the first pixel with an R, G or B value below `threshold`.
/// Alpha is ignored.
pub fn has_visible_content(raster: &RasterImage, threshold: u8) -> bool {
    raster
        .pixels()
        .any(|px| px[0] < threshold || px[1] < threshold || px[2] < threshold)
}

/// Encode a raster as a lossless PNG data URL.
pub fn encode_data_url(raster: &RasterImage) -> Result<String> {
    let mut png = Cursor::new(Vec::new());
    PngEncoder::new(&mut png).write_image(
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        ColorType::Rgba8,
    )?;

    let mut url = String::from(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png.into_inner(), &mut url);
    Ok(url)
}

/// Render a page and keep it as an image if it is not blank.
///
/// Returns `None` for blank pages and for any render or encode failure.
pub fn extract_page_image<S: PageSource + ?Sized>(
    source: &mut S,
    page_number: u32,
    viewport: &Viewport,
    blank_threshold: u8,
) -> Option<PageImage> {
    let raster = match source.render(page_number, viewport) {
        Ok(raster) => raster,
        Err(e) => {
            log::warn!("Failed to render page {}: {}", page_number, e);
            return None;
        }
    };

    if !has_visible_content(&raster, blank_threshold) {
        log::debug!("Page {} rendered blank, skipping image", page_number);
        return None;
    }

    match encode_data_url(&raster) {
        Ok(data_url) => Some(PageImage {
            data_url,
            width: raster.width(),
            height: raster.height(),
        }),
        Err(e) => {
            log::warn!("Failed to encode image for page {}: {}", page_number, e);
            None
        }
    }
}
