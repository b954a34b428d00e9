//! Page source abstraction layer.
//!
//! The pipeline never talks to a PDF library directly. It reads pages
//! through [`PageSource`], which yields raw text runs and rasterizes a page
//! on demand. [`LopdfSource`] is the default implementation; `PdfiumSource`
//! adds rasterization behind the `pdfium` feature.

mod lopdf_source;
#[cfg(feature = "pdfium")]
mod pdfium_source;

pub use lopdf_source::LopdfSource;
#[cfg(feature = "pdfium")]
pub use pdfium_source::{create_pdfium, PdfiumSource};

use crate::error::{Error, Result};

/// Default page size in points when a page has no usable MediaBox (US Letter).
pub const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// Pixel dimensions a page is rendered at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
    /// Points-to-pixels scale the size was computed with
    pub scale: f32,
}

impl Viewport {
    /// Build a viewport from a page size in points.
    ///
    /// Fractional pixels are dropped; each side is at least one pixel.
    pub fn from_points(width: f32, height: f32, scale: f32) -> Self {
        let to_px = |pt: f32| (pt * scale).floor().max(1.0) as u32;
        Self {
            width: to_px(width),
            height: to_px(height),
            scale,
        }
    }

    /// Number of pixels covered by the viewport.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// An RGBA8 raster buffer, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA8 buffer. Fails if the length does not match the size.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::Render(format!(
                "raster buffer has {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster of the given size filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An opaque white raster, the state of a freshly cleared surface.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, [255, 255, 255, 255])
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Iterate over pixels as `[r, g, b, a]` slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(4)
    }

    /// Overwrite one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&rgba);
    }
}

/// Abstract interface for reading pages of an opened document.
///
/// Page numbers are 1-based. Rendering takes `&mut self` because
/// implementations draw onto a single reusable surface; callers must
/// process pages one at a time.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Ordered raw text runs of a page, without positional metadata.
    fn text_runs(&self, page_number: u32) -> Result<Vec<String>>;

    /// Pixel size of a page at the given scale.
    fn viewport(&self, page_number: u32, scale: f32) -> Result<Viewport>;

    /// Whether [`PageSource::render`] can produce rasters at all.
    fn supports_rendering(&self) -> bool {
        true
    }

    /// Rasterize a page into an RGBA buffer sized to `viewport`.
    fn render(&mut self, page_number: u32, viewport: &Viewport) -> Result<RasterImage>;
}

/// Concatenate text runs without separator.
pub fn join_runs(runs: &[String]) -> String {
    runs.concat()
}

/// Simple text decoding fallback when no font encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
