//! Page source backed by PDFium, with rasterization.

use pdfium_render::prelude::*;

use super::{PageSource, RasterImage, Viewport};
use crate::error::{Error, Result};

/// Create a Pdfium instance, looking for the library next to the binary
/// first and then on the system search path.
pub fn create_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Other(format!("Failed to load PDFium library: {:?}", e)))?;
    Ok(Pdfium::new(bindings))
}

/// Concrete [`PageSource`] backed by a PDFium document.
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumSource<'a> {
    /// Open a document held in memory.
    pub fn load_bytes(
        pdfium: &'a Pdfium,
        data: &'a [u8],
        password: Option<&'a str>,
    ) -> Result<Self> {
        let document = pdfium
            .load_pdf_from_byte_slice(data, password)
            .map_err(|e| Error::PdfParse(e.to_string()))?;
        Ok(Self { document })
    }

    fn page(&self, page_number: u32) -> Result<PdfPage<'_>> {
        let count = self.page_count();
        if page_number == 0 || page_number > count {
            return Err(Error::PageOutOfRange(page_number, count));
        }
        self.document
            .pages()
            .get((page_number - 1) as PdfPageIndex)
            .map_err(|e| Error::PdfParse(e.to_string()))
    }
}

impl PageSource for PdfiumSource<'_> {
    fn page_count(&self) -> u32 {
        self.document.pages().len() as u32
    }

    fn text_runs(&self, page_number: u32) -> Result<Vec<String>> {
        let page = self.page(page_number)?;
        let text = page
            .text()
            .map_err(|e| Error::TextExtract(e.to_string()))?;
        Ok(vec![text.all()])
    }

    fn viewport(&self, page_number: u32, scale: f32) -> Result<Viewport> {
        let page = self.page(page_number)?;
        Ok(Viewport::from_points(
            page.width().value,
            page.height().value,
            scale,
        ))
    }

    fn render(&mut self, page_number: u32, viewport: &Viewport) -> Result<RasterImage> {
        let page = self.page(page_number)?;
        let config = PdfRenderConfig::new()
            .set_target_width(viewport.width as Pixels)
            .set_target_height(viewport.height as Pixels);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Render(e.to_string()))?;
        RasterImage::new(
            bitmap.width() as u32,
            bitmap.height() as u32,
            bitmap.as_rgba_bytes(),
        )
    }
}
