//! Page source backed by lopdf.
//!
//! Text comes straight from the page content stream: the string operands
//! of `Tj`, `TJ`, `'` and `"` become runs, decoded with the active font's
//! encoding. lopdf cannot rasterize, so this source reports no rendering
//! support and the pipeline keeps text only.

use std::path::Path;

use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object, ObjectId};

use super::{decode_text_simple, PageSource, RasterImage, Viewport, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};

/// Kerning adjustment (thousandths of an em) in a `TJ` array that is read
/// as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Concrete [`PageSource`] backed by `lopdf::Document`.
pub struct LopdfSource {
    doc: LopdfDocument,
    page_ids: Vec<ObjectId>,
}

impl LopdfSource {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(Error::from)?;
        Ok(Self::from_document(doc))
    }

    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(Error::from)?;
        Ok(Self::from_document(doc))
    }

    /// Wrap an already loaded document.
    pub fn from_document(doc: LopdfDocument) -> Self {
        let page_ids = doc.get_pages().into_values().collect();
        Self { doc, page_ids }
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    fn page_id(&self, page_number: u32) -> Result<ObjectId> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.page_ids.get(idx as usize))
            .copied()
            .ok_or(Error::PageOutOfRange(page_number, self.page_count()))
    }

    /// MediaBox size in points, following the `Parent` chain for inherited
    /// boxes.
    fn media_box(&self, page_id: ObjectId) -> Option<(f32, f32)> {
        let mut current = Some(page_id);
        while let Some(id) = current {
            let dict = self.doc.get_dictionary(id).ok()?;
            if let Ok(array) = dict.get(b"MediaBox").and_then(|o| o.as_array()) {
                if array.len() >= 4 {
                    let coord = |i: usize| number(&array[i]);
                    let (x0, y0, x1, y1) = (coord(0)?, coord(1)?, coord(2)?, coord(3)?);
                    return Some(((x1 - x0).abs(), (y1 - y0).abs()));
                }
            }
            current = dict.get(b"Parent").and_then(|o| o.as_reference()).ok();
        }
        None
    }
}

impl PageSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.page_ids.len() as u32
    }

    fn text_runs(&self, page_number: u32) -> Result<Vec<String>> {
        let page_id = self.page_id(page_number)?;
        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::TextExtract(e.to_string()))?;
        let content = Content::decode(&data).map_err(|e| Error::TextExtract(e.to_string()))?;

        let fonts = self.doc.get_page_fonts(page_id).ok();
        let decode = |font: Option<&[u8]>, bytes: &[u8]| -> String {
            if let (Some(fonts), Some(font)) = (fonts.as_ref(), font) {
                if let Some(font_dict) = fonts.get(font) {
                    if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                        if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                            return text;
                        }
                    }
                }
            }
            decode_text_simple(bytes)
        };

        let mut runs = RunCollector::default();
        let mut font: Option<Vec<u8>> = None;

        for op in &content.operations {
            match op.operator.as_str() {
                "Tf" => {
                    font = op
                        .operands
                        .first()
                        .and_then(|o| o.as_name().ok())
                        .map(|n| n.to_vec());
                }
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        runs.push(decode(font.as_deref(), bytes));
                    }
                }
                "'" | "\"" => {
                    runs.line_break();
                    if let Some(Object::String(bytes, _)) = op.operands.last() {
                        runs.push(decode(font.as_deref(), bytes));
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        let mut text = String::new();
                        for item in items {
                            match item {
                                Object::String(bytes, _) => {
                                    text.push_str(&decode(font.as_deref(), bytes))
                                }
                                other => {
                                    if number(other).is_some_and(|n| n < -TJ_SPACE_THRESHOLD) {
                                        text.push(' ');
                                    }
                                }
                            }
                        }
                        runs.push(text);
                    }
                }
                "T*" => runs.line_break(),
                "Td" | "TD" => {
                    let ty = op.operands.get(1).and_then(number).unwrap_or(0.0);
                    if ty != 0.0 {
                        runs.line_break();
                    }
                }
                _ => {}
            }
        }

        Ok(runs.finish())
    }

    fn viewport(&self, page_number: u32, scale: f32) -> Result<Viewport> {
        let page_id = self.page_id(page_number)?;
        let (width, height) = self.media_box(page_id).unwrap_or(DEFAULT_PAGE_SIZE);
        Ok(Viewport::from_points(width, height, scale))
    }

    fn supports_rendering(&self) -> bool {
        false
    }

    fn render(&mut self, _page_number: u32, _viewport: &Viewport) -> Result<RasterImage> {
        Err(Error::RenderUnsupported)
    }
}

/// Accumulates text runs, turning line moves into `"\n"` runs.
#[derive(Default)]
struct RunCollector {
    runs: Vec<String>,
}

impl RunCollector {
    fn push(&mut self, run: String) {
        if !run.is_empty() {
            self.runs.push(run);
        }
    }

    /// Leading and repeated breaks are dropped.
    fn line_break(&mut self) {
        match self.runs.last() {
            Some(last) if !last.ends_with('\n') => self.runs.push("\n".to_string()),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.runs.last().is_some_and(|r| r == "\n") {
            self.runs.pop();
        }
        self.runs
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}
