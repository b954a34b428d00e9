//! Drives the pipeline across all pages of a document.

use std::path::Path;

use super::assembler::assemble;
use super::chunker::TextChunker;
use super::clock::OrderClock;
use super::page_image::extract_page_image;
use super::options::ExtractOptions;
use crate::detect::validate_upload;
use crate::error::Result;
use crate::model::{ExtractionResult, Page};
use crate::source::{join_runs, LopdfSource, PageSource};
#[cfg(feature = "pdfium")]
use crate::source::{create_pdfium, PdfiumSource};

/// Extract every page of an opened document.
///
/// Pages are processed strictly in order. Any fatal error discards the
/// pages processed so far and yields the fixed failure message; the cause
/// is only logged.
pub fn extract<S: PageSource + ?Sized>(
    source: &mut S,
    options: &ExtractOptions,
) -> ExtractionResult {
    finish(try_extract(source, options))
}

/// Extract a PDF held in memory.
///
/// With the `pdfium` feature and image extraction enabled, the document is
/// opened through PDFium so pages can be rendered. If the PDFium library
/// cannot be bound, lopdf is used and only text is extracted.
pub fn extract_bytes(data: &[u8], options: &ExtractOptions) -> ExtractionResult {
    finish(try_extract_bytes(data, options))
}

fn try_extract_bytes(data: &[u8], options: &ExtractOptions) -> Result<Vec<Page>> {
    #[cfg(feature = "pdfium")]
    {
        if options.extract_images {
            match create_pdfium() {
                Ok(pdfium) => {
                    check_upload(data, options)?;
                    let mut source =
                        PdfiumSource::load_bytes(&pdfium, data, options.password.as_deref())?;
                    return try_extract(&mut source, options);
                }
                Err(e) => log::warn!("{}; falling back to lopdf without page images", e),
            }
        }
    }

    let mut source = open_bytes(data, options)?;
    try_extract(&mut source, options)
}

/// Extract a PDF file. The whole file is read into memory first.
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> ExtractionResult {
    let data = match std::fs::read(path.as_ref()) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.as_ref().display(), e);
            return ExtractionResult::failed();
        }
    };
    extract_bytes(&data, options)
}

/// Extract a PDF held in memory on a blocking task.
///
/// The whole document is processed by that one task.
#[cfg(feature = "async")]
pub async fn extract_bytes_async(data: Vec<u8>, options: ExtractOptions) -> ExtractionResult {
    match tokio::task::spawn_blocking(move || extract_bytes(&data, &options)).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Extraction task failed: {}", e);
            ExtractionResult::failed()
        }
    }
}

/// Validate an upload and open it with the default page source.
pub fn open_bytes(data: &[u8], options: &ExtractOptions) -> Result<LopdfSource> {
    check_upload(data, options)?;

    let source = LopdfSource::load_bytes(data)?;
    if source.is_encrypted() && options.password.is_some() {
        log::warn!("Password was provided but encrypted documents are not decrypted");
    }
    Ok(source)
}

fn check_upload(data: &[u8], options: &ExtractOptions) -> Result<()> {
    let format = validate_upload(data, options.max_file_size)?;
    log::debug!("Opening {} ({} bytes)", format, data.len());
    Ok(())
}

/// Fallible form of [`extract`], keeping the typed error.
pub fn try_extract<S: PageSource + ?Sized>(
    source: &mut S,
    options: &ExtractOptions,
) -> Result<Vec<Page>> {
    let clock = OrderClock::from_options(options);
    let chunker = TextChunker::new(options.chunk_limits);

    let render = options.extract_images && source.supports_rendering();
    if options.extract_images && !render {
        log::info!("Page source cannot render pages, extracting text only");
    }

    let page_count = source.page_count();
    let mut pages = Vec::with_capacity(page_count as usize);

    for page_number in 1..=page_count {
        let page = process_page(source, page_number, &chunker, &clock, options, render)?;
        log::debug!(
            "Page {}/{}: {} items",
            page_number,
            page_count,
            page.content_items.len()
        );
        pages.push(page);
    }

    Ok(pages)
}

fn process_page<S: PageSource + ?Sized>(
    source: &mut S,
    page_number: u32,
    chunker: &TextChunker,
    clock: &OrderClock,
    options: &ExtractOptions,
    render: bool,
) -> Result<Page> {
    let full_text = join_runs(&source.text_runs(page_number)?);

    let images: Vec<String> = if render {
        match source.viewport(page_number, options.scale) {
            Ok(viewport) => {
                extract_page_image(source, page_number, &viewport, options.blank_threshold)
                    .map(|image| image.data_url)
                    .into_iter()
                    .collect()
            }
            Err(e) => {
                log::warn!("No viewport for page {}: {}", page_number, e);
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let chunks = chunker.chunk(&full_text);
    let content_items = assemble(page_number, &chunks, &images, clock);

    Ok(Page::new(page_number, full_text, content_items, images))
}

fn finish(result: Result<Vec<Page>>) -> ExtractionResult {
    if let Err(ref e) = result {
        log::error!("PDF extraction failed: {}", e);
    }
    result.into()
}
