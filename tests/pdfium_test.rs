//! End-to-end rendering tests through the PDFium page source.
#![cfg(feature = "pdfium")]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdfeed::pipeline::PNG_DATA_URL_PREFIX;
use pdfeed::source::create_pdfium;
use pdfeed::{extract_bytes, ExtractOptions};

/// One page per entry; each page fills a black rectangle when `true`.
fn create_drawing_pdf(pages: &[bool]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for &filled in pages {
        let operations = if filled {
            vec![
                Operation::new("rg", vec![0.into(), 0.into(), 0.into()]),
                Operation::new("re", vec![50.into(), 50.into(), 300.into(), 300.into()]),
                Operation::new("f", vec![]),
            ]
        } else {
            Vec::new()
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 400.into(), 400.into()],
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn pdfium_available() -> bool {
    match create_pdfium() {
        Ok(_) => true,
        Err(e) => {
            eprintln!("skipped: {}", e);
            false
        }
    }
}

#[test]
fn test_drawn_page_without_text_becomes_image_item() {
    if !pdfium_available() {
        return;
    }

    let data = create_drawing_pdf(&[false, true]);
    let result = extract_bytes(&data, &ExtractOptions::default());
    assert!(result.success);

    let pages = result.pages();
    assert_eq!(pages.len(), 2);

    // blank page: placeholder only
    assert!(pages[0].images.is_empty());
    assert_eq!(pages[0].content_items.len(), 1);
    assert!(pages[0].content_items[0].is_text());

    // drawn page: exactly one image item, no text
    assert_eq!(pages[1].images.len(), 1);
    assert_eq!(pages[1].content_items.len(), 1);
    let item = &pages[1].content_items[0];
    assert!(item.is_image());
    assert_eq!(item.content(), "Page 2");
    assert!(item.image_data().unwrap().starts_with(PNG_DATA_URL_PREFIX));
}

#[test]
fn test_text_only_skips_rendering() {
    let data = create_drawing_pdf(&[true]);
    let result = extract_bytes(&data, &ExtractOptions::new().text_only());
    assert!(result.success);
    assert!(result.pages()[0].images.is_empty());
}
