//! End-to-end tests over real PDF bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdfeed::pipeline::NO_CONTENT_CAPTION;
use pdfeed::{extract_bytes, extract_file, ExtractOptions, EXTRACTION_FAILED_MESSAGE};

/// Creates a PDF with one page per entry; each entry is drawn as lines.
fn create_test_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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
            "Resources" => resources_id,
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

// PDFium lays text out differently
#[cfg(not(feature = "pdfium"))]
#[test]
fn test_extract_bytes_text_pages() {
    let data = create_test_pdf(&[&["Hello World.", "This is a test."], &[]]);
    let result = extract_bytes(&data, &ExtractOptions::default());

    assert!(result.success);
    let pages = result.pages();
    assert_eq!(pages.len(), 2);

    assert_eq!(pages[0].full_text, "Hello World.\nThis is a test.");
    assert_eq!(pages[0].content_items.len(), 1);
    assert_eq!(
        pages[0].content_items[0].content(),
        "Hello World.\nThis is a test."
    );

    // lopdf has no rasterizer, so the empty page falls back to the placeholder
    assert!(pages[1].images.is_empty());
    assert_eq!(pages[1].content_items[0].content(), NO_CONTENT_CAPTION);
}

// PDFium lays text out differently
#[cfg(not(feature = "pdfium"))]
#[test]
fn test_extract_file_roundtrip() {
    let data = create_test_pdf(&[&["Content read from a file on disk."]]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, &data).unwrap();

    let result = extract_file(&path, &ExtractOptions::default());
    assert!(result.success);
    assert_eq!(
        result.pages()[0].content_items[0].content(),
        "Content read from a file on disk."
    );
}

#[test]
fn test_extract_bytes_corrupt_document() {
    let mut data = create_test_pdf(&[&["Soon to be truncated."]]);
    data.truncate(40);

    let result = extract_bytes(&data, &ExtractOptions::default());
    assert!(!result.success);
    assert!(result.pages.is_none());
    assert_eq!(result.error.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_extract_bytes_async() {
    let data = create_test_pdf(&[&["Extracted on a blocking task."]]);
    let result = pdfeed::extract_bytes_async(data, ExtractOptions::default()).await;
    assert!(result.success);
    assert_eq!(result.pages().len(), 1);
}
