//! Benchmarks for the pdfeed pipeline stages.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pdfeed::pipeline::has_visible_content;
use pdfeed::{extract_bytes, ExtractOptions, RasterImage, TextChunker};

/// Creates a minimal synthetic PDF with the given number of pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut content = String::new();
    let mut offsets = Vec::new();

    content.push_str("%PDF-1.4\n");

    offsets.push(content.len());
    content.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i * 2 + 3)).collect();
    offsets.push(content.len());
    content.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids.join(" "),
        page_count
    ));

    let mut next_obj = 3;
    for i in 0..page_count {
        let page_obj = next_obj;
        let content_obj = next_obj + 1;
        next_obj += 2;

        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents {} 0 R >>\nendobj\n",
            page_obj, content_obj
        ));

        let text = format!(
            "BT /F1 12 Tf 72 720 Td (Page {} opens with a sentence of benchmark text.) Tj \
             0 -14 Td (A second line keeps the chunker busy for a while.) Tj ET",
            i + 1
        );
        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
            content_obj,
            text.len(),
            text
        ));
    }

    let xref_offset = content.len();
    content.push_str(&format!("xref\n0 {}\n", next_obj));
    content.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        content.push_str(&format!("{:010} 00000 n \n", offset));
    }

    content.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        next_obj, xref_offset
    ));

    content.into_bytes()
}

/// Long mixed-script text: English sentences with Japanese paragraphs.
fn sample_text(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            if i % 2 == 0 {
                "The quick brown fox jumps over the lazy dog. ".repeat(8)
            } else {
                "これは日本語の段落です。文章を区切るための句点があります！".repeat(4)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_chunking(c: &mut Criterion) {
    let chunker = TextChunker::default();
    let mut group = c.benchmark_group("chunking");

    for paragraphs in [1, 10, 50] {
        let text = sample_text(paragraphs);
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

fn bench_blank_check(c: &mut Criterion) {
    let blank = RasterImage::blank(612, 792);
    let mut inked = RasterImage::blank(612, 792);
    inked.set_pixel(611, 791, [0, 0, 0, 255]);

    // worst cases: a full scan that finds nothing and one that finds ink last
    c.bench_function("blank_check_blank_page", |b| {
        b.iter(|| has_visible_content(black_box(&blank), 250));
    });
    c.bench_function("blank_check_ink_at_end", |b| {
        b.iter(|| has_visible_content(black_box(&inked), 250));
    });
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_bytes");
    let options = ExtractOptions::new().text_only();

    for page_count in [1, 5, 10] {
        let data = create_test_pdf(page_count);
        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| extract_bytes(black_box(&data), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chunking, bench_blank_check, bench_extract);
criterion_main!(benches);
