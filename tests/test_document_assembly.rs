//! End-to-end tests for document assembly.
//!
//! Builds complete documents and verifies the structural invariants a
//! byte-scanning PDF reader relies on: xref offsets, stream lengths, and
//! the page tree.

use playbook_press::catalog::Catalog;
use playbook_press::compose;
use playbook_press::{Color, DocumentAssembler, PageCanvas, Palette};

/// Parse the xref table: (object id, recorded offset) for every in-use entry.
fn xref_offsets(file: &str) -> Vec<(u32, usize)> {
    let (_, tail) = file.split_once("\nxref\n").expect("missing xref keyword");
    let mut lines = tail.lines();
    let subsection = lines.next().expect("missing xref subsection header");
    let count: usize = subsection.split_whitespace().nth(1).unwrap().parse().unwrap();

    let mut offsets = Vec::new();
    for id in 0..count {
        let entry = lines.next().expect("truncated xref table");
        if entry.ends_with("n ") {
            let offset: usize = entry.split_whitespace().next().unwrap().parse().unwrap();
            offsets.push((id as u32, offset));
        }
    }
    offsets
}

fn two_page_document() -> DocumentAssembler {
    let palette = Palette::default();
    let accent = Color::from_hex("#dd2c00").unwrap();

    let mut first = PageCanvas::new(palette, accent);
    first.rect(54.0, 54.0, 100.0, 50.0, Some(Color::from_hex("#ff0000").unwrap()), None, 1.0);

    let mut second = PageCanvas::new(palette, accent);
    second.text(54.0, 700.0, "Hi (there)", 12.0, None, false);

    let mut doc = DocumentAssembler::new();
    doc.add_page(first.finish());
    doc.add_page(second.finish());
    doc
}

#[test]
fn test_two_page_scenario() {
    let file = String::from_utf8(two_page_document().finish().unwrap()).unwrap();

    assert!(file.contains("/Kids [3 0 R 4 0 R] /Count 2"));
    // Page 1: red fill, rectangle path, fill operator.
    assert!(file.contains("1.000 0.000 0.000 rg\n54 54 100 50 re\nf\n"));
    // Page 2: escaped literal string.
    assert!(file.contains(r"(Hi \(there\)) Tj"));
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let file = String::from_utf8(two_page_document().finish().unwrap()).unwrap();
    let offsets = xref_offsets(&file);
    // 2 structural + 2 pages + 2 streams + 2 fonts.
    assert_eq!(offsets.len(), 8);
    for (id, offset) in offsets {
        let marker = format!("{} 0 obj", id);
        assert_eq!(
            &file[offset..offset + marker.len()],
            marker,
            "object {} not found at its recorded offset",
            id
        );
    }
}

#[test]
fn test_startxref_offset() {
    let file = String::from_utf8(two_page_document().finish().unwrap()).unwrap();
    let startxref = regex::Regex::new(r"startxref\n(\d+)\n%%EOF\n$")
        .unwrap()
        .captures(&file)
        .expect("missing startxref block");
    let offset: usize = startxref[1].parse().unwrap();
    assert!(file[offset..].starts_with("xref\n"));
}

#[test]
fn test_stream_lengths_are_exact() {
    let file = String::from_utf8(two_page_document().finish().unwrap()).unwrap();
    let header = regex::Regex::new(r"(\d+) 0 obj << /Length (\d+) >> stream\n").unwrap();
    let mut found = 0;
    for caps in header.captures_iter(&file) {
        let declared: usize = caps[2].parse().unwrap();
        let body_start = caps.get(0).unwrap().end();
        let body_end = file[body_start..]
            .find("endstream endobj")
            .map(|i| body_start + i)
            .expect("missing endstream");
        assert_eq!(declared, file[body_start..body_end].len());
        found += 1;
    }
    assert_eq!(found, 2);
}

#[test]
fn test_trailer_size_counts_free_entry() {
    let file = String::from_utf8(two_page_document().finish().unwrap()).unwrap();
    // Max id 8, plus the id 0 free entry.
    assert!(file.contains("trailer << /Size 9 /Root 1 0 R >>"));
    assert!(file.contains("\nxref\n0 9\n0000000000 65535 f \n"));
}

#[test]
fn test_build_is_idempotent() {
    let first = two_page_document().finish().unwrap();
    let second = two_page_document().finish().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_builtin_playbooks_produce_valid_files() {
    let catalog = Catalog::builtin();
    let palette = Palette::default();
    let dir = tempfile::tempdir().unwrap();

    for book in &catalog.playbooks {
        let mut doc = DocumentAssembler::new();
        for page in compose::pages(book, &catalog.stats, &catalog.sources, palette).unwrap() {
            doc.add_page(page);
        }
        let path = dir.path().join(format!("{}.pdf", book.slug));
        doc.build(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let file = String::from_utf8(bytes).unwrap();
        assert!(file.starts_with("%PDF-1.4\n"), "{}: bad header", book.slug);
        assert!(file.ends_with("%%EOF\n"), "{}: bad EOF marker", book.slug);
        assert!(file.contains("/Count 10"), "{}: wrong page count", book.slug);

        for (id, offset) in xref_offsets(&file) {
            let marker = format!("{} 0 obj", id);
            assert_eq!(&file[offset..offset + marker.len()], marker, "{}: object {}", book.slug, id);
        }
    }
}

#[test]
fn test_identical_content_builds_identical_playbook_bytes() {
    let catalog = Catalog::builtin();
    let palette = Palette::default();
    let book = &catalog.playbooks[0];

    let build = || {
        let mut doc = DocumentAssembler::new();
        for page in compose::pages(book, &catalog.stats, &catalog.sources, palette).unwrap() {
            doc.add_page(page);
        }
        doc.finish().unwrap()
    };
    assert_eq!(build(), build());
}
