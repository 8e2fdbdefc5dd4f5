//! Document assembly.
//!
//! Collects finished pages and emits the complete file: header, every
//! indirect object in ascending id order, the cross-reference table, and
//! the trailer. This module owns the only I/O in the crate.

use crate::config::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::content::{encode_stream, ContentOp};
use crate::error::Result;
use crate::object::{DocObject, ObjectId};
use std::collections::BTreeMap;
use std::io::Write;

/// Up-front id allocation for one document.
///
/// All ids are dense and derived from the page count alone: catalog 1,
/// page tree 2, then a contiguous block of page objects, a contiguous
/// block of content streams (each page's stream sits at `page id + N`),
/// and the two shared fonts last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPlan {
    page_count: u32,
}

impl ObjectPlan {
    /// The catalog is always object 1.
    pub const CATALOG: ObjectId = 1;
    /// The page tree is always object 2.
    pub const PAGE_TREE: ObjectId = 2;

    /// Compute the plan for a document with `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self { page_count: page_count as u32 }
    }

    /// Id of page `index` (0-based append order).
    pub fn page_id(&self, index: usize) -> ObjectId {
        3 + index as u32
    }

    /// Id of the content stream belonging to page `index`.
    pub fn content_id(&self, index: usize) -> ObjectId {
        3 + self.page_count + index as u32
    }

    /// Id of the shared regular font.
    pub fn font_regular(&self) -> ObjectId {
        3 + 2 * self.page_count
    }

    /// Id of the shared bold font.
    pub fn font_bold(&self) -> ObjectId {
        4 + 2 * self.page_count
    }

    /// Highest allocated id.
    pub fn max_id(&self) -> ObjectId {
        self.font_bold()
    }
}

/// Assembles finished pages into a single binary file.
///
/// Pages are append-only and never mutated once added. `finish` (or
/// `build`) is invoked exactly once per document; the assembler is not
/// reused afterwards.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    pages: Vec<Vec<ContentOp>>,
}

impl DocumentAssembler {
    /// Create an assembler with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished page's instruction list.
    pub fn add_page(&mut self, ops: Vec<ContentOp>) {
        self.pages.push(ops);
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document to its final byte sequence.
    ///
    /// Offsets recorded in the xref table are measured in encoded bytes
    /// from the start of the output, so a byte-scanning reader finds every
    /// object exactly where the table says it is.
    pub fn finish(&self) -> Result<Vec<u8>> {
        let plan = ObjectPlan::new(self.pages.len());

        let mut objects: Vec<(ObjectId, DocObject)> = Vec::with_capacity(4 + 2 * self.pages.len());
        objects.push((ObjectPlan::CATALOG, DocObject::Catalog { pages: ObjectPlan::PAGE_TREE }));
        objects.push((
            ObjectPlan::PAGE_TREE,
            DocObject::PageTree {
                kids: (0..self.pages.len()).map(|i| plan.page_id(i)).collect(),
            },
        ));
        for i in 0..self.pages.len() {
            objects.push((
                plan.page_id(i),
                DocObject::Page {
                    parent: ObjectPlan::PAGE_TREE,
                    width: PAGE_WIDTH,
                    height: PAGE_HEIGHT,
                    contents: plan.content_id(i),
                    font_regular: plan.font_regular(),
                    font_bold: plan.font_bold(),
                },
            ));
        }
        for (i, ops) in self.pages.iter().enumerate() {
            objects.push((plan.content_id(i), DocObject::ContentStream { data: encode_stream(ops) }));
        }
        objects.push((plan.font_regular(), DocObject::Font { base_font: "Helvetica" }));
        objects.push((plan.font_bold(), DocObject::Font { base_font: "Helvetica-Bold" }));

        // The plan allocates densely and the pushes above follow it; a
        // mismatch here is a defect in the assembler, not in caller input.
        debug_assert!(objects.windows(2).all(|w| w[1].0 == w[0].0 + 1));
        debug_assert_eq!(objects.last().map(|(id, _)| *id), Some(plan.max_id()));

        let mut out: Vec<u8> = Vec::new();
        writeln!(out, "%PDF-1.4")?;

        let mut offsets: BTreeMap<ObjectId, usize> = BTreeMap::new();
        for (id, obj) in &objects {
            offsets.insert(*id, out.len());
            out.extend_from_slice(&obj.serialize(*id));
        }

        let xref_offset = out.len();
        writeln!(out, "xref")?;
        writeln!(out, "0 {}", plan.max_id() + 1)?;
        writeln!(out, "0000000000 65535 f ")?;
        for id in 1..=plan.max_id() {
            // Ids are dense by construction, but an unallocated id in the
            // range still gets a well-formed free entry.
            match offsets.get(&id) {
                Some(offset) => writeln!(out, "{:010} 00000 n ", offset)?,
                None => writeln!(out, "0000000000 65535 f ")?,
            }
        }

        writeln!(out, "trailer << /Size {} /Root {} 0 R >>", plan.max_id() + 1, ObjectPlan::CATALOG)?;
        writeln!(out, "startxref")?;
        writeln!(out, "{}", xref_offset)?;
        writeln!(out, "%%EOF")?;

        log::debug!("assembled {} pages into {} bytes", self.pages.len(), out.len());
        Ok(out)
    }

    /// Serialize the document and write it to `path` in one attempt.
    ///
    /// Filesystem failures propagate unmodified; there is no temp-file
    /// rename step, so a failed write may leave a partial file behind.
    pub fn build(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
