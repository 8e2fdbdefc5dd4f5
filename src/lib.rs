//! # Playbook Press
//!
//! Renders structured, multi-page vendor playbooks into minimal PDF files.
//!
//! The crate has two halves:
//!
//! - a **layout API** ([`canvas::PageCanvas`]) that accumulates per-page
//!   vector and text instructions while tracking a vertical writing cursor,
//!   with composite operations for section headers, wrapped paragraphs, and
//!   bullet lists;
//! - a **document assembler** ([`writer::DocumentAssembler`]) that turns
//!   finished pages into a byte-exact file: catalog, page tree, page and
//!   content-stream objects, two shared font resources, cross-reference
//!   table, and trailer.
//!
//! Page building is pure in-memory mutation; the only I/O is the final
//! write in [`writer::DocumentAssembler::build`]. Separate documents share
//! no state and can be built independently.
//!
//! ## Quick start
//!
//! ```no_run
//! use playbook_press::{Color, DocumentAssembler, PageCanvas, Palette};
//!
//! # fn main() -> playbook_press::Result<()> {
//! let accent = Color::from_hex("#dd2c00")?;
//! let mut page = PageCanvas::new(Palette::default(), accent);
//! page.section_header("Executive summary");
//! page.paragraph("Hello from the press.", Default::default());
//!
//! let mut doc = DocumentAssembler::new();
//! doc.add_page(page.finish());
//! doc.build("out.pdf")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod canvas;
pub mod catalog;
pub mod color;
pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod escape;
pub mod object;
pub mod writer;

pub use canvas::{BulletStyle, PageCanvas, ParagraphStyle};
pub use catalog::Catalog;
pub use color::Color;
pub use config::Palette;
pub use content::ContentOp;
pub use error::{Error, Result};
pub use writer::DocumentAssembler;
