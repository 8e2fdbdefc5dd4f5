//! Indirect object model.
//!
//! Every logical object in the output file is a tagged variant with its own
//! serializer, rather than a dynamically-keyed dictionary. Identity lives
//! outside the object: the assembler's allocation plan decides which id a
//! body is written under.

use std::fmt::Write;

/// Identifier of an indirect object. Densely allocated starting at 1;
/// id 0 is the reserved free entry in the xref table.
pub type ObjectId = u32;

/// A logical document object, ready to serialize under an assigned id.
#[derive(Debug, Clone, PartialEq)]
pub enum DocObject {
    /// Document catalog, always object 1.
    Catalog {
        /// Id of the page tree object
        pages: ObjectId,
    },
    /// Page tree, always object 2.
    PageTree {
        /// Page object ids in append order
        kids: Vec<ObjectId>,
    },
    /// A single page.
    Page {
        /// Id of the page tree
        parent: ObjectId,
        /// Media box width in PDF units
        width: f64,
        /// Media box height in PDF units
        height: f64,
        /// Id of this page's content stream
        contents: ObjectId,
        /// Id of the shared regular font
        font_regular: ObjectId,
        /// Id of the shared bold font
        font_bold: ObjectId,
    },
    /// A page's encoded content stream.
    ContentStream {
        /// Encoded stream body; `/Length` is its exact byte count
        data: Vec<u8>,
    },
    /// One of the two shared Type1 font resources. Not embedded; the
    /// viewer supplies the standard face.
    Font {
        /// Base font name (`Helvetica` or `Helvetica-Bold`)
        base_font: &'static str,
    },
}

impl DocObject {
    /// Serialize this object as an indirect object definition under `id`.
    ///
    /// Bodies are single-line dictionaries; the byte layout is part of the
    /// output format and must not change.
    pub fn serialize(&self, id: ObjectId) -> Vec<u8> {
        let mut buf = String::new();
        match self {
            DocObject::Catalog { pages } => {
                let _ = writeln!(buf, "{} 0 obj << /Type /Catalog /Pages {} 0 R >> endobj", id, pages);
            },
            DocObject::PageTree { kids } => {
                let refs: Vec<String> = kids.iter().map(|k| format!("{} 0 R", k)).collect();
                let _ = writeln!(
                    buf,
                    "{} 0 obj << /Type /Pages /Kids [{}] /Count {} >> endobj",
                    id,
                    refs.join(" "),
                    kids.len()
                );
            },
            DocObject::Page { parent, width, height, contents, font_regular, font_bold } => {
                let _ = writeln!(
                    buf,
                    "{} 0 obj << /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                     /Contents {} 0 R /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> >> endobj",
                    id, parent, width, height, contents, font_regular, font_bold
                );
            },
            DocObject::ContentStream { data } => {
                let _ = writeln!(buf, "{} 0 obj << /Length {} >> stream", id, data.len());
                return {
                    let mut bytes = buf.into_bytes();
                    bytes.extend_from_slice(data);
                    bytes.extend_from_slice(b"endstream endobj\n");
                    bytes
                };
            },
            DocObject::Font { base_font } => {
                let _ = writeln!(
                    buf,
                    "{} 0 obj << /Type /Font /Subtype /Type1 /BaseFont /{} >> endobj",
                    id, base_font
                );
            },
        }
        buf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_serialization() {
        let obj = DocObject::Catalog { pages: 2 };
        assert_eq!(obj.serialize(1), b"1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n");
    }

    #[test]
    fn test_page_tree_lists_kids_in_order() {
        let obj = DocObject::PageTree { kids: vec![3, 4, 5] };
        assert_eq!(
            obj.serialize(2),
            b"2 0 obj << /Type /Pages /Kids [3 0 R 4 0 R 5 0 R] /Count 3 >> endobj\n"
        );
    }

    #[test]
    fn test_empty_page_tree() {
        let obj = DocObject::PageTree { kids: Vec::new() };
        assert_eq!(obj.serialize(2), b"2 0 obj << /Type /Pages /Kids [] /Count 0 >> endobj\n");
    }

    #[test]
    fn test_page_serialization() {
        let obj = DocObject::Page {
            parent: 2,
            width: 612.0,
            height: 792.0,
            contents: 5,
            font_regular: 7,
            font_bold: 8,
        };
        let text = String::from_utf8(obj.serialize(3)).unwrap();
        assert_eq!(
            text,
            "3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 5 0 R /Resources << /Font << /F1 7 0 R /F2 8 0 R >> >> >> endobj\n"
        );
    }

    #[test]
    fn test_content_stream_length_is_exact_byte_count() {
        let data = "0.000 0.000 0.000 rg\n".as_bytes().to_vec();
        let obj = DocObject::ContentStream { data: data.clone() };
        let text = String::from_utf8(obj.serialize(5)).unwrap();
        assert!(text.starts_with(&format!("5 0 obj << /Length {} >> stream\n", data.len())));
        assert!(text.ends_with("endstream endobj\n"));
    }

    #[test]
    fn test_font_serialization() {
        let obj = DocObject::Font { base_font: "Helvetica-Bold" };
        assert_eq!(
            obj.serialize(8),
            b"8 0 obj << /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >> endobj\n"
        );
    }
}
