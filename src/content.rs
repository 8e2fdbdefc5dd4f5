//! Content stream instructions.
//!
//! Each page is an ordered sequence of [`ContentOp`] values. Order is
//! significant: later instructions composite over earlier ones (painter's
//! algorithm). An op encodes to exactly one line of the page's content
//! stream.

use crate::color::Color;
use crate::escape::escape_literal;
use std::fmt::Write;

/// One drawing or state instruction in a page's content stream.
///
/// Ops are immutable once appended to a page. State-change ops (colors,
/// line width, font) draw nothing by themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOp {
    /// Set fill color (rg)
    SetFillRgb(Color),
    /// Set stroke color (RG)
    SetStrokeRgb(Color),
    /// Set line width (w)
    SetLineWidth(f64),
    /// Rectangle path (re)
    Rect {
        /// Left edge
        x: f64,
        /// Bottom edge
        y: f64,
        /// Width
        w: f64,
        /// Height
        h: f64,
    },
    /// Straight line segment, stroked immediately (m / l / S)
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Select one of the two document fonts and a size (Tf)
    SetFont {
        /// Bold face (F2) instead of regular (F1)
        bold: bool,
        /// Font size in PDF units
        size: f64,
    },
    /// Move text position (Td)
    MoveText {
        /// Baseline x
        x: f64,
        /// Baseline y
        y: f64,
    },
    /// Show a text run (Tj); the string is escaped at encode time
    ShowText(String),
    /// Fill the current path (f)
    Fill,
    /// Stroke the current path (S)
    Stroke,
    /// Fill then stroke the current path (B)
    FillStroke,
}

impl ContentOp {
    /// Encode this op as one content stream line.
    pub fn encode(&self) -> String {
        match self {
            ContentOp::SetFillRgb(c) => format!("{:.3} {:.3} {:.3} rg", c.r, c.g, c.b),
            ContentOp::SetStrokeRgb(c) => format!("{:.3} {:.3} {:.3} RG", c.r, c.g, c.b),
            ContentOp::SetLineWidth(w) => format!("{} w", w),
            ContentOp::Rect { x, y, w, h } => format!("{} {} {} {} re", x, y, w, h),
            ContentOp::Line { x1, y1, x2, y2 } => format!("{} {} m {} {} l S", x1, y1, x2, y2),
            ContentOp::BeginText => "BT".to_string(),
            ContentOp::EndText => "ET".to_string(),
            ContentOp::SetFont { bold, size } => {
                format!("{} {} Tf", if *bold { "/F2" } else { "/F1" }, size)
            },
            ContentOp::MoveText { x, y } => format!("{} {} Td", x, y),
            ContentOp::ShowText(text) => format!("({}) Tj", escape_literal(text)),
            ContentOp::Fill => "f".to_string(),
            ContentOp::Stroke => "S".to_string(),
            ContentOp::FillStroke => "B".to_string(),
        }
    }
}

/// Encode a page's ops as content stream bytes.
///
/// Ops are joined by newlines with a single trailing newline. The byte
/// length of the result is what the stream's `/Length` entry must carry.
pub fn encode_stream(ops: &[ContentOp]) -> Vec<u8> {
    let mut body = String::new();
    for op in ops {
        // Writing into a String cannot fail.
        let _ = writeln!(body, "{}", op.encode());
    }
    body.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ops_use_three_decimals() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(ContentOp::SetFillRgb(red).encode(), "1.000 0.000 0.000 rg");
        assert_eq!(ContentOp::SetStrokeRgb(red).encode(), "1.000 0.000 0.000 RG");
    }

    #[test]
    fn test_integral_coordinates_have_no_fraction() {
        let op = ContentOp::Rect { x: 54.0, y: 54.0, w: 100.0, h: 50.0 };
        assert_eq!(op.encode(), "54 54 100 50 re");
    }

    #[test]
    fn test_fractional_coordinates_keep_fraction() {
        let op = ContentOp::MoveText { x: 54.0, y: 722.6 };
        assert_eq!(op.encode(), "54 722.6 Td");
    }

    #[test]
    fn test_line_is_a_single_stroked_segment() {
        let op = ContentOp::Line { x1: 54.0, y1: 90.0, x2: 558.0, y2: 90.0 };
        assert_eq!(op.encode(), "54 90 m 558 90 l S");
    }

    #[test]
    fn test_show_text_escapes() {
        let op = ContentOp::ShowText("Hi (there)".to_string());
        assert_eq!(op.encode(), r"(Hi \(there\)) Tj");
    }

    #[test]
    fn test_font_selection_is_binary() {
        assert_eq!(ContentOp::SetFont { bold: false, size: 11.0 }.encode(), "/F1 11 Tf");
        assert_eq!(ContentOp::SetFont { bold: true, size: 9.5 }.encode(), "/F2 9.5 Tf");
    }

    #[test]
    fn test_encode_stream_trailing_newline() {
        let ops = vec![ContentOp::BeginText, ContentOp::EndText];
        assert_eq!(encode_stream(&ops), b"BT\nET\n");
    }

    #[test]
    fn test_encode_stream_length_counts_bytes() {
        // The bullet glyph is multi-byte in UTF-8; /Length accounting
        // must measure encoded bytes, not characters.
        let ops = vec![ContentOp::ShowText("• item".to_string())];
        let bytes = encode_stream(&ops);
        assert_eq!(bytes.len(), "(• item) Tj\n".len());
        assert!(bytes.len() > "(• item) Tj\n".chars().count());
    }
}
