//! Page layout canvas.
//!
//! A [`PageCanvas`] accumulates instructions for a single page while
//! tracking a vertical writing cursor. It never performs I/O; a finished
//! canvas yields its instruction list for the assembler.
//!
//! The wrapping heuristic approximates rendered width as `size * 0.56`
//! units per character. It is a visual approximation, not font-metric
//! accurate, and output parity depends on keeping the constant as is.

use crate::color::Color;
use crate::config::{CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, Palette};
use crate::content::ContentOp;

/// Approximate glyph width as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.56;
/// Minimum wrap width in characters, regardless of computed capacity.
const MIN_WRAP_CHARS: usize = 30;
/// Height of a section header bar in PDF units.
const HEADER_BAR_HEIGHT: f64 = 24.0;

/// Styling for [`PageCanvas::paragraph`].
///
/// `color` and `max_width` default to the palette body color and the
/// content width when left unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in PDF units
    pub size: f64,
    /// Text color; defaults to the palette's `ink_muted`
    pub color: Option<Color>,
    /// Wrap width in PDF units; defaults to the content width
    pub max_width: Option<f64>,
    /// Line advance as a multiple of the font size
    pub leading: f64,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self { size: 11.0, color: None, max_width: None, leading: 1.4 }
    }
}

impl ParagraphStyle {
    /// Default style at a given font size.
    pub fn sized(size: f64) -> Self {
        Self { size, ..Self::default() }
    }
}

/// Styling for [`PageCanvas::bullet_list`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletStyle {
    /// Font size in PDF units
    pub size: f64,
    /// Text color; defaults to the palette's `ink_muted`
    pub color: Option<Color>,
    /// Wrap width in PDF units; defaults to the content width
    pub max_width: Option<f64>,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self { size: 11.0, color: None, max_width: None }
    }
}

impl BulletStyle {
    /// Default style at a given font size.
    pub fn sized(size: f64) -> Self {
        Self { size, ..Self::default() }
    }
}

/// Drawing and layout surface for one page.
///
/// Primitive operations append instructions at explicit coordinates;
/// composite operations only read and advance the cursor. State is
/// confined to the page being built.
#[derive(Debug, Clone)]
pub struct PageCanvas {
    ops: Vec<ContentOp>,
    cursor: f64,
    palette: Palette,
    accent: Color,
}

impl PageCanvas {
    /// Create a canvas with a full-page background fill and the cursor at
    /// the top margin.
    pub fn new(palette: Palette, accent: Color) -> Self {
        let mut canvas = Self {
            ops: Vec::new(),
            cursor: PAGE_HEIGHT - MARGIN,
            palette,
            accent,
        };
        canvas.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, Some(palette.bg), None, 1.0);
        canvas
    }

    /// Current vertical cursor position.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Move the cursor to an absolute vertical position.
    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    /// The accent color this canvas was constructed with.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// The palette this canvas was constructed with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Finish the page and hand back its instruction list.
    pub fn finish(self) -> Vec<ContentOp> {
        self.ops
    }

    /// Emit a fill color change. Draws nothing by itself.
    pub fn set_fill(&mut self, color: Color) {
        self.ops.push(ContentOp::SetFillRgb(color));
    }

    /// Emit a stroke color change. Draws nothing by itself.
    pub fn set_stroke(&mut self, color: Color) {
        self.ops.push(ContentOp::SetStrokeRgb(color));
    }

    /// Draw a rectangle, filled and/or stroked.
    ///
    /// With neither a fill nor a stroke color the path is recorded but
    /// never painted. That is the documented contract for this edge case,
    /// not an error.
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    ) {
        if let Some(color) = fill {
            self.set_fill(color);
        }
        if let Some(color) = stroke {
            self.set_stroke(color);
            self.ops.push(ContentOp::SetLineWidth(stroke_width));
        }
        self.ops.push(ContentOp::Rect { x, y, w, h });
        match (fill.is_some(), stroke.is_some()) {
            (true, true) => self.ops.push(ContentOp::FillStroke),
            (true, false) => self.ops.push(ContentOp::Fill),
            (false, true) => self.ops.push(ContentOp::Stroke),
            (false, false) => {},
        }
    }

    /// Draw a stroked line segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Option<Color>, width: f64) {
        if let Some(color) = color {
            self.set_stroke(color);
        }
        self.ops.push(ContentOp::SetLineWidth(width));
        self.ops.push(ContentOp::Line { x1, y1, x2, y2 });
    }

    /// Draw a single text run with its baseline at `(x, y)`.
    pub fn text(&mut self, x: f64, y: f64, text: &str, size: f64, color: Option<Color>, bold: bool) {
        if let Some(color) = color {
            self.set_fill(color);
        }
        self.ops.push(ContentOp::BeginText);
        self.ops.push(ContentOp::SetFont { bold, size });
        self.ops.push(ContentOp::MoveText { x, y });
        self.ops.push(ContentOp::ShowText(text.to_string()));
        self.ops.push(ContentOp::EndText);
    }

    /// Paint an accent-colored header bar with a bold title, then advance
    /// the cursor below it.
    pub fn section_header(&mut self, title: &str) {
        let y = self.cursor - HEADER_BAR_HEIGHT;
        self.rect(MARGIN, y, CONTENT_WIDTH, HEADER_BAR_HEIGHT, Some(self.accent), None, 1.0);
        self.text(MARGIN + 12.0, y + 6.0, title, 12.0, Some(self.palette.ink), true);
        self.cursor = y - 18.0;
    }

    /// Wrap `text` into lines and draw them left-aligned at the margin,
    /// advancing the cursor per line plus a trailing gap.
    pub fn paragraph(&mut self, text: &str, style: ParagraphStyle) {
        let color = style.color.unwrap_or(self.palette.ink_muted);
        let budget = wrap_budget(style.max_width.unwrap_or(CONTENT_WIDTH), style.size);
        for line in wrap(text, budget) {
            self.text(MARGIN, self.cursor, &line, style.size, Some(color), false);
            self.cursor -= style.size * style.leading;
        }
        self.cursor -= style.size * 0.4;
    }

    /// Draw each item with a bullet glyph prefix, wrapping it like a
    /// paragraph, then advance past a trailing gap for the whole list.
    pub fn bullet_list<S: AsRef<str>>(&mut self, items: &[S], style: BulletStyle) {
        let color = style.color.unwrap_or(self.palette.ink_muted);
        let budget = wrap_budget(style.max_width.unwrap_or(CONTENT_WIDTH), style.size);
        for item in items {
            for line in wrap(&format!("• {}", item.as_ref()), budget) {
                self.text(MARGIN, self.cursor, &line, style.size, Some(color), false);
                self.cursor -= style.size * 1.35;
            }
        }
        self.cursor -= style.size * 0.3;
    }
}

/// Character budget for a wrap width at a font size.
fn wrap_budget(max_width: f64, size: f64) -> usize {
    ((max_width / (size * CHAR_WIDTH_RATIO)) as usize).max(MIN_WRAP_CHARS)
}

/// Greedy line-fill: accumulate words until the next would exceed the
/// character budget. A single word longer than the budget is placed alone
/// on its own line rather than split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line_chars == 0 {
            line.push_str(word);
            line_chars = word_chars;
        } else if line_chars + 1 + word_chars <= max_chars {
            line.push(' ');
            line.push_str(word);
            line_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_chars = word_chars;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn canvas() -> PageCanvas {
        PageCanvas::new(Palette::default(), Color::from_hex("#dd2c00").unwrap())
    }

    #[test]
    fn test_new_canvas_paints_background() {
        let c = canvas();
        assert_eq!(c.cursor(), 738.0);
        let ops = c.finish();
        assert_eq!(ops[0], ContentOp::SetFillRgb(Palette::default().bg));
        assert_eq!(ops[1], ContentOp::Rect { x: 0.0, y: 0.0, w: 612.0, h: 792.0 });
        assert_eq!(ops[2], ContentOp::Fill);
    }

    #[test]
    fn test_rect_fill_and_stroke_paints_both() {
        let mut c = canvas();
        let before = c.clone().finish().len();
        let ink = Palette::default().ink;
        c.rect(10.0, 10.0, 20.0, 20.0, Some(ink), Some(ink), 2.0);
        let ops = c.finish();
        assert_eq!(ops.last(), Some(&ContentOp::FillStroke));
        assert!(ops[before..].contains(&ContentOp::SetLineWidth(2.0)));
    }

    #[test]
    fn test_unpainted_rect_records_bare_path() {
        let mut c = canvas();
        c.rect(10.0, 10.0, 20.0, 20.0, None, None, 1.0);
        let ops = c.finish();
        assert_eq!(ops.last(), Some(&ContentOp::Rect { x: 10.0, y: 10.0, w: 20.0, h: 20.0 }));
    }

    #[test]
    fn test_line_sets_width_before_segment() {
        let mut c = canvas();
        c.line(54.0, 90.0, 558.0, 90.0, Some(Palette::default().ink_soft), 2.0);
        let ops = c.finish();
        let n = ops.len();
        assert_eq!(ops[n - 3], ContentOp::SetStrokeRgb(Palette::default().ink_soft));
        assert_eq!(ops[n - 2], ContentOp::SetLineWidth(2.0));
        assert_eq!(ops[n - 1], ContentOp::Line { x1: 54.0, y1: 90.0, x2: 558.0, y2: 90.0 });
    }

    #[test]
    fn test_text_run_structure() {
        let mut c = canvas();
        c.text(54.0, 700.0, "Hello", 12.0, None, true);
        let ops = c.finish();
        let n = ops.len();
        assert_eq!(ops[n - 5], ContentOp::BeginText);
        assert_eq!(ops[n - 4], ContentOp::SetFont { bold: true, size: 12.0 });
        assert_eq!(ops[n - 3], ContentOp::MoveText { x: 54.0, y: 700.0 });
        assert_eq!(ops[n - 2], ContentOp::ShowText("Hello".to_string()));
        assert_eq!(ops[n - 1], ContentOp::EndText);
    }

    #[test]
    fn test_section_header_advances_cursor() {
        let mut c = canvas();
        c.section_header("Market signals");
        // Bar height 24 plus an 18-unit gap below it.
        assert_eq!(c.cursor(), 738.0 - 24.0 - 18.0);
    }

    #[test]
    fn test_paragraph_advances_per_line_plus_gap() {
        let mut c = canvas();
        let start = c.cursor();
        // Two short words, one line.
        c.paragraph("hello world", ParagraphStyle::default());
        assert!((start - c.cursor() - (11.0 * 1.4 + 11.0 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_paragraph_still_advances_gap() {
        let mut c = canvas();
        let start = c.cursor();
        c.paragraph("", ParagraphStyle::default());
        assert!((start - c.cursor() - 11.0 * 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_bullet_lines_carry_glyph_prefix() {
        let mut c = canvas();
        c.bullet_list(&["first", "second"], BulletStyle::default());
        let shown: Vec<String> = c
            .finish()
            .into_iter()
            .filter_map(|op| match op {
                ContentOp::ShowText(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec!["• first".to_string(), "• second".to_string()]);
    }

    #[test]
    fn test_wrap_budget_default_paragraph() {
        // 504 / (11 * 0.56) truncates to 81.
        assert_eq!(wrap_budget(CONTENT_WIDTH, 11.0), 81);
    }

    #[test]
    fn test_wrap_budget_floor() {
        assert_eq!(wrap_budget(50.0, 12.0), MIN_WRAP_CHARS);
    }

    #[test]
    fn test_wrap_greedy_fill() {
        let lines = wrap("aa bb cc dd", 5);
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_wrap_long_word_kept_whole() {
        let lines = wrap("hi incomprehensibilities yo", 10);
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("", 30).is_empty());
        assert!(wrap("   ", 30).is_empty());
    }

    proptest! {
        #[test]
        fn prop_wrapped_lines_respect_budget(
            text in "[a-z ]{0,200}",
            max_chars in 5usize..60,
        ) {
            for line in wrap(&text, max_chars) {
                let over_budget = line.chars().count() > max_chars;
                // Only a single oversized word may exceed the budget.
                prop_assert!(!over_budget || !line.contains(' '));
            }
        }

        #[test]
        fn prop_wrap_preserves_words(text in "[a-z ]{0,200}") {
            let rejoined = wrap(&text, 12).join(" ");
            let expected: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(), expected);
        }
    }
}
