//! Literal string escaping for content streams.
//!
//! PDF literal strings are delimited by parentheses, so embedded `(`, `)`,
//! and `\` must be escaped before a string can appear after a `Tj` operator.

/// Escape text for embedding inside literal string delimiters.
///
/// Replacement order matters: the backslash pass must run first, otherwise
/// the backslashes introduced for parentheses would be escaped a second
/// time. Newlines become single spaces since the canvas positions each
/// line of text explicitly.
///
/// The result contains no unescaped `(`, `)`, or raw newline.
pub fn escape_literal(text: &str) -> String {
    text.replace('\\', r"\\")
        .replace('(', r"\(")
        .replace(')', r"\)")
        .replace('\n', " ")
}
