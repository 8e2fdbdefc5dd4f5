//! RGB color model.
//!
//! Colors are three fractional channels derived losslessly from 6-hex-digit
//! tokens. They are used transiently when emitting content stream operators
//! and are never persisted as document objects.

use crate::error::{Error, Result};

/// RGB color representation.
///
/// Channels are in the 0.0 - 1.0 range, computed as `byte / 255`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a color from fractional channels.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a 6-hex-digit color token, with an optional leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use playbook_press::color::Color;
    ///
    /// let red = Color::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0));
    /// ```
    pub fn from_hex(token: &str) -> Result<Self> {
        let digits = token.strip_prefix('#').unwrap_or(token);
        if digits.len() != 6 {
            return Err(Error::MalformedColor {
                token: token.to_string(),
                reason: "expected 6 hex digits",
            });
        }
        // Byte-position slicing below is only safe on ASCII input.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedColor {
                token: token.to_string(),
                reason: "expected hex digits only",
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            // Digits were validated above, so the parse cannot fail.
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };
        Ok(Self::from_rgb8(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Re-quantize the channels back to 8-bit values.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f32| (c * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}
