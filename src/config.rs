//! Page geometry and color palette configuration.
//!
//! Both are supplied once at startup and passed by value into the
//! components that need them; there is no process-wide mutable palette.

use crate::color::Color;

/// Page width in PDF units (US Letter).
pub const PAGE_WIDTH: f64 = 612.0;
/// Page height in PDF units (US Letter).
pub const PAGE_HEIGHT: f64 = 792.0;
/// Margin on all four sides, in PDF units.
pub const MARGIN: f64 = 54.0;

/// Width of the content area between the left and right margins.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

/// Named document colors shared by every page of every document.
///
/// Accent colors are not part of the palette; each document record carries
/// its own accent token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Full-page background
    pub bg: Color,
    /// Card / panel background
    pub surface: Color,
    /// Slightly raised panel background
    pub surface_alt: Color,
    /// Primary text color
    pub ink: Color,
    /// Body text color
    pub ink_muted: Color,
    /// De-emphasized text color
    pub ink_soft: Color,
}

impl Default for Palette {
    /// The dark theme used by the built-in catalog.
    fn default() -> Self {
        Self {
            bg: Color::from_rgb8(0x0b, 0x0b, 0x0f),
            surface: Color::from_rgb8(0x12, 0x12, 0x18),
            surface_alt: Color::from_rgb8(0x17, 0x17, 0x22),
            ink: Color::from_rgb8(0xff, 0xff, 0xff),
            ink_muted: Color::from_rgb8(0xe5, 0xe5, 0xef),
            ink_soft: Color::from_rgb8(0xc9, 0xc9, 0xd9),
        }
    }
}
