//! Funnty Render - Rasterizer
//!
//! CPU rendering of [`RenderPlan`](funnty_text::RenderPlan)s using tiny-skia.
//!
//! This crate provides:
//! - [`Surface`]: a logical-pixel canvas backed by a tiny-skia Pixmap, with
//!   the device pixel ratio fixed at construction time
//! - [`render`]: stroke-then-fill text drawing in the plan's coordinate frame
//! - [`Color`]: CSS colour parsing for fill and stroke styles

mod surface;
mod rasterizer;

pub use surface::Surface;
pub use rasterizer::render;

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to outline text: {0}")]
    Outline(#[from] funnty_text::TextError),

    #[error("Invalid surface size {width}x{height} at ratio {ratio}")]
    InvalidSurface { width: f32, height: f32, ratio: f32 },
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Color (RGBA)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse any CSS colour (`#f00`, `#ff000080`, `rgb(...)`, `hsl(...)`,
    /// named colours)
    pub fn parse(css: &str) -> Option<Self> {
        let [r, g, b, a] = csscolorparser::parse(css.trim()).ok()?.to_rgba8();
        Some(Self::rgba(r, g, b, a))
    }

    /// Parse a CSS colour, falling back to opaque black like a canvas that
    /// ignores an invalid style assignment
    pub fn parse_or_black(css: &str) -> Self {
        Self::parse(css).unwrap_or_else(|| {
            tracing::warn!(color = css, "unparseable colour, using black");
            Self::BLACK
        })
    }

    pub fn to_tiny_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}
