//! Funnty Text - Text Layout Engine
//!
//! This crate turns a [`StyleConfig`] into a ready-to-draw [`RenderPlan`]:
//! - Font loading and matching (fontdb)
//! - Text measurement (rustybuzz shaping, or a fixed-advance heuristic)
//! - Greedy word wrapping that honours explicit newlines
//! - Manual letter spacing
//! - Block layout (vertical centring, alignment anchors, rotation/scale)
//! - Glyph outlines as tiny-skia paths for the rasterizer

pub mod font;
pub mod shaping;
pub mod measure;
pub mod layout;
pub mod render;
pub mod style;

pub use font::{FontDatabase, FontFace, FontId, FontLoader, FontQuery, FontReadiness, FontSpec, FontStyle, FontWeight};
pub use shaping::{TextShaper, ShapedGlyph, ShapedRun};
pub use measure::{TextMeasurer, FontMeasurer, MonospaceMeasurer};
pub use layout::{
    compute_render_plan, layout_glyphs, wrap_text,
    DisplayLine, GlyphPlacement, Point, Rect, RenderPlan, TextAlign, Transform2D,
};
pub use render::{GlyphOutliner, TextOutline, FontOutliner, BlockOutliner};
pub use style::{StyleConfig, StyleOverride};

/// Text layout error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Shaping failed: {0}")]
    ShapingFailed(String),

    #[error("Measurement failed for {text:?}: {reason}")]
    MeasurementFailed { text: String, reason: String },

    #[error("Outline failed: {0}")]
    OutlineFailed(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
