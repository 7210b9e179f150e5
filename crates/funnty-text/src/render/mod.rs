//! Glyph outline module

mod outline;

pub use outline::{GlyphOutliner, TextOutline, FontOutliner, BlockOutliner};
