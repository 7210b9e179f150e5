//! Font face with parsed metrics

use ttf_parser::{Face, GlyphId};
use super::FontId;

/// Parsed font face with metrics
pub struct FontFace<'a> {
    /// The underlying ttf-parser face
    face: Face<'a>,
    /// Font ID in database
    pub id: FontId,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from data
    pub fn parse(data: &'a [u8], index: u32, id: FontId) -> Option<Self> {
        Face::parse(data, index).ok().map(|face| Self { face, id })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Pixels per font unit at `size_px`
    pub fn scale(&self, size_px: f32) -> f32 {
        size_px / self.units_per_em().max(1) as f32
    }

    /// Ascent above the baseline in pixels
    pub fn ascent_px(&self, size_px: f32) -> f32 {
        self.face.ascender() as f32 * self.scale(size_px)
    }

    /// Descent below the baseline in pixels (positive)
    pub fn descent_px(&self, size_px: f32) -> f32 {
        -(self.face.descender() as f32) * self.scale(size_px)
    }

    /// Get glyph ID for a character
    pub fn glyph_index(&self, c: char) -> Option<GlyphId> {
        self.face.glyph_index(c)
    }

    /// Check if font has glyph for character
    pub fn has_char(&self, c: char) -> bool {
        self.glyph_index(c).is_some()
    }

    /// Get underlying ttf-parser face
    pub fn ttf_face(&self) -> &Face<'a> {
        &self.face
    }
}
