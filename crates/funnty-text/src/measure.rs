//! Text measurement
//!
//! The layout engine only ever asks one question: how wide is this string
//! in this font? [`TextMeasurer`] is that seam. [`FontMeasurer`] answers it
//! by shaping against real font data; [`MonospaceMeasurer`] answers it with a
//! fixed advance per character and needs no fonts at all.

use crate::font::{FontDatabase, FontSpec};
use crate::shaping::TextShaper;
use crate::{Result, TextError};

/// Text-width measurement for a family/size/weight triple
pub trait TextMeasurer {
    /// Advance width of `text` in logical pixels
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> Result<f32>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> Result<f32> {
        (**self).measure_text_width(text, font)
    }
}

/// Measures by shaping with rustybuzz against the font database.
///
/// The requested family is resolved through the fallback chain, so an
/// unloaded family measures with whatever face stands in for it.
pub struct FontMeasurer<'a> {
    db: &'a FontDatabase,
    shaper: TextShaper,
}

impl<'a> FontMeasurer<'a> {
    pub fn new(db: &'a FontDatabase) -> Self {
        Self { db, shaper: TextShaper::new() }
    }
}

impl TextMeasurer for FontMeasurer<'_> {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> Result<f32> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let font_id = self.db.query(&font.query()).ok_or_else(|| TextError::MeasurementFailed {
            text: text.to_string(),
            reason: format!("no face available for {:?}", font.family),
        })?;
        let run = self.shaper.shape(self.db, font_id, text, font.size_px)?;
        Ok(run.width())
    }
}

/// Fixed advance per character: `size_px * em_ratio` for every `char`.
///
/// Deterministic and font-free; used for headless layout and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub em_ratio: f32,
}

impl MonospaceMeasurer {
    pub fn new(em_ratio: f32) -> Self {
        Self { em_ratio }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> Result<f32> {
        Ok(text.chars().count() as f32 * font.size_px * self.em_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontWeight;

    #[test]
    fn test_monospace_counts_chars_not_bytes() {
        let m = MonospaceMeasurer::new(0.5);
        let font = FontSpec::new("Any", 20.0, FontWeight::NORMAL);
        assert_eq!(m.measure_text_width("abc", &font).unwrap(), 30.0);
        assert_eq!(m.measure_text_width("héé", &font).unwrap(), 30.0);
        assert_eq!(m.measure_text_width("", &font).unwrap(), 0.0);
    }

    #[test]
    fn test_font_measurer_without_fonts_fails() {
        let db = FontDatabase::new();
        let m = FontMeasurer::new(&db);
        let font = FontSpec::new("Montserrat", 20.0, FontWeight::NORMAL);
        assert!(matches!(
            m.measure_text_width("hello", &font),
            Err(TextError::MeasurementFailed { .. })
        ));
        // Empty text never needs a face
        assert_eq!(m.measure_text_width("", &font).unwrap(), 0.0);
    }
}
