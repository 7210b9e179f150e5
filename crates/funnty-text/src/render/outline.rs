//! Glyph outlining
//!
//! Converts text into tiny-skia paths the rasterizer can fill and stroke.

use ttf_parser::{GlyphId, OutlineBuilder};

use crate::font::{FontDatabase, FontFace, FontSpec};
use crate::shaping::TextShaper;
use crate::{Result, TextError};

/// Outline of a text unit with its pen origin on the alphabetic baseline
#[derive(Debug, Clone)]
pub struct TextOutline {
    /// Glyph outlines in pixels, y down; `None` when nothing is visible
    pub path: Option<tiny_skia::Path>,
    /// Advance width in pixels
    pub advance: f32,
    /// Ascent above the baseline in pixels
    pub ascent: f32,
    /// Descent below the baseline in pixels (positive)
    pub descent: f32,
}

impl TextOutline {
    /// Distance from the middle of the em box down to the alphabetic
    /// baseline, i.e. where to put the baseline for `textBaseline = middle`
    pub fn middle_to_baseline(&self) -> f32 {
        (self.ascent - self.descent) / 2.0
    }
}

/// Produces drawable outlines for text units
pub trait GlyphOutliner {
    fn outline_text(&self, text: &str, font: &FontSpec) -> Result<TextOutline>;
}

impl<O: GlyphOutliner + ?Sized> GlyphOutliner for &O {
    fn outline_text(&self, text: &str, font: &FontSpec) -> Result<TextOutline> {
        (**self).outline_text(text, font)
    }
}

/// Outlines real font glyphs: shaped with rustybuzz, outlined with ttf-parser
pub struct FontOutliner<'a> {
    db: &'a FontDatabase,
    shaper: TextShaper,
}

impl<'a> FontOutliner<'a> {
    pub fn new(db: &'a FontDatabase) -> Self {
        Self { db, shaper: TextShaper::new() }
    }
}

impl GlyphOutliner for FontOutliner<'_> {
    fn outline_text(&self, text: &str, font: &FontSpec) -> Result<TextOutline> {
        let font_id = self.db.query(&font.query())
            .ok_or_else(|| TextError::OutlineFailed(format!("no face available for {:?}", font.family)))?;

        self.db.with_face_data(font_id, |data, index| -> Result<TextOutline> {
            let face = FontFace::parse(data, index, font_id)
                .ok_or_else(|| TextError::FontParsing(format!("face {index} of {:?}", font.family)))?;
            let run = self.shaper.shape_with_data(data, index, text, font.size_px)?;

            let mut builder = PathBuilder::new(face.scale(font.size_px));
            for glyph in run.positioned_glyphs() {
                builder.set_origin(glyph.x, glyph.y);
                // Glyphs without outlines (spaces) just advance the pen
                let _ = face.ttf_face().outline_glyph(GlyphId(glyph.glyph_id), &mut builder);
            }

            Ok(TextOutline {
                path: builder.finish(),
                advance: run.width(),
                ascent: face.ascent_px(font.size_px),
                descent: face.descent_px(font.size_px),
            })
        }).ok_or_else(|| TextError::FontNotFound(format!("{font_id:?} is not in the database")))?
    }
}

/// Draws every visible character as a solid block with a fixed advance.
///
/// Font-free stand-in for [`FontOutliner`]; advances agree with
/// [`MonospaceMeasurer`](crate::MonospaceMeasurer) of the same ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockOutliner {
    pub em_ratio: f32,
}

impl BlockOutliner {
    /// Ascent as a fraction of the font size
    pub const ASCENT: f32 = 0.8;
    /// Descent as a fraction of the font size
    pub const DESCENT: f32 = 0.2;
    /// Block height as a fraction of the font size
    pub const BLOCK_HEIGHT: f32 = 0.7;

    pub fn new(em_ratio: f32) -> Self {
        Self { em_ratio }
    }
}

impl Default for BlockOutliner {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl GlyphOutliner for BlockOutliner {
    fn outline_text(&self, text: &str, font: &FontSpec) -> Result<TextOutline> {
        let advance = font.size_px * self.em_ratio;
        let height = font.size_px * Self::BLOCK_HEIGHT;
        let mut builder = tiny_skia::PathBuilder::new();

        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let x = i as f32 * advance + advance * 0.1;
            if let Some(rect) = tiny_skia::Rect::from_xywh(x, -height, advance * 0.8, height) {
                builder.push_rect(rect);
            }
        }

        Ok(TextOutline {
            path: builder.finish(),
            advance: text.chars().count() as f32 * advance,
            ascent: font.size_px * Self::ASCENT,
            descent: font.size_px * Self::DESCENT,
        })
    }
}

/// Path builder that converts ttf-parser outlines to tiny-skia paths
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl PathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Move the pen origin (pixels) for the next glyph
    fn set_origin(&mut self, x: f32, y: f32) {
        self.origin_x = x;
        self.origin_y = y;
    }

    fn transform_x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn transform_y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale  // Flip Y axis
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.transform_x(x), self.transform_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.transform_x(x), self.transform_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x2), self.transform_y(y2),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
