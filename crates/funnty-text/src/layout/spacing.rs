//! Manual letter spacing

use crate::Result;

/// A unit of text placed at an anchor x
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    /// The whole line, or a single character when letter spaced
    pub text: String,
    /// Anchor x relative to the block origin
    pub x: f32,
    /// Measured advance of `text`
    pub width: f32,
}

/// Place the characters of `line` starting at `start_x`.
///
/// With zero spacing the line stays a single unit so it is drawn through the
/// shaper (kerning, ligatures). Otherwise every `char` becomes its own unit
/// and the pen advances by its measured width plus `spacing`. Characters are
/// Unicode scalar values, not grapheme clusters, so combining sequences and
/// multi-codepoint emoji are spaced apart.
///
/// An empty line produces no units.
pub fn layout_glyphs(
    line: &str,
    start_x: f32,
    spacing: f32,
    mut measure: impl FnMut(&str) -> Result<f32>,
) -> Result<Vec<GlyphPlacement>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    if spacing == 0.0 {
        return Ok(vec![GlyphPlacement {
            text: line.to_string(),
            x: start_x,
            width: measure(line)?,
        }]);
    }

    let mut placements = Vec::with_capacity(line.len());
    let mut pen_x = start_x;
    let mut buf = [0u8; 4];

    for c in line.chars() {
        let text: &str = c.encode_utf8(&mut buf);
        let width = measure(text)?;
        placements.push(GlyphPlacement { text: text.to_string(), x: pen_x, width });
        pen_x += width + spacing;
    }

    Ok(placements)
}
