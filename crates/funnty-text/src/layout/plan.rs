//! Block layout: wrapped lines centred on the surface

use super::{layout_glyphs, wrap_text, DisplayLine, Point, Rect, RenderPlan, TextAlign, Transform2D};
use crate::measure::TextMeasurer;
use crate::style::StyleConfig;
use crate::Result;

/// Lay out `config.text` for a surface of the given logical size.
///
/// The block of N lines is centred on the surface: line `i` sits at
/// `(i - (N-1)/2) * line_height` from the centre. Lines are anchored at the
/// centre for `center`, and half the wrap width to the left or right
/// otherwise. Rotation and scale wrap the whole block around the centre.
///
/// A non-positive font size or a zero-area surface yields an empty plan.
pub fn compute_render_plan<M: TextMeasurer + ?Sized>(
    config: &StyleConfig,
    surface_width: f32,
    surface_height: f32,
    measurer: &M,
) -> Result<RenderPlan> {
    let mut plan = RenderPlan::empty(surface_width, surface_height);

    if !(config.size_px > 0.0 && config.size_px.is_finite()) {
        tracing::debug!(size_px = config.size_px, "non-positive font size, nothing to lay out");
        return Ok(plan);
    }
    if !(surface_width > 0.0 && surface_height > 0.0) {
        tracing::debug!(surface_width, surface_height, "zero-area surface, nothing to lay out");
        return Ok(plan);
    }

    let font = config.font_spec();
    let mut measure = |s: &str| measurer.measure_text_width(s, &font);

    let wrap_width = if config.max_width_px > 0.0 {
        config.max_width_px
    } else {
        surface_width - 2.0 * config.padding_px
    };

    let texts = wrap_text(&config.text, wrap_width, &mut measure)?;

    let line_height_px = config.size_px * config.line_height_multiplier;
    let anchor_x = match config.alignment {
        TextAlign::Center => 0.0,
        TextAlign::Left => -wrap_width / 2.0,
        TextAlign::Right => wrap_width / 2.0,
    };
    let middle = (texts.len() as f32 - 1.0) / 2.0;

    let mut lines = Vec::with_capacity(texts.len());
    for (index, text) in texts.into_iter().enumerate() {
        let glyphs = layout_glyphs(&text, anchor_x, config.letter_spacing_px, &mut measure)?;
        lines.push(DisplayLine {
            index,
            text,
            offset_y: (index as f32 - middle) * line_height_px,
            anchor_x,
            align: config.alignment,
            glyphs,
        });
    }

    plan.lines = lines;
    plan.line_height_px = line_height_px;
    if config.has_transform() {
        plan.transform = Transform2D::rotate_scale(config.rotation_deg, config.scale_factor);
    }
    plan.bounding_box = bounding_box(&plan, config);

    tracing::debug!(
        lines = plan.lines.len(),
        line_height_px,
        wrap_width,
        "computed render plan"
    );

    Ok(plan)
}

/// Union of every line's em box (widened by half the stroke) after the
/// block transform
fn bounding_box(plan: &RenderPlan, config: &StyleConfig) -> Rect {
    let to_surface = plan.block_to_surface();
    let half_em = config.size_px / 2.0;
    let stroke_pad = if config.has_stroke() { config.stroke_width_px / 2.0 } else { 0.0 };

    let corners = plan.lines.iter()
        .filter_map(|line| {
            let (left, right) = line.extent()?;
            let rect = Rect::new(left, line.offset_y - half_em, right - left, 2.0 * half_em);
            Some(rect.inflate(stroke_pad))
        })
        .flat_map(|rect| rect.corners())
        .map(|p| {
            let (x, y) = to_surface.transform_point(p.x, p.y);
            Point::new(x, y)
        });

    Rect::from_points(corners).unwrap_or(plan.bounding_box)
}
