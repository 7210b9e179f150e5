//! Rasterizer - draws a render plan onto a surface

use funnty_text::{DisplayLine, FontSpec, GlyphOutliner, GlyphPlacement, RenderPlan, StyleConfig, Transform2D};
use tiny_skia::{FillRule, Paint, Path, Stroke};

use crate::{Color, Result, Surface};

/// Draw `plan` onto `surface`, replacing its previous contents.
///
/// Coordinates are logical pixels: the device pixel ratio is applied once as
/// the outermost transform, followed by the block origin and the plan's
/// rotation/scale. Each line is stroked (when `stroke_width_px > 0`) and then
/// filled, so a line's fill always covers its own stroke.
///
/// Rendering to a zero-area surface does nothing.
pub fn render<O: GlyphOutliner + ?Sized>(
    plan: &RenderPlan,
    config: &StyleConfig,
    surface: &mut Surface,
    outliner: &O,
) -> Result<()> {
    let ratio = surface.device_pixel_ratio();
    let Some(pixmap) = surface.pixmap_mut() else {
        tracing::debug!("zero-area surface, skipping render");
        return Ok(());
    };

    pixmap.fill(tiny_skia::Color::TRANSPARENT);

    let transform = Transform2D::scale(ratio, ratio)
        .multiply(&plan.block_to_surface())
        .to_tiny_skia();
    let font = config.font_spec();

    let fill_paint = paint(Color::parse_or_black(&config.fill_color));
    let stroke_pass = config.has_stroke().then(|| {
        let stroke = Stroke {
            width: config.stroke_width_px,
            miter_limit: 10.0,
            ..Stroke::default()
        };
        (paint(Color::parse_or_black(&config.stroke_color)), stroke)
    });

    for line in &plan.lines {
        // Outlined once; both passes draw the same paths so they line up
        let mut paths = Vec::with_capacity(line.glyphs.len());
        for unit in &line.glyphs {
            if let Some(path) = unit_path(unit, line, &font, outliner)? {
                paths.push(path);
            }
        }

        if let Some((stroke_paint, stroke)) = &stroke_pass {
            for path in &paths {
                pixmap.stroke_path(path, stroke_paint, stroke, transform, None);
            }
        }
        for path in &paths {
            pixmap.fill_path(path, &fill_paint, FillRule::Winding, transform, None);
        }
    }

    tracing::debug!(
        lines = plan.lines.len(),
        stroke = stroke_pass.is_some(),
        ratio,
        "rendered plan"
    );

    Ok(())
}

/// Outline of one draw unit in block coordinates, aligned on its anchor
/// with the em box centred on the line's offset
fn unit_path<O: GlyphOutliner + ?Sized>(
    unit: &GlyphPlacement,
    line: &DisplayLine,
    font: &FontSpec,
    outliner: &O,
) -> Result<Option<Path>> {
    let outline = outliner.outline_text(&unit.text, font)?;
    let left = unit.x + line.align.left_edge_offset(unit.width);
    let baseline = line.offset_y + outline.middle_to_baseline();

    Ok(outline.path.and_then(|path| {
        path.transform(tiny_skia::Transform::from_translate(left, baseline))
    }))
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_tiny_skia());
    paint.anti_alias = true;
    paint
}
