//! Rasterizer behaviour tests
//!
//! Most tests use the font-free block outliner: every visible character is a
//! solid block 0.4em wide and 0.7em tall, so pixel positions are predictable.
//! The system font section runs only where a common face is installed.

use funnty_render::*;
use funnty_text::{
    compute_render_plan, BlockOutliner, FontDatabase, FontMeasurer, FontOutliner, MonospaceMeasurer,
    RenderPlan, StyleConfig, TextAlign, TextMeasurer,
};

fn centred(text: &str) -> StyleConfig {
    StyleConfig {
        text: text.to_string(),
        size_px: 20.0,
        alignment: TextAlign::Center,
        ..StyleConfig::default()
    }
}

fn draw(config: &StyleConfig, width: f32, height: f32, ratio: f32) -> Surface {
    let plan = compute_render_plan(config, width, height, &MonospaceMeasurer::default()).unwrap();
    let mut surface = Surface::new(width, height, ratio).unwrap();
    render(&plan, config, &mut surface, &BlockOutliner::default()).unwrap();
    surface
}

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn test_zero_area_surface_is_noop() {
    let config = centred("hello");
    let plan = compute_render_plan(&config, 100.0, 100.0, &MonospaceMeasurer::default()).unwrap();
    let mut surface = Surface::new(0.0, 0.0, 1.0).unwrap();
    assert!(render(&plan, &config, &mut surface, &BlockOutliner::default()).is_ok());
}

#[test]
fn test_render_clears_previous_contents() {
    let config = centred("");
    let mut surface = Surface::new(20.0, 20.0, 1.0).unwrap();
    surface.fill(Color::RED);
    render(&RenderPlan::empty(20.0, 20.0), &config, &mut surface, &BlockOutliner::default()).unwrap();
    assert_eq!(surface.pixel(10, 10).unwrap().a, 0);
}

#[test]
fn test_empty_text_draws_nothing() {
    let surface = draw(&centred(""), 50.0, 50.0, 1.0);
    let pixmap = surface.pixmap().unwrap();
    assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
}

// ============================================================================
// PLACEMENT
// ============================================================================

#[test]
fn test_single_char_is_centred() {
    // "a" spans x 46..54 and y 42..56 on a 100x100 surface
    let surface = draw(&centred("a"), 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(50, 50), Some(Color::BLACK));
    assert_eq!(surface.pixel(47, 43), Some(Color::BLACK));
    assert_eq!(surface.pixel(10, 10).unwrap().a, 0);
    assert_eq!(surface.pixel(60, 50).unwrap().a, 0);
}

#[test]
fn test_device_pixel_ratio_scales_drawing() {
    let surface = draw(&centred("a"), 100.0, 100.0, 2.0);
    assert_eq!(surface.device_width(), 200);
    assert_eq!(surface.pixel(100, 100), Some(Color::BLACK));
    assert_eq!(surface.pixel(100, 80).unwrap().a, 0);
}

#[test]
fn test_left_alignment_starts_at_padding() {
    let mut config = centred("a");
    config.alignment = TextAlign::Left;
    config.padding_px = 10.0;
    // Anchor at x = 10; block spans 11..19
    let surface = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(15, 50), Some(Color::BLACK));
    assert_eq!(surface.pixel(50, 50).unwrap().a, 0);
}

#[test]
fn test_right_alignment_ends_at_padding() {
    let mut config = centred("a");
    config.alignment = TextAlign::Right;
    config.padding_px = 10.0;
    // Anchor at x = 90; block spans 81..89
    let surface = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(85, 50), Some(Color::BLACK));
    assert_eq!(surface.pixel(92, 50).unwrap().a, 0);
}

#[test]
fn test_rotation_turns_the_block() {
    let mut config = centred("abcd");
    let upright = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(upright.pixel(65, 50), Some(Color::BLACK));
    assert_eq!(upright.pixel(50, 65).unwrap().a, 0);

    config.rotation_deg = 90.0;
    let turned = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(turned.pixel(50, 65), Some(Color::BLACK));
    assert_eq!(turned.pixel(65, 50).unwrap().a, 0);
}

#[test]
fn test_scale_grows_the_block() {
    let mut config = centred("a");
    config.scale_factor = 3.0;
    let surface = draw(&config, 100.0, 100.0, 1.0);
    // Unscaled block ends at x = 54; scaled by 3 around the centre it ends at 62
    assert_eq!(surface.pixel(60, 50), Some(Color::BLACK));
}

// ============================================================================
// PAINT
// ============================================================================

#[test]
fn test_fill_colour() {
    let mut config = centred("a");
    config.fill_color = "#00ff00".to_string();
    let surface = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(50, 50), Some(Color::rgb(0, 255, 0)));
}

#[test]
fn test_invalid_fill_colour_falls_back_to_black() {
    let mut config = centred("a");
    config.fill_color = "definitely not a colour".to_string();
    let surface = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(50, 50), Some(Color::BLACK));
}

#[test]
fn test_fill_is_drawn_over_stroke() {
    let mut config = centred("a");
    config.stroke_width_px = 4.0;
    config.stroke_color = "#ff0000".to_string();
    let surface = draw(&config, 100.0, 100.0, 1.0);
    // Inside the glyph: fill wins
    assert_eq!(surface.pixel(50, 50), Some(Color::BLACK));
    // Just outside the glyph's right edge (x = 54): stroke only
    assert_eq!(surface.pixel(54, 50), Some(Color::RED));
}

#[test]
fn test_no_stroke_when_width_is_zero() {
    let mut config = centred("a");
    config.stroke_color = "#ff0000".to_string();
    let surface = draw(&config, 100.0, 100.0, 1.0);
    assert_eq!(surface.pixel(54, 50).unwrap().a, 0);
}

// ============================================================================
// SYSTEM FONTS
// ============================================================================

const COMMON_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Arial", "Noto Sans", "DejaVu Sans Mono"];

#[test]
fn test_real_glyphs_land_inside_bounding_box() {
    let db = FontDatabase::with_system_fonts();
    let Some(family) = COMMON_FAMILIES.iter().find(|family| db.has_family(family)) else {
        // Skip on systems without fonts
        return;
    };
    let config = StyleConfig {
        text: "H".to_string(),
        font_family: family.to_string(),
        size_px: 40.0,
        alignment: TextAlign::Center,
        ..StyleConfig::default()
    };

    let measurer = FontMeasurer::new(&db);
    let width = measurer.measure_text_width("H", &config.font_spec()).unwrap();
    assert!(width > 0.0);

    let plan = compute_render_plan(&config, 100.0, 100.0, &measurer).unwrap();
    let bbox = plan.bounding_box;
    assert!((bbox.width - width).abs() < 1e-3);
    assert!((bbox.height - 40.0).abs() < 1e-3);

    let mut surface = Surface::new(100.0, 100.0, 1.0).unwrap();
    render(&plan, &config, &mut surface, &FontOutliner::new(&db)).unwrap();

    let mut ink: Option<(u32, u32, u32, u32)> = None;
    for y in 0..100 {
        for x in 0..100 {
            if surface.pixel(x, y).unwrap().a > 0 {
                let (x0, y0, x1, y1) = ink.unwrap_or((x, y, x, y));
                ink = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
            }
        }
    }
    let (x0, y0, x1, y1) = ink.expect("glyph drew no pixels");

    // Anti-aliased edges may touch the neighbouring pixel
    assert!(x0 as f32 >= bbox.x - 1.0, "ink starts at x {x0}, box at {}", bbox.x);
    assert!((x1 + 1) as f32 <= bbox.x + bbox.width + 1.0, "ink ends at x {x1}");
    assert!(y0 as f32 >= bbox.y - 1.0, "ink starts at y {y0}, box at {}", bbox.y);
    assert!((y1 + 1) as f32 <= bbox.y + bbox.height + 1.0, "ink ends at y {y1}");

    // Capital letters sit on the middle line, not hanging from the top
    let centre_y = (y0 + y1 + 1) as f32 / 2.0;
    assert!((centre_y - 50.0).abs() < 8.0, "ink centred at y {centre_y}");
    let centre_x = (x0 + x1 + 1) as f32 / 2.0;
    assert!((centre_x - 50.0).abs() < 4.0, "ink centred at x {centre_x}");
}
