//! Edge case tests for funnty-text
//!
//! Wrapping, letter spacing and block layout, measured with the
//! fixed-advance measurer so no fonts are needed.

use funnty_text::*;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello",
    "Hello World",
    "the quick brown fox jumps over the lazy dog",
    "supercalifragilisticexpialidocious is long",
    "  leading and trailing  ",
    "tabs\tare not breaks",
    "ünïcödé wörds hère",
];

/// 10px per char
fn mono(s: &str) -> Result<f32> {
    Ok(s.chars().count() as f32 * 10.0)
}

fn style(text: &str) -> StyleConfig {
    StyleConfig { text: text.to_string(), ..StyleConfig::default() }
}

// ============================================================================
// WRAPPING
// ============================================================================

#[test]
fn test_no_newline_no_width_is_identity() {
    for text in SAMPLES {
        for max_width in [0.0, -5.0, f32::NAN] {
            assert_eq!(wrap_text(text, max_width, mono).unwrap(), vec![text.to_string()]);
        }
    }
}

#[test]
fn test_paragraph_count_without_width() {
    for text in ["a\nb", "a\n\nb", "\n", "one\ntwo\nthree\n", "\n\n\n"] {
        let lines = wrap_text(text, 0.0, mono).unwrap();
        assert_eq!(lines.len(), text.split('\n').count(), "{text:?}");
    }
}

#[test]
fn test_blank_paragraph_is_one_empty_line() {
    let lines = wrap_text("top\n\nbottom", 1000.0, mono).unwrap();
    assert_eq!(lines, ["top", "", "bottom"]);

    let lines = wrap_text("top\n   \nbottom", 1000.0, mono).unwrap();
    assert_eq!(lines, ["top", "", "bottom"]);
}

#[test]
fn test_greedy_never_exceeds_width_except_long_words() {
    for text in SAMPLES {
        for max_width in [30.0, 55.0, 100.0, 170.0] {
            for line in wrap_text(text, max_width, mono).unwrap() {
                let width = mono(&line).unwrap();
                let single_word = !line.trim().contains(' ');
                assert!(width <= max_width || single_word, "{line:?} is {width} wide (max {max_width})");
            }
        }
    }
}

#[test]
fn test_wrap_keeps_every_word_in_order() {
    for text in SAMPLES {
        let lines = wrap_text(text, 60.0, mono).unwrap();
        let rejoined = lines.join(" ");
        let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
        let got: Vec<&str> = rejoined.split(' ').filter(|w| !w.is_empty()).collect();
        assert_eq!(got, words, "{text:?}");
    }
}

#[test]
fn test_wrap_scenarios() {
    assert_eq!(wrap_text("Hello\nWorld", 0.0, mono).unwrap(), ["Hello", "World"]);
    // "a b" is 30px, "a b c" is 50px
    assert_eq!(wrap_text("a b c", 40.0, mono).unwrap(), ["a b", "c"]);
}

#[test]
fn test_measurement_failure_propagates() {
    let failing = |s: &str| -> Result<f32> {
        Err(TextError::MeasurementFailed { text: s.to_string(), reason: "offline".to_string() })
    };
    assert!(wrap_text("two words", 10.0, failing).is_err());
    // Without width wrapping nothing is measured
    assert!(wrap_text("two words", 0.0, failing).is_ok());
}

// ============================================================================
// LETTER SPACING
// ============================================================================

#[test]
fn test_zero_spacing_is_one_unit() {
    let units = layout_glyphs("Hello", 5.0, 0.0, mono).unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].text, "Hello");
    assert_eq!(units[0].x, 5.0);
    assert_eq!(units[0].width, 50.0);
}

#[test]
fn test_spaced_offsets_follow_formula() {
    // Variable-width measurer: "i" is narrow, "m" is wide
    let measure = |s: &str| -> Result<f32> {
        Ok(s.chars().map(|c| match c { 'i' => 4.0, 'm' => 14.0, _ => 9.0 }).sum())
    };
    let line = "mimic";
    let spacing = 3.0;
    let units = layout_glyphs(line, 0.0, spacing, measure).unwrap();
    assert_eq!(units.len(), line.chars().count());

    let mut preceding = 0.0;
    for (k, unit) in units.iter().enumerate() {
        assert_eq!(unit.x, preceding + k as f32 * spacing);
        preceding += measure(&unit.text).unwrap();
    }
}

#[test]
fn test_spacing_splits_combining_marks() {
    // "e" + U+0301 is one grapheme but two units
    let units = layout_glyphs("e\u{301}", 0.0, 1.0, mono).unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[1].text, "\u{301}");
}

#[test]
fn test_negative_spacing_overlaps() {
    let units = layout_glyphs("ab", 0.0, -4.0, mono).unwrap();
    assert_eq!(units[1].x, 6.0);
}

// ============================================================================
// BLOCK LAYOUT
// ============================================================================

#[test]
fn test_vertical_offsets_sum_to_zero() {
    let m = MonospaceMeasurer::default();
    for n in 1..=7 {
        let text = vec!["line"; n].join("\n");
        let plan = compute_render_plan(&style(&text), 400.0, 400.0, &m).unwrap();
        assert_eq!(plan.line_count(), n);
        let sum: f32 = plan.lines.iter().map(|l| l.offset_y).sum();
        assert!(sum.abs() < 1e-3, "{n} lines sum to {sum}");
    }
}

#[test]
fn test_line_offsets_scenario() {
    let mut config = style("a\nb\nc");
    config.size_px = 20.0;
    config.line_height_multiplier = 1.2;
    let plan = compute_render_plan(&config, 500.0, 500.0, &MonospaceMeasurer::default()).unwrap();
    let offsets: Vec<f32> = plan.lines.iter().map(|l| l.offset_y).collect();
    for (got, want) in offsets.iter().zip([-24.0, 0.0, 24.0]) {
        assert!((got - want).abs() < 1e-4, "{offsets:?}");
    }
}

#[test]
fn test_negative_line_height_inverts_order() {
    let mut config = style("first\nlast");
    config.line_height_multiplier = -1.0;
    let plan = compute_render_plan(&config, 400.0, 400.0, &MonospaceMeasurer::default()).unwrap();
    assert!(plan.lines[0].offset_y > plan.lines[1].offset_y);
    assert_eq!(plan.line_height_px, -20.0);
}

#[test]
fn test_blank_lines_keep_their_slot() {
    let plan = compute_render_plan(&style("a\n\nb"), 400.0, 400.0, &MonospaceMeasurer::default()).unwrap();
    assert_eq!(plan.line_count(), 3);
    assert!(plan.lines[1].glyphs.is_empty());
    assert_eq!(plan.lines[1].text, "");
}

#[test]
fn test_degenerate_inputs_give_empty_plans() {
    let m = MonospaceMeasurer::default();
    for (w, h) in [(0.0, 100.0), (100.0, 0.0), (0.0, 0.0)] {
        assert!(compute_render_plan(&style("x"), w, h, &m).unwrap().lines.is_empty());
    }
    for size in [0.0, -12.0, f32::NAN] {
        let config = StyleConfig { size_px: size, ..style("x") };
        assert!(compute_render_plan(&config, 100.0, 100.0, &m).unwrap().lines.is_empty());
    }
}

#[test]
fn test_letter_spaced_centre_line_uses_per_unit_anchor() {
    let config = StyleConfig {
        letter_spacing_px: 2.0,
        alignment: TextAlign::Center,
        ..style("ab")
    };
    let plan = compute_render_plan(&config, 400.0, 400.0, &MonospaceMeasurer::default()).unwrap();
    let line = &plan.lines[0];
    // Each character is centred on its own pen position
    assert_eq!(line.glyphs[0].x, 0.0);
    assert_eq!(line.glyphs[1].x, 12.0);
    assert_eq!(line.extent(), Some((-5.0, 17.0)));
}

#[test]
fn test_bounding_box_covers_stroke() {
    let plain = compute_render_plan(&style("abc"), 400.0, 400.0, &MonospaceMeasurer::default()).unwrap();
    let stroked_config = StyleConfig { stroke_width_px: 6.0, ..style("abc") };
    let stroked = compute_render_plan(&stroked_config, 400.0, 400.0, &MonospaceMeasurer::default()).unwrap();
    assert!((stroked.bounding_box.width - plain.bounding_box.width - 6.0).abs() < 1e-3);
    assert!((stroked.bounding_box.height - plain.bounding_box.height - 6.0).abs() < 1e-3);
}
