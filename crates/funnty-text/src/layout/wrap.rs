//! Greedy word wrapping

use crate::Result;

/// Split `text` into display lines no wider than `max_width`.
///
/// Explicit `\n` always breaks. Each paragraph is then filled greedily with
/// space-separated words; a word that alone exceeds `max_width` keeps its
/// own overflowing line. A `max_width` that is not a positive finite number
/// disables width wrapping, leaving exactly one line per paragraph.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> Result<f32>,
) -> Result<Vec<String>> {
    let paragraphs = text.split('\n');

    if !(max_width > 0.0 && max_width.is_finite()) {
        return Ok(paragraphs.map(str::to_string).collect());
    }

    let mut lines = Vec::new();

    for paragraph in paragraphs {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if !current.is_empty() && measure(&candidate)? > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    Ok(lines)
}
