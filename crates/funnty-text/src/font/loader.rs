//! Font readiness capability

use super::{FontDatabase, FontWeight};
use crate::Result;

/// Outcome of asking for a font family to be made available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontReadiness {
    /// The family is loaded and will be used
    Ready,
    /// The family is unavailable; rendering uses fallback faces
    Fallback,
}

/// Makes font families available before a render.
///
/// Layout never depends on this having succeeded: a render issued while a
/// family is missing measures and draws with the fallback chain.
pub trait FontLoader {
    fn ensure_font_loaded(&mut self, family: &str, weight: FontWeight) -> Result<FontReadiness>;
}

impl FontLoader for FontDatabase {
    fn ensure_font_loaded(&mut self, family: &str, _weight: FontWeight) -> Result<FontReadiness> {
        if self.has_family(family) {
            Ok(FontReadiness::Ready)
        } else {
            tracing::debug!(family, "family not in database, using fallback");
            Ok(FontReadiness::Fallback)
        }
    }
}
