//! Font loading and matching module

mod database;
mod face;
mod matching;
mod loader;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use database::FontDatabase;
pub use face::FontFace;
pub use matching::{FontQuery, FALLBACK_FAMILIES};
pub use loader::{FontLoader, FontReadiness};

/// Unique identifier for a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub fontdb::ID);

/// Font weight, one of 100, 200, ..., 900
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontWeight(u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    pub const BLACK: FontWeight = FontWeight(900);

    /// All weights accepted by the style model, lightest first
    pub const ALL: [FontWeight; 9] = [
        Self::THIN,
        Self::EXTRA_LIGHT,
        Self::LIGHT,
        Self::NORMAL,
        Self::MEDIUM,
        Self::SEMI_BOLD,
        Self::BOLD,
        Self::EXTRA_BOLD,
        Self::BLACK,
    ];

    /// Numeric weight value
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = InvalidFontWeight;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (100..=900).contains(&value) && value % 100 == 0 {
            Ok(FontWeight(value))
        } else {
            Err(InvalidFontWeight(value.to_string()))
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.0
    }
}

impl FromStr for FontWeight {
    type Err = InvalidFontWeight;

    /// Parses the exact decimal spelling (`"100"` .. `"900"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.0.to_string() == s)
            .ok_or_else(|| InvalidFontWeight(s.to_string()))
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected font weight value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid font weight {0:?}, expected 100..=900 in steps of 100")]
pub struct InvalidFontWeight(pub String);

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl From<FontStyle> for fontdb::Style {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Normal => fontdb::Style::Normal,
            FontStyle::Italic => fontdb::Style::Italic,
            FontStyle::Oblique => fontdb::Style::Oblique,
        }
    }
}

/// The family/size/weight triple text is measured and drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f32, weight: FontWeight) -> Self {
        Self { family: family.into(), size_px, weight }
    }

    /// Query for this spec, falling back the way a CSS font string
    /// `"<family>", Arial, sans-serif` would
    pub fn query(&self) -> FontQuery {
        let mut families = vec![self.family.as_str()];
        families.extend(FALLBACK_FAMILIES);
        FontQuery::new(&families).weight(self.weight)
    }
}
