//! Style configuration
//!
//! [`StyleConfig`] is the complete parameter set for one render. It is a
//! plain value: callers build or mutate their own copy and hand it to the
//! layout engine on every change.

use serde::{Deserialize, Serialize};

use crate::font::{FontSpec, FontWeight};
use crate::layout::TextAlign;

/// Typographic and geometric parameters for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub text: String,
    pub font_family: String,
    pub size_px: f32,
    pub weight: FontWeight,
    /// CSS colour string
    pub fill_color: String,
    pub stroke_width_px: f32,
    /// CSS colour string
    pub stroke_color: String,
    pub letter_spacing_px: f32,
    /// Multiplied by `size_px`; negative values invert line order
    pub line_height_multiplier: f32,
    pub alignment: TextAlign,
    pub rotation_deg: f32,
    pub scale_factor: f32,
    /// Horizontal padding on each side when wrapping to the surface width
    pub padding_px: f32,
    /// Wrap width; 0 means "surface width minus padding"
    pub max_width_px: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text: "Lorem ipsumdolor\nsit amet, consectetur adipiscing elit.".to_string(),
            font_family: "Montserrat".to_string(),
            size_px: 20.0,
            weight: FontWeight::NORMAL,
            fill_color: "#000000".to_string(),
            stroke_width_px: 0.0,
            stroke_color: "#FF0000".to_string(),
            letter_spacing_px: 0.0,
            line_height_multiplier: 1.2,
            alignment: TextAlign::Left,
            rotation_deg: 0.0,
            scale_factor: 1.0,
            padding_px: 20.0,
            max_width_px: 0.0,
        }
    }
}

impl StyleConfig {
    /// Font triple used for measuring and drawing
    pub fn font_spec(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.size_px, self.weight)
    }

    /// Whether the stroke pass runs
    pub fn has_stroke(&self) -> bool {
        self.stroke_width_px > 0.0
    }

    /// Whether rotation or scale differ from identity
    pub fn has_transform(&self) -> bool {
        self.rotation_deg != 0.0 || self.scale_factor != 1.0
    }

    /// Font name as a file slug: lowercased, whitespace runs and path
    /// separators become `-`, dot-only segments are dropped
    pub fn font_slug(&self) -> String {
        let slug = self.font_family
            .split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
            .filter(|part| part.chars().any(|c| c != '.'))
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        if slug.is_empty() { "funnty-design".to_string() } else { slug }
    }

    /// Copy of `self` with every field present in `over` replaced
    pub fn with_override(&self, over: &StyleOverride) -> Self {
        let mut merged = self.clone();
        merged.apply(over);
        merged
    }

    /// Replace every field present in `over`
    pub fn apply(&mut self, over: &StyleOverride) {
        if let Some(v) = &over.text { self.text = v.clone(); }
        if let Some(v) = &over.font_family { self.font_family = v.clone(); }
        if let Some(v) = over.size_px { self.size_px = v; }
        if let Some(v) = over.weight { self.weight = v; }
        if let Some(v) = &over.fill_color { self.fill_color = v.clone(); }
        if let Some(v) = over.stroke_width_px { self.stroke_width_px = v; }
        if let Some(v) = &over.stroke_color { self.stroke_color = v.clone(); }
        if let Some(v) = over.letter_spacing_px { self.letter_spacing_px = v; }
        if let Some(v) = over.line_height_multiplier { self.line_height_multiplier = v; }
        if let Some(v) = over.alignment { self.alignment = v; }
        if let Some(v) = over.rotation_deg { self.rotation_deg = v; }
        if let Some(v) = over.scale_factor { self.scale_factor = v; }
        if let Some(v) = over.padding_px { self.padding_px = v; }
        if let Some(v) = over.max_width_px { self.max_width_px = v; }
    }
}

/// A partial [`StyleConfig`]; absent fields leave the base untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    pub text: Option<String>,
    pub font_family: Option<String>,
    pub size_px: Option<f32>,
    pub weight: Option<FontWeight>,
    pub fill_color: Option<String>,
    pub stroke_width_px: Option<f32>,
    pub stroke_color: Option<String>,
    pub letter_spacing_px: Option<f32>,
    pub line_height_multiplier: Option<f32>,
    pub alignment: Option<TextAlign>,
    pub rotation_deg: Option<f32>,
    pub scale_factor: Option<f32>,
    pub padding_px: Option<f32>,
    pub max_width_px: Option<f32>,
}

impl StyleOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
