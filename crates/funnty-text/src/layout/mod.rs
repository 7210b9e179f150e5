//! Text layout module
//!
//! Wrapping, letter spacing and block placement. Everything here is a pure
//! function of its inputs; nothing is retained between renders.

mod wrap;
mod spacing;
mod plan;
mod transform;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use wrap::wrap_text;
pub use spacing::{layout_glyphs, GlyphPlacement};
pub use plan::compute_render_plan;
pub use transform::Transform2D;

/// Text alignment relative to a line's anchor x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Offset from the anchor to the left edge of a unit `width` wide
    pub fn left_edge_offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            other => Err(format!("invalid alignment {other:?}")),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing every point, `None` for no points
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Grow by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Self {
        Self::new(self.x - amount, self.y - amount, self.width + 2.0 * amount, self.height + 2.0 * amount)
    }
}

/// One wrapped line, positioned and split into draw units
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    /// Vertical index within the block
    pub index: usize,
    pub text: String,
    /// Middle-baseline y relative to the block origin
    pub offset_y: f32,
    /// Anchor x relative to the block origin
    pub anchor_x: f32,
    pub align: TextAlign,
    /// Draw units: the whole line, or one per character when letter spaced
    pub glyphs: Vec<GlyphPlacement>,
}

impl DisplayLine {
    /// Horizontal span `(left, right)` covered by the draw units
    pub fn extent(&self) -> Option<(f32, f32)> {
        self.glyphs.iter()
            .map(|g| {
                let left = g.x + self.align.left_edge_offset(g.width);
                (left, left + g.width)
            })
            .reduce(|(l1, r1), (l2, r2)| (l1.min(l2), r1.max(r2)))
    }
}

/// Ready-to-draw layout for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub lines: Vec<DisplayLine>,
    pub line_height_px: f32,
    /// Block origin in surface coordinates (the surface centre)
    pub origin_offset: Point,
    /// Rotation/scale applied around the origin to the whole block
    pub transform: Transform2D,
    /// Union of line extents after the transform, in surface coordinates
    pub bounding_box: Rect,
}

impl RenderPlan {
    /// Plan that draws nothing
    pub fn empty(surface_width: f32, surface_height: f32) -> Self {
        let origin = Point::new(surface_width / 2.0, surface_height / 2.0);
        Self {
            lines: Vec::new(),
            line_height_px: 0.0,
            origin_offset: origin,
            transform: Transform2D::identity(),
            bounding_box: Rect::new(origin.x, origin.y, 0.0, 0.0),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.glyphs.is_empty())
    }

    /// Full transform from block coordinates to surface coordinates
    pub fn block_to_surface(&self) -> Transform2D {
        Transform2D::translate(self.origin_offset.x, self.origin_offset.y).multiply(&self.transform)
    }
}
