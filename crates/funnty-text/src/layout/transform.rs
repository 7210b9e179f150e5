//! 2D affine transforms

use std::f32::consts::PI;

/// 2D transformation matrix (3x3 homogeneous)
///
/// | a c e |
/// | b d f |
/// | 0 0 1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub a: f32,  // scale-x
    pub b: f32,  // skew-y
    pub c: f32,  // skew-x
    pub d: f32,  // scale-y
    pub e: f32,  // translate-x
    pub f: f32,  // translate-y
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: 0.0, f: 0.0,
        }
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self { e: tx, f: ty, ..Self::identity() }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self { a: sx, d: sy, ..Self::identity() }
    }

    /// Rotation in radians, clockwise on a y-down surface
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos, b: sin,
            c: -sin, d: cos,
            e: 0.0, f: 0.0,
        }
    }

    pub fn rotate_deg(degrees: f32) -> Self {
        Self::rotate(degrees * PI / 180.0)
    }

    /// Rotation followed by uniform scale, both around the local origin.
    ///
    /// Matches `ctx.rotate(r); ctx.scale(s, s)` issued after translating to
    /// the block centre.
    pub fn rotate_scale(degrees: f32, scale: f32) -> Self {
        Self::rotate_deg(degrees).multiply(&Self::scale(scale, scale))
    }

    /// Returns self * other (other applied first)
    pub fn multiply(&self, other: &Transform2D) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn to_tiny_skia(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(self.a, self.b, self.c, self.d, self.e, self.f)
    }
}
