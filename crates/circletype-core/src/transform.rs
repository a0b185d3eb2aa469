//! Per-glyph rotation as an affine matrix.
//!
//! The layout engine describes every glyph by a center point and a rotation.
//! Renderers that draw through a matrix get the equivalent [`Transform2D`]
//! from [`PlacedGlyph::transform`](crate::PlacedGlyph::transform).

use crate::types::Point;

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix in column-major order:
/// ```text
/// | m00 m10 m20 |
/// | m01 m11 m21 |
/// ```
///
/// # Examples
///
/// ```
/// use circletype_core::{Point, Transform2D};
///
/// // A glyph rotated a quarter turn around its anchor at (50, 50).
/// let anchor = Point::new(50.0, 50.0);
/// let rotate = Transform2D::rotate_around(std::f32::consts::FRAC_PI_2, anchor);
///
/// // The point 50px right of the anchor ends up 50px below it.
/// let p = rotate.transform_point(Point::new(100.0, 50.0));
/// assert!((p.x - 50.0).abs() < 0.001);
/// assert!((p.y - 100.0).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Rotation by `angle` radians, clockwise on screen (y pointing down).
    #[inline]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Rotation by `angle` radians that keeps `center` fixed.
    #[inline]
    pub fn rotate_around(angle: f32, center: Point) -> Self {
        Self::translate(center.x, center.y)
            .then(&Self::rotate(angle))
            .then(&Self::translate(-center.x, -center.y))
    }

    /// `self * other`: applies `other` first, then `self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self {
            m: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.m[0] * p.x + self.m[2] * p.y + self.m[4],
            y: self.m[1] * p.x + self.m[3] * p.y + self.m[5],
        }
    }

    /// Rotation angle of the linear part, in `(-π, π]`.
    #[inline]
    pub fn rotation_angle(&self) -> f32 {
        self.m[1].atan2(self.m[0])
    }
}
