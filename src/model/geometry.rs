//! Points and affine transforms used by the internal model.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,

    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D affine transform `(a b c d e f)`.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    /// Construct a new transform.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Construct a translation.
    pub fn new_translate(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Construct a rotation by `angle` degrees.
    pub fn new_rotate(angle: f64) -> Self {
        let v = angle.to_radians();
        let a = v.cos();
        let b = v.sin();
        Self::new(a, b, -b, a, 0.0, 0.0)
    }

    /// Transform placing a shape at `(x, y)` rotated by `rotation` degrees
    /// around its own origin.
    ///
    /// Non-finite inputs are treated as zero.
    pub fn from_placement(x: f64, y: f64, rotation: f64) -> Self {
        let mut ts = Self::new_translate(finite_or_zero(x), finite_or_zero(y));
        let rotation = finite_or_zero(rotation);
        if rotation != 0.0 {
            ts = ts.then(&Self::new_rotate(rotation));
        }
        ts
    }

    /// Returns `self * other`: `other` is applied first.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }

    /// Apply the transform to a point.
    pub fn apply(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Returns `true` if the transform is the identity.
    pub fn is_default(&self) -> bool {
        *self == Transform::default()
    }

    /// Rows of the 2x3 matrix `[[a, c, e], [b, d, f]]`.
    pub fn rows(&self) -> [[f64; 3]; 2] {
        [[self.a, self.c, self.e], [self.b, self.d, self.f]]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

/// Replace NaN and infinities with zero. `-0.0` also folds into `0.0`.
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v + 0.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_translate_then_translate() {
        let ts = Transform::new_translate(10.0, 5.0).then(&Transform::new_translate(1.0, 2.0));
        assert_eq!(ts.apply(0.0, 0.0), Point::new(11.0, 7.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let ts = Transform::new_rotate(90.0);
        let p = ts.apply(1.0, 0.0);
        assert!(approx(p.x, 0.0));
        assert!(approx(p.y, 1.0));
    }

    #[test]
    fn test_placement_ignores_non_finite() {
        let ts = Transform::from_placement(f64::NAN, 3.0, f64::INFINITY);
        assert_eq!(ts, Transform::new_translate(0.0, 3.0));
    }

    #[test]
    fn test_rows() {
        let ts = Transform::new_translate(4.0, 8.0);
        assert_eq!(ts.rows(), [[1.0, 0.0, 4.0], [0.0, 1.0, 8.0]]);
        assert!(Transform::default().is_default());
    }
}
