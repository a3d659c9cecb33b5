//! Affine data-to-screen transform and its lazily recomputed cache.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axis, DataPoint, ScreenPoint};

/// 2-D affine transform stored as the top two rows of a 3x3 matrix:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// Composition methods right-multiply, so the operation appended last is the
/// first one applied to a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    #[must_use]
    pub const fn from_translation(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Returns `self * other`: `other` is applied first, then `self`.
    #[must_use]
    pub fn then_apply(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[must_use]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.then_apply(Self::from_translation(tx, ty))
    }

    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.then_apply(Self::from_scale(sx, sy))
    }

    #[must_use]
    pub fn map_xy(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    #[must_use]
    pub fn map_point(&self, point: DataPoint) -> ScreenPoint {
        let (x, y) = self.map_xy(point.x, point.y);
        ScreenPoint::new(x, y)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }

    #[must_use]
    pub fn inverse_map_point(&self, point: ScreenPoint) -> Option<DataPoint> {
        let inverse = self.inverse()?;
        let (x, y) = inverse.map_xy(point.x, point.y);
        Some(DataPoint::new(x, y))
    }
}

/// Cached data-to-screen transform with a validity flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCache {
    matrix: Transform2D,
    valid: bool,
}

impl Default for TransformCache {
    fn default() -> Self {
        Self {
            matrix: Transform2D::identity(),
            valid: true,
        }
    }
}

impl TransformCache {
    #[must_use]
    pub fn matrix(&self) -> Transform2D {
        self.matrix
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Rebuilds the matrix as `translate(origin) * scale(sx, sy) * translate(-x_min, -y_min)`.
    ///
    /// Scales come from each axis' own screen endpoints. When either axis has
    /// a zero-width range the cache is left untouched (still invalid) and
    /// `false` is returned.
    pub fn recompute(&mut self, origin: ScreenPoint, x_axis: &Axis, y_axis: &Axis) -> bool {
        let (x_min, x_max) = x_axis.range();
        if x_max == x_min {
            trace!(x_min, "skip transform recompute: degenerate horizontal range");
            return false;
        }
        let scale_x = (x_axis.point2().x - x_axis.point1().x) / (x_max - x_min);

        let (y_min, y_max) = y_axis.range();
        if y_max == y_min {
            trace!(y_min, "skip transform recompute: degenerate vertical range");
            return false;
        }
        let scale_y = (y_axis.point2().y - y_axis.point1().y) / (y_max - y_min);

        self.matrix = Transform2D::identity()
            .translate(origin.x, origin.y)
            .scale(scale_x, scale_y)
            .translate(-x_min, -y_min);
        self.valid = true;
        trace!(scale_x, scale_y, "plots transform recomputed");
        true
    }
}
