//! Basic 2D types and the shared tolerance.
//!
//! - `Point2`: plain `nalgebra` column vector, no identity.
//! - `Segment`: ordered endpoint pair; `a` is the start for distance attribution.
//! - `GeomCfg`: the single epsilon plus the "no wall hit" distance sentinel.

use nalgebra::Vector2;

/// A point (or free vector) in the plane.
pub type Point2 = Vector2<f64>;

/// Shared tolerance for sign and collinearity comparisons.
pub const DEFAULT_EPS: f64 = 1e-4;

/// Distance reported when a probe meets no wall. Large, finite, not an error.
pub const NO_HIT_DISTANCE: f64 = 1e9;

/// Geometry configuration (tolerances and sentinels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// `|x| < eps` is treated as zero.
    pub eps: f64,
    /// Returned by distance queries when nothing is hit.
    pub no_hit_distance: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            no_hit_distance: NO_HIT_DISTANCE,
        }
    }
}

/// Line segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            a: Vector2::new(x1, y1),
            b: Vector2::new(x2, y2),
        }
    }

    /// Same segment, endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}
