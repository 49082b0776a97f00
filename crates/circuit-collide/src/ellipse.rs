//! Elliptic annulus classifier.
//!
//! A round track is the band between two concentric, axis-aligned ellipses.
//! Each point is classified by comparing its distance from the center with
//! the ellipse radii along the same polar angle:
//! - `d >= r_outer - wall` or `d <= r_inner` → `Wall`,
//! - else `d <= r_inner + slow_area` or `d >= r_outer - slow_area` → `SlowArea`,
//! - else `None`.
//!
//! The Wall test runs first, so overlapping margins resolve to Wall.
//! The polar angle uses `-(p.y - c.y)`: hosts pass screen coordinates (y down).
//! A zero semi-axis divides by zero; NaN/Inf results are left to the caller.

use crate::geom::Point2;

/// Axis-aligned ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Point2,
    pub semi_x: f64,
    pub semi_y: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(center: Point2, semi_x: f64, semi_y: f64) -> Self {
        Self {
            center,
            semi_x,
            semi_y,
        }
    }

    /// Radius along polar angle `theta`: `sx*sy / sqrt(sx²sin²θ + sy²cos²θ)`.
    #[inline]
    pub fn radius_at(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        let (sx, sy) = (self.semi_x, self.semi_y);
        sx * sy / (sx * sx * s * s + sy * sy * c * c).sqrt()
    }

    /// Closed polyline through `vertices` evenly spaced polar angles (at least
    /// 3), screen coordinates, first point repeated at the end.
    pub fn outline(&self, vertices: usize) -> Vec<Point2> {
        let n = vertices.max(3);
        (0..=n)
            .map(|k| {
                let theta = std::f64::consts::TAU * (k % n) as f64 / n as f64;
                let r = self.radius_at(theta);
                Point2::new(
                    self.center.x + r * theta.cos(),
                    self.center.y - r * theta.sin(),
                )
            })
            .collect()
    }
}

/// Track band between two concentric ellipses plus margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    pub outer: Ellipse,
    pub inner: Ellipse,
    /// Wall thickness measured inward from the outer ellipse.
    pub wall: f64,
    /// Slow-area width next to either wall.
    pub slow_area: f64,
}

impl Annulus {
    /// Both ellipses share `center`.
    pub fn new(
        center: Point2,
        outer: (f64, f64),
        inner: (f64, f64),
        wall: f64,
        slow_area: f64,
    ) -> Self {
        Self {
            outer: Ellipse::new(center, outer.0, outer.1),
            inner: Ellipse::new(center, inner.0, inner.1),
            wall,
            slow_area,
        }
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.outer.center
    }

    /// Classify one point.
    pub fn classify(&self, p: Point2) -> EllipseCollision {
        let c = self.center();
        let d = (p - c).norm();
        let theta = (-(p.y - c.y)).atan2(p.x - c.x);
        let r1 = self.outer.radius_at(theta);
        let r2 = self.inner.radius_at(theta);
        if d >= r1 - self.wall || d <= r2 {
            EllipseCollision::Wall
        } else if d <= r2 + self.slow_area || d >= r1 - self.slow_area {
            EllipseCollision::SlowArea
        } else {
            EllipseCollision::None
        }
    }
}

/// Ellipse-family result. Codes: `None = 0`, `SlowArea = 1`, `Wall = 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EllipseCollision {
    None,
    SlowArea,
    Wall,
}

impl EllipseCollision {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::SlowArea => 1,
            Self::Wall => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::SlowArea),
            2 => Some(Self::Wall),
            _ => None,
        }
    }
}

/// Classify every point against `annulus`, order preserved.
pub fn classify_ellipse(points: &[Point2], annulus: &Annulus) -> Vec<EllipseCollision> {
    tracing::debug!(points = points.len(), "classify_ellipse");
    points.iter().map(|&p| annulus.classify(p)).collect()
}

/// Index of the angular sector containing `p`, for a round track split into
/// `count` equal sectors.
///
/// Angle is measured as `180° - atan2(-(p.y - c.y), p.x - c.x)` in degrees,
/// wrapped into `[0, 360)`, so sector 0 starts on the left of the center and
/// indices grow clockwise on screen. `count == 0` returns 0.
pub fn angular_sector(center: Point2, p: Point2, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let deg = (-(p.y - center.y)).atan2(p.x - center.x).to_degrees();
    let mut a = 180.0 - deg;
    if a < 0.0 {
        a += 360.0;
    }
    if a >= 360.0 {
        a -= 360.0;
    }
    let width = 360.0 / count as f64;
    ((a / width) as usize).min(count - 1)
}
