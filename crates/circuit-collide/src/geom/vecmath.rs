use super::types::Point2;

/// 2D cross product `v.x*w.y - v.y*w.x`.
#[inline]
pub fn cross(v: Point2, w: Point2) -> f64 {
    v.x * w.y - v.y * w.x
}

/// Signed area of the triangle `(a, b, c)` (times two).
///
/// `> 0` for a left turn at `b`, `< 0` for a right turn, `0` when collinear.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    cross(b - a, c - a)
}

#[inline]
pub fn dot(a: Point2, b: Point2) -> f64 {
    a.x * b.x + a.y * b.y
}

#[inline]
pub fn distance_squared(a: Point2, b: Point2) -> f64 {
    let d = b - a;
    d.x * d.x + d.y * d.y
}

/// Three-valued sign: `-1`, `0` (for `|x| < eps`) or `+1`.
///
/// NaN maps to `0`.
#[inline]
pub fn sign_eps(x: f64, eps: f64) -> i8 {
    if x.abs() < eps || x.is_nan() {
        0
    } else if x < 0.0 {
        -1
    } else {
        1
    }
}

/// True iff `p` is collinear with `a, b` (within `eps`) and lies in the closed
/// disk with diameter `ab`. Only collinearity is tolerant; the disk test is exact.
#[inline]
pub fn on_segment_inclusive(a: Point2, b: Point2, p: Point2, eps: f64) -> bool {
    sign_eps(orient(a, b, p), eps) == 0 && dot(a - p, b - p) <= 0.0
}
