//! Segment–segment intersection.
//!
//! For segments `s = a→b` and `w = c→d` the four orientations
//! `oa = orient(c,d,a)`, `ob = orient(c,d,b)`, `oc = orient(a,b,c)`,
//! `od = orient(a,b,d)` decide everything:
//! - proper crossing iff `sign(oa)·sign(ob) < 0` and `sign(oc)·sign(od) < 0`;
//!   the point is `(a·ob − b·oa) / (ob − oa)`, i.e. `a + t(b − a)` with
//!   `t = oa / (oa − ob)`;
//! - touching / collinear overlap iff some endpoint lies on the other segment.
//!
//! Signs go through `sign_eps` with the shared tolerance.

use crate::geom::{on_segment_inclusive, orient, sign_eps, Point2, Segment};

#[derive(Clone, Copy, Debug)]
struct Orientations {
    oa: f64,
    ob: f64,
    oc: f64,
    od: f64,
}

impl Orientations {
    #[inline]
    fn of(s: &Segment, w: &Segment) -> Self {
        Self {
            oa: orient(w.a, w.b, s.a),
            ob: orient(w.a, w.b, s.b),
            oc: orient(s.a, s.b, w.a),
            od: orient(s.a, s.b, w.b),
        }
    }

    #[inline]
    fn is_proper(&self, eps: f64) -> bool {
        let (sa, sb) = (sign_eps(self.oa, eps), sign_eps(self.ob, eps));
        let (sc, sd) = (sign_eps(self.oc, eps), sign_eps(self.od, eps));
        sa * sb < 0 && sc * sd < 0
    }
}

#[inline]
fn interpolate(s: &Segment, o: &Orientations) -> Point2 {
    let den = o.ob - o.oa;
    Point2::new(
        (s.a.x * o.ob - s.b.x * o.oa) / den,
        (s.a.y * o.ob - s.b.y * o.oa) / den,
    )
}

/// Intersection point of a transversal crossing between `s` and `w`.
///
/// `None` for disjoint, touching, or collinear segments.
pub fn crossing_point(s: &Segment, w: &Segment, eps: f64) -> Option<Point2> {
    let o = Orientations::of(s, w);
    if o.is_proper(eps) {
        Some(interpolate(s, &o))
    } else {
        None
    }
}

/// Boolean intersection test, inclusive of shared endpoints, T-junctions and
/// collinear overlap.
pub fn segments_touch(s: &Segment, w: &Segment, eps: f64) -> bool {
    let o = Orientations::of(s, w);
    if o.is_proper(eps) {
        return true;
    }
    on_segment_inclusive(w.a, w.b, s.a, eps)
        || on_segment_inclusive(w.a, w.b, s.b, eps)
        || on_segment_inclusive(s.a, s.b, w.a, eps)
        || on_segment_inclusive(s.a, s.b, w.b, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::DEFAULT_EPS;
    use nalgebra::vector;

    const EPS: f64 = DEFAULT_EPS;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::from_coords(x1, y1, x2, y2)
    }

    #[test]
    fn proper_crossing_point() {
        let wall = seg(0.0, 0.0, 0.0, 10.0);
        let probe = seg(-1.0, 5.0, 1.0, 5.0);
        let p = crossing_point(&probe, &wall, EPS).expect("crossing");
        assert!((p - vector![0.0, 5.0]).norm() < 1e-12);
        assert!(segments_touch(&probe, &wall, EPS));
    }

    #[test]
    fn crossing_point_is_symmetric() {
        let s = seg(-3.0, -1.0, 4.0, 2.5);
        let w = seg(1.0, -4.0, -0.5, 3.0);
        let p = crossing_point(&s, &w, EPS).expect("s crosses w");
        let q = crossing_point(&w, &s, EPS).expect("w crosses s");
        assert!((p - q).norm() < 1e-9);
        // reversing either segment does not move the point
        let r = crossing_point(&s.reversed(), &w, EPS).expect("reversed");
        assert!((p - r).norm() < 1e-9);
    }

    #[test]
    fn disjoint_and_parallel() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert!(crossing_point(&s, &seg(0.0, 1.0, 1.0, 1.0), EPS).is_none());
        assert!(!segments_touch(&s, &seg(0.0, 1.0, 1.0, 1.0), EPS));
        // lines cross but the segments stop short
        assert!(!segments_touch(&s, &seg(2.0, -1.0, 2.0, 1.0), EPS));
        // collinear, separated
        assert!(!segments_touch(&s, &seg(2.0, 0.0, 3.0, 0.0), EPS));
    }

    #[test]
    fn shared_endpoint_touches_without_crossing() {
        let s = seg(0.0, 0.0, 1.0, 1.0);
        let w = seg(1.0, 1.0, 2.0, 0.0);
        assert!(crossing_point(&s, &w, EPS).is_none());
        assert!(segments_touch(&s, &w, EPS));
        assert!(segments_touch(&w, &s, EPS));
    }

    #[test]
    fn t_junction_touches() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        let w = seg(2.0, 0.0, 2.0, 3.0);
        assert!(segments_touch(&s, &w, EPS));
        assert!(segments_touch(&w, &s, EPS));
        assert!(crossing_point(&s, &w, EPS).is_none());
    }

    #[test]
    fn collinear_overlap_touches_without_a_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        let w = seg(7.0, 0.0, 3.0, 0.0);
        assert!(crossing_point(&s, &w, EPS).is_none());
        assert!(segments_touch(&s, &w, EPS));
        // segment starting inside the other one
        let inside = seg(5.0, 0.0, 12.0, 0.0);
        assert!(segments_touch(&inside, &w, EPS));
        assert!(crossing_point(&inside, &w, EPS).is_none());
    }

    #[test]
    fn zero_length_segment_on_wall() {
        let dot = seg(1.0, 0.0, 1.0, 0.0);
        let w = seg(0.0, 0.0, 2.0, 0.0);
        assert!(segments_touch(&dot, &w, EPS));
        assert!(!segments_touch(&dot, &seg(0.0, 1.0, 2.0, 1.0), EPS));
    }
}
