//! Builders that turn track and car outlines into segment sets.
//!
//! - `walls_from_rails`: rail polylines → wall segments for `query`.
//! - `shape_ring_segments`: closed car polygon → its edges.
//! - `sector_gates` / `gates_crossed`: lap progress via the rail-to-rail gates.
//! - `sensor_fan`: distance-sensor rays of a car, for `nearest_wall_distances`.

use crate::geom::{Point2, Segment};
use crate::intersect::segments_touch;

/// Consecutive point pairs of each rail as walls, outer rail first.
///
/// `shift` is added to every x (hosts draw the track offset from the window edge).
pub fn walls_from_rails(outer: &[Point2], inner: &[Point2], shift: f64) -> Vec<Segment> {
    let offset = Point2::new(shift, 0.0);
    [outer, inner]
        .into_iter()
        .flat_map(|rail| rail.windows(2))
        .map(|w| Segment::new(w[0] + offset, w[1] + offset))
        .collect()
}

/// Edges of a closed polygon: `(p[n-1], p[0]), (p[0], p[1]), ...`.
///
/// One segment per vertex; empty input gives no segments.
pub fn shape_ring_segments(points: &[Point2]) -> Vec<Segment> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    let mut prev = last;
    points
        .iter()
        .map(|&p| {
            let s = Segment::new(prev, p);
            prev = p;
            s
        })
        .collect()
}

/// Lateral gate `outer[i] → inner[i]` for every rail index.
pub fn sector_gates(outer: &[Point2], inner: &[Point2]) -> Vec<Segment> {
    outer
        .iter()
        .zip(inner)
        .map(|(&o, &i)| Segment::new(o, i))
        .collect()
}

/// Advance lap progress: starting at gate `from`, count how many consecutive
/// gates `ring` touches and return the index of the first gate it does not.
pub fn gates_crossed(ring: &[Segment], gates: &[Segment], from: usize, eps: f64) -> usize {
    let mut now = from;
    while now < gates.len() && ring.iter().any(|s| segments_touch(s, &gates[now], eps)) {
        now += 1;
    }
    now
}

/// Distance-sensor layout of a car.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorCfg {
    /// Number of rays (≥ 1).
    pub rays: usize,
    /// Total field of view in radians, centered on the heading.
    pub fov: f64,
    /// Ray length; also the range used to normalize readings.
    pub length: f64,
}

impl Default for SensorCfg {
    fn default() -> Self {
        Self {
            rays: 7,
            fov: std::f64::consts::PI,
            length: 200.0,
        }
    }
}

/// Rays from `origin`, evenly spread over `cfg.fov` around `heading`
/// (radians, counterclockwise from +x). A single ray points along `heading`.
pub fn sensor_fan(origin: Point2, heading: f64, cfg: SensorCfg) -> Vec<Segment> {
    let n = cfg.rays.max(1);
    let step = if n > 1 { cfg.fov / (n - 1) as f64 } else { 0.0 };
    let start = if n > 1 { heading - cfg.fov / 2.0 } else { heading };
    (0..n)
        .map(|k| {
            let (s, c) = (start + k as f64 * step).sin_cos();
            Segment::new(origin, origin + Point2::new(c, s) * cfg.length)
        })
        .collect()
}

/// Sensor readings in `[0, 1]`: distance over ray length, misses read as 1.
pub fn vision_ratios(distances: &[f64], length: f64) -> Vec<f64> {
    distances
        .iter()
        .map(|&d| (d / length).clamp(0.0, 1.0))
        .collect()
}
