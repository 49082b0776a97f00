//! Seeded probe generators (replay tokens).
//!
//! Purpose
//! - Reproducible random points and sensor fans inside a bounding box, for
//!   benchmarks, property checks and the CLI `probe` command.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `index` of a stream can be rebuilt without replaying the others.

use crate::geom::{Point2, Segment};
use crate::track::{sensor_fan, SensorCfg};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Smallest box holding every point; `None` for an empty set.
    pub fn around(points: &[Point2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        });
        Some(Self { min, max })
    }

    /// Same box grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        let m = Point2::new(margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point2 {
        let lerp = |lo: f64, hi: f64, u: f64| lo + (hi - lo) * u;
        Point2::new(
            lerp(self.min.x, self.max.x, rng.gen::<f64>()),
            lerp(self.min.y, self.max.y, rng.gen::<f64>()),
        )
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// `count` uniform points in `bounds`.
pub fn random_points(bounds: Bounds2, count: usize, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    (0..count).map(|_| bounds.sample(&mut rng)).collect()
}

/// `count` uniform segments with both endpoints in `bounds`.
pub fn random_segments(bounds: Bounds2, count: usize, tok: ReplayToken) -> Vec<Segment> {
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| Segment::new(bounds.sample(&mut rng), bounds.sample(&mut rng)))
        .collect()
}

/// One sensor fan per car: random origin in `bounds`, random heading.
///
/// Returned flat, `cars × cfg.rays` segments, car by car.
pub fn random_sensor_fans(
    bounds: Bounds2,
    cars: usize,
    cfg: SensorCfg,
    tok: ReplayToken,
) -> Vec<Segment> {
    let mut rng = tok.to_std_rng();
    let mut out = Vec::with_capacity(cars * cfg.rays.max(1));
    for _ in 0..cars {
        let origin = bounds.sample(&mut rng);
        let heading = rng.gen::<f64>() * std::f64::consts::TAU;
        out.extend(sensor_fan(origin, heading, cfg));
    }
    out
}
