//! Flat host arrays ⇄ typed values.
//!
//! Hosts pass coordinates as parallel `x`/`y` arrays or as interleaved segment
//! quadruples `[x1, y1, x2, y2, ...]`, and read results back as small integer
//! codes. Every decoder checks lengths up front and reports a `LayoutError`
//! instead of reading past the end.

use crate::ellipse::EllipseCollision;
use crate::geom::{Point2, Segment};
use crate::query::WallCollision;
use crate::sector::SectorHit;
use std::fmt;

/// Malformed flat input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Parallel coordinate arrays differ in length.
    CoordLengths { x: usize, y: usize },
    /// Interleaved segment array is not a multiple of 4.
    SegmentStride { len: usize },
    /// Outer and inner rails differ in length.
    RailLengths { outer: usize, inner: usize },
    /// A rail needs at least two points to form one sector.
    TooFewRailPoints { got: usize },
    /// Fixed-size parameter (center, semi-axes) has the wrong number of values.
    Arity {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// Per-shape sizes do not add up to the number of results. `got`
    /// saturates at `usize::MAX` when the sizes overflow.
    ShapeSizes { expected: usize, got: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::CoordLengths { x, y } => {
                write!(f, "x and y arrays differ in length ({x} vs {y})")
            }
            LayoutError::SegmentStride { len } => write!(
                f,
                "segment array length {len} is not a multiple of 4 (x1, y1, x2, y2)"
            ),
            LayoutError::RailLengths { outer, inner } => write!(
                f,
                "outer and inner rails differ in length ({outer} vs {inner})"
            ),
            LayoutError::TooFewRailPoints { got } => {
                write!(f, "rails need at least 2 points, got {got}")
            }
            LayoutError::Arity {
                what,
                expected,
                got,
            } => write!(f, "{what} needs {expected} values, got {got}"),
            LayoutError::ShapeSizes { expected, got } => write!(
                f,
                "shape sizes sum to {got} but there are {expected} results"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Zip parallel `x`/`y` arrays into points.
pub fn points_from_xy(x: &[f64], y: &[f64]) -> Result<Vec<Point2>, LayoutError> {
    if x.len() != y.len() {
        return Err(LayoutError::CoordLengths {
            x: x.len(),
            y: y.len(),
        });
    }
    Ok(x.iter()
        .zip(y)
        .map(|(&px, &py)| Point2::new(px, py))
        .collect())
}

pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Point2> {
    pairs.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

/// Decode `[x1, y1, x2, y2, ...]` into segments.
pub fn segments_from_flat(flat: &[f64]) -> Result<Vec<Segment>, LayoutError> {
    if flat.len() % 4 != 0 {
        return Err(LayoutError::SegmentStride { len: flat.len() });
    }
    Ok(flat
        .chunks_exact(4)
        .map(|c| Segment::from_coords(c[0], c[1], c[2], c[3]))
        .collect())
}

pub fn segments_to_flat(segs: &[Segment]) -> Vec<f64> {
    segs.iter()
        .flat_map(|s| [s.a.x, s.a.y, s.b.x, s.b.y])
        .collect()
}

/// Read a fixed-size parameter such as a center `[x, y]` or semi-axes `[sx, sy]`.
pub fn pair_from_slice(values: &[f64], what: &'static str) -> Result<(f64, f64), LayoutError> {
    match values {
        [a, b] => Ok((*a, *b)),
        _ => Err(LayoutError::Arity {
            what,
            expected: 2,
            got: values.len(),
        }),
    }
}

/// Ellipse-family codes: `None = 0`, `SlowArea = 1`, `Wall = 2`.
pub fn ellipse_codes(results: &[EllipseCollision]) -> Vec<i32> {
    results.iter().map(|r| r.code()).collect()
}

/// Segment-family codes: `None = 0`, `Wall = 1`.
pub fn wall_codes(results: &[WallCollision]) -> Vec<i32> {
    results.iter().map(|r| r.code()).collect()
}

/// Split sector hits into `(sector, collision)` arrays; no sector is `-1`.
pub fn sector_codes(hits: &[SectorHit]) -> (Vec<i64>, Vec<i32>) {
    hits.iter()
        .map(|h| (h.sector_code(), h.collision.code()))
        .unzip()
}
