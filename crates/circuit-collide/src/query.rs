//! Batched probe-vs-wall queries.
//!
//! Purpose
//! - `collision_flags`: does each query segment touch any wall? Scans walls in
//!   order and stops at the first hit.
//! - `nearest_wall_distances`: distance from each query start to the closest
//!   transversal wall crossing. Scans every wall. Touching or collinear walls
//!   raise the flag but yield no distance.
//! - Per-shape reductions: a car is a polygon whose edges (or vertices) are
//!   queried individually; the host wants one answer per car.
//!
//! Cost is O(queries × walls); fine for a single circuit (tens of walls).

use crate::ellipse::EllipseCollision;
use crate::geom::{distance_squared, GeomCfg, Point2, Segment};
use crate::intersect::{crossing_point, segments_touch};
use crate::layout::LayoutError;
use crate::sector::SectorHit;
use crate::track::shape_ring_segments;

/// Segment-family result. Codes: `None = 0`, `Wall = 1`.
///
/// Note the code for Wall differs from `EllipseCollision::Wall` (2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallCollision {
    #[default]
    None,
    Wall,
}

impl WallCollision {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Wall => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Wall),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

pub fn collision_flags(queries: &[Segment], walls: &[Segment]) -> Vec<WallCollision> {
    collision_flags_with_cfg(queries, walls, GeomCfg::default())
}

/// One flag per query: `Wall` on the first wall it touches, else `None`.
pub fn collision_flags_with_cfg(
    queries: &[Segment],
    walls: &[Segment],
    cfg: GeomCfg,
) -> Vec<WallCollision> {
    tracing::debug!(queries = queries.len(), walls = walls.len(), "collision_flags");
    queries
        .iter()
        .map(|q| {
            if walls.iter().any(|w| segments_touch(q, w, cfg.eps)) {
                WallCollision::Wall
            } else {
                WallCollision::None
            }
        })
        .collect()
}

pub fn nearest_wall_distances(queries: &[Segment], walls: &[Segment]) -> Vec<f64> {
    nearest_wall_distances_with_cfg(queries, walls, GeomCfg::default())
}

/// One distance per query, from `q.a` to the nearest proper crossing with any
/// wall.
///
/// Queries crossing no wall get `cfg.no_hit_distance`, including queries that
/// only touch a wall at an endpoint or run along it.
pub fn nearest_wall_distances_with_cfg(
    queries: &[Segment],
    walls: &[Segment],
    cfg: GeomCfg,
) -> Vec<f64> {
    tracing::debug!(
        queries = queries.len(),
        walls = walls.len(),
        "nearest_wall_distances"
    );
    queries
        .iter()
        .map(|q| match nearest_crossing(q, walls, cfg.eps) {
            Some(p) => distance_squared(q.a, p).sqrt(),
            None => cfg.no_hit_distance,
        })
        .collect()
}

/// Nearest proper crossing of `q` with any wall (measured from `q.a`).
pub fn nearest_crossing(q: &Segment, walls: &[Segment], eps: f64) -> Option<Point2> {
    let mut best: Option<(f64, Point2)> = None;
    for w in walls {
        let Some(p) = crossing_point(q, w, eps) else {
            continue;
        };
        let d2 = distance_squared(q.a, p);
        match best {
            Some((bd, _)) if bd <= d2 => {}
            _ => best = Some((d2, p)),
        }
    }
    best.map(|(_, p)| p)
}

fn check_sizes(sizes: &[usize], total: usize) -> Result<(), LayoutError> {
    let sum = sizes.iter().try_fold(0usize, |acc, &n| acc.checked_add(n));
    match sum {
        Some(got) if got == total => Ok(()),
        Some(got) => Err(LayoutError::ShapeSizes {
            expected: total,
            got,
        }),
        None => Err(LayoutError::ShapeSizes {
            expected: total,
            got: usize::MAX,
        }),
    }
}

/// Consecutive groups of `sizes[k]` results, one group per shape.
fn groups<'a, T: 'a>(items: &'a [T], sizes: &'a [usize]) -> impl Iterator<Item = &'a [T]> + 'a {
    let mut start = 0;
    sizes.iter().map(move |&n| {
        let g = &items[start..start + n];
        start += n;
        g
    })
}

/// Wall if any member of the shape is Wall. Empty shapes are `None`.
pub fn reduce_wall_flags(
    flags: &[WallCollision],
    sizes: &[usize],
) -> Result<Vec<WallCollision>, LayoutError> {
    check_sizes(sizes, flags.len())?;
    Ok(groups(flags, sizes)
        .map(|g| g.iter().copied().max().unwrap_or_default())
        .collect())
}

/// Most severe result per shape (Wall > SlowArea > None).
pub fn reduce_ellipse(
    results: &[EllipseCollision],
    sizes: &[usize],
) -> Result<Vec<EllipseCollision>, LayoutError> {
    check_sizes(sizes, results.len())?;
    Ok(groups(results, sizes)
        .map(|g| g.iter().copied().max().unwrap_or(EllipseCollision::None))
        .collect())
}

/// Per shape: furthest sector reached by any member and the worst collision.
///
/// `sector = None` ranks below every sector index, so a shape is off-track
/// only when all of its points are.
pub fn reduce_sectors(hits: &[SectorHit], sizes: &[usize]) -> Result<Vec<SectorHit>, LayoutError> {
    check_sizes(sizes, hits.len())?;
    Ok(groups(hits, sizes)
        .map(|g| SectorHit {
            sector: g.iter().filter_map(|h| h.sector).max(),
            collision: g
                .iter()
                .map(|h| h.collision)
                .max()
                .unwrap_or_default(),
        })
        .collect())
}

/// One flag per closed polygon: its ring edges against `walls`.
pub fn shape_collisions(
    shapes: &[Vec<Point2>],
    walls: &[Segment],
    cfg: GeomCfg,
) -> Vec<WallCollision> {
    let mut segs = Vec::new();
    let mut sizes = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let ring = shape_ring_segments(shape);
        sizes.push(ring.len());
        segs.extend(ring);
    }
    let flags = collision_flags_with_cfg(&segs, walls, cfg);
    groups(&flags, &sizes)
        .map(|g| g.iter().copied().max().unwrap_or_default())
        .collect()
}
