//! Sector classifier for two-rail polyline tracks.
//!
//! Model
//! - A track is an outer and an inner rail with the same number of points `N`.
//!   Sector `i` is the cell `(outer[i], outer[i+1], inner[i+1], inner[i])`,
//!   giving `N - 1` sectors.
//! - A point lies in sector `i` when it sits on opposite sides of the two lateral
//!   edges `inner[i]→outer[i]`, `inner[i+1]→outer[i+1]` and on opposite sides
//!   of the two rail edges `outer[i]→outer[i+1]`, `inner[i]→inner[i+1]`.
//! - Sectors are scanned in order and the first match wins.
//!
//! Frame
//! - Rails are stored in host screen coordinates (y down). The classifier
//!   negates the y of every rail point before testing; query points are
//!   expected already in that y-up frame (see `to_track_frame`).

use crate::geom::{cross, sign_eps, GeomCfg, Point2};
use crate::layout::LayoutError;
use crate::query::WallCollision;

/// Outer and inner rails of equal length (≥ 2 points each).
#[derive(Clone, Debug, PartialEq)]
pub struct TrackBoundary {
    outer: Vec<Point2>,
    inner: Vec<Point2>,
}

impl TrackBoundary {
    pub fn new(outer: Vec<Point2>, inner: Vec<Point2>) -> Result<Self, LayoutError> {
        if outer.len() != inner.len() {
            return Err(LayoutError::RailLengths {
                outer: outer.len(),
                inner: inner.len(),
            });
        }
        if outer.len() < 2 {
            return Err(LayoutError::TooFewRailPoints { got: outer.len() });
        }
        Ok(Self { outer, inner })
    }

    #[inline]
    pub fn outer(&self) -> &[Point2] {
        &self.outer
    }

    #[inline]
    pub fn inner(&self) -> &[Point2] {
        &self.inner
    }

    #[inline]
    pub fn num_sectors(&self) -> usize {
        self.outer.len() - 1
    }

    /// Sector cells in the y-up frame, `(outer_a, outer_b, inner_b, inner_a)`.
    fn flipped_cells(&self) -> Vec<Cell> {
        let flip = |p: &Point2| to_track_frame(*p);
        (0..self.num_sectors())
            .map(|i| Cell {
                outer_a: flip(&self.outer[i]),
                outer_b: flip(&self.outer[i + 1]),
                inner_b: flip(&self.inner[i + 1]),
                inner_a: flip(&self.inner[i]),
            })
            .collect()
    }
}

/// Screen (y down) ⇄ track frame (y up). The map is its own inverse.
#[inline]
pub fn to_track_frame(p: Point2) -> Point2 {
    Point2::new(p.x, -p.y)
}

#[derive(Clone, Copy, Debug)]
struct Cell {
    outer_a: Point2,
    outer_b: Point2,
    inner_b: Point2,
    inner_a: Point2,
}

impl Cell {
    fn contains(&self, p: Point2, eps: f64) -> bool {
        let lat_a = sign_eps(cross(self.outer_a - self.inner_a, p - self.inner_a), eps);
        let lat_b = sign_eps(cross(self.outer_b - self.inner_b, p - self.inner_b), eps);
        if lat_a == lat_b {
            return false;
        }
        let rail_outer = sign_eps(cross(self.outer_b - self.outer_a, p - self.outer_a), eps);
        let rail_inner = sign_eps(cross(self.inner_b - self.inner_a, p - self.inner_a), eps);
        rail_outer != rail_inner
    }
}

/// Per-point sector result. Off-track points have `sector = None` and
/// `collision = Wall`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectorHit {
    pub sector: Option<usize>,
    pub collision: WallCollision,
}

impl SectorHit {
    #[inline]
    pub fn on_track(sector: usize) -> Self {
        Self {
            sector: Some(sector),
            collision: WallCollision::None,
        }
    }

    #[inline]
    pub fn off_track() -> Self {
        Self {
            sector: None,
            collision: WallCollision::Wall,
        }
    }

    /// Sector index with `-1` for "none", as hosts expect.
    #[inline]
    pub fn sector_code(&self) -> i64 {
        self.sector.map_or(-1, |s| s as i64)
    }
}

pub fn classify_sectors(points: &[Point2], boundary: &TrackBoundary) -> Vec<SectorHit> {
    classify_sectors_with_cfg(points, boundary, GeomCfg::default())
}

/// Classify each point (track frame, y up) against `boundary`.
pub fn classify_sectors_with_cfg(
    points: &[Point2],
    boundary: &TrackBoundary,
    cfg: GeomCfg,
) -> Vec<SectorHit> {
    tracing::debug!(
        points = points.len(),
        sectors = boundary.num_sectors(),
        "classify_sectors"
    );
    let cells = boundary.flipped_cells();
    points
        .iter()
        .map(|&p| {
            cells
                .iter()
                .position(|c| c.contains(p, cfg.eps))
                .map_or_else(SectorHit::off_track, SectorHit::on_track)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    /// 10×10 outer square around a 4×4 inner square, 4 sectors, screen coords.
    fn square_track() -> TrackBoundary {
        let outer = vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![0.0, 0.0],
        ];
        let inner = vec![
            vector![3.0, 3.0],
            vector![7.0, 3.0],
            vector![7.0, 7.0],
            vector![3.0, 7.0],
            vector![3.0, 3.0],
        ];
        TrackBoundary::new(outer, inner).unwrap()
    }

    #[test]
    fn lane_centers_land_in_exactly_one_sector() {
        let track = square_track();
        assert_eq!(track.num_sectors(), 4);
        // screen-space lane centers of each side, converted to the track frame
        let centers = [
            (vector![5.0, 1.5], 0),
            (vector![8.5, 5.0], 1),
            (vector![5.0, 8.5], 2),
            (vector![1.5, 5.0], 3),
        ];
        for (screen, expected) in centers {
            let hits = classify_sectors(&[to_track_frame(screen)], &track);
            assert_eq!(hits[0], SectorHit::on_track(expected), "{screen:?}");
            assert_eq!(hits[0].collision.code(), 0);
        }
    }

    #[test]
    fn far_point_is_off_track() {
        let track = square_track();
        let hits = classify_sectors(&[vector![50.0, -50.0], vector![5.0, -5.0]], &track);
        assert_eq!(hits[0], SectorHit::off_track());
        assert_eq!(hits[0].sector_code(), -1);
        // inside the inner square (the infield) is off-track too
        assert_eq!(hits[1], SectorHit::off_track());
    }

    #[test]
    fn unflipped_query_misses_the_track() {
        // Passing screen coordinates directly puts the point on the mirrored side.
        let track = square_track();
        let hits = classify_sectors(&[vector![5.0, 1.5]], &track);
        assert_eq!(hits[0], SectorHit::off_track());
    }

    #[test]
    fn first_matching_sector_wins() {
        // Two identical sectors stacked: both contain the point, index 0 is reported.
        let outer = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![0.0, 0.0]];
        let inner = vec![vector![0.0, 4.0], vector![10.0, 4.0], vector![0.0, 4.0]];
        let track = TrackBoundary::new(outer, inner).unwrap();
        let hits = classify_sectors(&[vector![5.0, -2.0]], &track);
        assert_eq!(hits[0].sector, Some(0));
    }

    #[test]
    fn boundary_point_on_lateral_edge_is_inside() {
        let track = square_track();
        // on the rail-to-rail gate between sectors 0 and 1 (y up: (8.5, -1.5))
        let p = to_track_frame(vector![8.5, 1.5]);
        let hit = classify_sectors(&[p], &track)[0];
        assert_eq!(hit.collision, WallCollision::None);
        assert!(matches!(hit.sector, Some(0) | Some(1)));
    }

    #[test]
    fn rejects_mismatched_rails() {
        let err = TrackBoundary::new(vec![vector![0.0, 0.0]; 3], vec![vector![0.0, 0.0]; 2]);
        assert!(matches!(
            err,
            Err(LayoutError::RailLengths { outer: 3, inner: 2 })
        ));
        let err = TrackBoundary::new(vec![vector![0.0, 0.0]], vec![vector![0.0, 0.0]]);
        assert!(matches!(err, Err(LayoutError::TooFewRailPoints { got: 1 })));
    }

    #[test]
    fn caller_rails_are_not_modified() {
        let track = square_track();
        let before = track.clone();
        let _ = classify_sectors(&[vector![1.0, -1.0]], &track);
        assert_eq!(track, before);
    }
}
