//! JSON track descriptions.
//!
//! ```json
//! {"kind": "ellipse", "center": [400, 300], "outer": [350, 250],
//!  "inner": [150, 100], "wall": 10, "slow_area": 20}
//! {"kind": "custom", "outer": [[0, 0], [10, 0]], "inner": [[3, 3], [7, 3]]}
//! ```
//!
//! `outter` is accepted for `outer`, matching older circuit configs.

use anyhow::{bail, Context, Result};
use circuit_collide::ellipse::Annulus;
use circuit_collide::layout::points_from_pairs;
use circuit_collide::rand::Bounds2;
use circuit_collide::sector::TrackBoundary;
use circuit_collide::track::walls_from_rails;
use circuit_collide::{Point2, Segment};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Vertices used to turn each ellipse into wall segments.
pub const ELLIPSE_WALL_VERTICES: usize = 72;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackSpec {
    Ellipse {
        center: (f64, f64),
        #[serde(alias = "outter")]
        outer: (f64, f64),
        inner: (f64, f64),
        wall: f64,
        slow_area: f64,
    },
    Custom {
        #[serde(alias = "outter")]
        outer: Vec<(f64, f64)>,
        inner: Vec<(f64, f64)>,
    },
}

impl TrackSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing track {}", path.display()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TrackSpec::Ellipse { .. } => "ellipse",
            TrackSpec::Custom { .. } => "custom",
        }
    }

    pub fn annulus(&self) -> Result<Annulus> {
        match *self {
            TrackSpec::Ellipse {
                center,
                outer,
                inner,
                wall,
                slow_area,
            } => Ok(Annulus::new(
                Point2::new(center.0, center.1),
                outer,
                inner,
                wall,
                slow_area,
            )),
            TrackSpec::Custom { .. } => bail!("expected an ellipse track, got a custom one"),
        }
    }

    pub fn boundary(&self) -> Result<TrackBoundary> {
        match self {
            TrackSpec::Custom { outer, inner } => Ok(TrackBoundary::new(
                points_from_pairs(outer),
                points_from_pairs(inner),
            )?),
            TrackSpec::Ellipse { .. } => bail!("expected a custom track, got an ellipse"),
        }
    }

    /// Rails as point lists; ellipses are traced as closed polylines.
    fn rails(&self) -> Result<(Vec<Point2>, Vec<Point2>)> {
        Ok(match self {
            TrackSpec::Custom { outer, inner } => {
                (points_from_pairs(outer), points_from_pairs(inner))
            }
            TrackSpec::Ellipse { .. } => {
                let ann = self.annulus()?;
                (
                    ann.outer.outline(ELLIPSE_WALL_VERTICES),
                    ann.inner.outline(ELLIPSE_WALL_VERTICES),
                )
            }
        })
    }

    pub fn walls(&self, shift: f64) -> Result<Vec<Segment>> {
        let (outer, inner) = self.rails()?;
        Ok(walls_from_rails(&outer, &inner, shift))
    }

    /// Box around the outer rail, used to place random probes.
    pub fn bounds(&self, shift: f64) -> Result<Bounds2> {
        let (outer, _) = self.rails()?;
        let b = Bounds2::around(&outer).context("track has an empty outer rail")?;
        let offset = Point2::new(shift, 0.0);
        Ok(Bounds2::new(b.min + offset, b.max + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_collide::ellipse::EllipseCollision;
    use tempfile::tempdir;

    fn square() -> TrackSpec {
        serde_json::from_str(
            r#"{"kind": "custom",
                "outter": [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                "inner": [[3, 3], [7, 3], [7, 7], [3, 7], [3, 3]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_both_kinds() {
        let ell: TrackSpec = serde_json::from_str(
            r#"{"kind": "ellipse", "center": [0, 0], "outer": [10, 10],
                "inner": [5, 5], "wall": 1, "slow_area": 1}"#,
        )
        .unwrap();
        assert_eq!(ell.kind(), "ellipse");
        let ann = ell.annulus().unwrap();
        assert_eq!(ann.classify(Point2::new(5.5, 0.0)), EllipseCollision::SlowArea);
        assert!(ell.boundary().is_err());

        let sq = square();
        assert_eq!(sq.kind(), "custom");
        assert_eq!(sq.boundary().unwrap().num_sectors(), 4);
        assert!(sq.annulus().is_err());
    }

    #[test]
    fn walls_and_bounds_follow_the_shift() {
        let sq = square();
        let walls = sq.walls(100.0).unwrap();
        assert_eq!(walls.len(), 8);
        assert_eq!(walls[0], Segment::from_coords(100.0, 0.0, 110.0, 0.0));
        let b = sq.bounds(100.0).unwrap();
        assert_eq!(b.min, Point2::new(100.0, 0.0));
        assert_eq!(b.max, Point2::new(110.0, 10.0));
    }

    #[test]
    fn ellipse_walls_trace_both_curves() {
        let ell = TrackSpec::Ellipse {
            center: (0.0, 0.0),
            outer: (10.0, 10.0),
            inner: (5.0, 5.0),
            wall: 1.0,
            slow_area: 1.0,
        };
        assert_eq!(ell.walls(0.0).unwrap().len(), 2 * ELLIPSE_WALL_VERTICES);
    }

    #[test]
    fn load_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("track.json");
        std::fs::write(&path, r#"{"kind": "oval"}"#).unwrap();
        let err = TrackSpec::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("track.json"));
    }
}
