//! Collision classification for 2D racing circuits.
//!
//! Four independent, stateless algorithms over `f64` points and segments:
//! - `ellipse`: point vs. elliptic annulus (wall / slow area / free).
//! - `sector`: point vs. a two-rail polyline track split into sectors.
//! - `intersect`: exact segment–segment tests and intersection points.
//! - `query`: batched wall flags and nearest-wall distances for probe segments.
//!
//! Hosts hand in flat coordinate arrays; `layout` turns them into typed values
//! (with length checks) and turns results back into flat integer/float codes.
//! Bindings live in separate crates (`collisions-ffi`, `circuit-collide-py`).
//!
//! Numeric contract
//! - One shared tolerance, `GeomCfg::eps` (default `1e-4`), drives every
//!   sign and collinearity comparison. The closed-disk test of the on-segment
//!   predicate is exact (`<= 0`).
//! - Degenerate geometry is not an error: NaN/Inf flow through silently.

pub mod ellipse;
pub mod geom;
pub mod intersect;
pub mod layout;
pub mod query;
pub mod rand;
pub mod sector;
pub mod track;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{GeomCfg, Point2, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ellipse::{
        angular_sector, classify_ellipse, Annulus, Ellipse, EllipseCollision,
    };
    pub use crate::geom::{GeomCfg, Point2, Segment};
    pub use crate::intersect::{crossing_point, segments_touch};
    pub use crate::layout::LayoutError;
    pub use crate::query::{
        collision_flags, collision_flags_with_cfg, nearest_wall_distances,
        nearest_wall_distances_with_cfg, WallCollision,
    };
    pub use crate::sector::{classify_sectors, classify_sectors_with_cfg, SectorHit, TrackBoundary};
    pub use nalgebra::Vector2 as Vec2;
}
