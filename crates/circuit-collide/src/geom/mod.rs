//! Shared 2D vector math and value types.
//!
//! Purpose
//! - Provide the few primitive predicates every classifier builds on
//!   (`cross`, `orient`, `dot`, on-segment test, squared distance).
//! - Keep them pure: inputs are taken by value, differences are computed into
//!   locals, nothing the caller owns is touched.
//!
//! Code cross-refs: `intersect`, `sector`, `query`

mod types;
mod vecmath;

pub use types::{GeomCfg, Point2, Segment, DEFAULT_EPS, NO_HIT_DISTANCE};
pub use vecmath::{cross, distance_squared, dot, on_segment_inclusive, orient, sign_eps};
