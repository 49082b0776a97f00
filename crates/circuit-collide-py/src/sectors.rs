//! Two-rail sector bindings.

use crate::common::map_layout_err;
use circuit_collide::layout::{points_from_xy, sector_codes};
use circuit_collide::query::reduce_sectors;
use circuit_collide::sector::{classify_sectors, TrackBoundary};
use pyo3::prelude::*;

fn boundary(
    outter_x: Vec<f64>,
    outter_y: Vec<f64>,
    inner_x: Vec<f64>,
    inner_y: Vec<f64>,
) -> PyResult<TrackBoundary> {
    let outer = points_from_xy(&outter_x, &outter_y).map_err(map_layout_err)?;
    let inner = points_from_xy(&inner_x, &inner_y).map_err(map_layout_err)?;
    TrackBoundary::new(outer, inner).map_err(map_layout_err)
}

/// `(sectors, collisions)` per point; points already have y negated.
/// Sector `-1` means off-track.
#[pyfunction]
pub fn col_circuit_sectors(
    x: Vec<f64>,
    y: Vec<f64>,
    outter_x: Vec<f64>,
    outter_y: Vec<f64>,
    inner_x: Vec<f64>,
    inner_y: Vec<f64>,
) -> PyResult<(Vec<i64>, Vec<i32>)> {
    let track = boundary(outter_x, outter_y, inner_x, inner_y)?;
    let pts = points_from_xy(&x, &y).map_err(map_layout_err)?;
    Ok(sector_codes(&classify_sectors(&pts, &track)))
}

/// Like `col_circuit_sectors`, reduced per car: furthest sector and worst
/// collision over its `sizes[k]` points.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn col_circuit_sectors_shapes(
    x: Vec<f64>,
    y: Vec<f64>,
    sizes: Vec<usize>,
    outter_x: Vec<f64>,
    outter_y: Vec<f64>,
    inner_x: Vec<f64>,
    inner_y: Vec<f64>,
) -> PyResult<(Vec<i64>, Vec<i32>)> {
    let track = boundary(outter_x, outter_y, inner_x, inner_y)?;
    let pts = points_from_xy(&x, &y).map_err(map_layout_err)?;
    let per_car = reduce_sectors(&classify_sectors(&pts, &track), &sizes).map_err(map_layout_err)?;
    Ok(sector_codes(&per_car))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(col_circuit_sectors, m)?)?;
    m.add_function(wrap_pyfunction!(col_circuit_sectors_shapes, m)?)?;
    Ok(())
}
