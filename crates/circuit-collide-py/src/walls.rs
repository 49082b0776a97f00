//! Segment-vs-wall bindings. Segments are flat `[x1, y1, x2, y2, ...]` lists.

use crate::common::{map_layout_err, segments_from_py};
use circuit_collide::geom::GeomCfg;
use circuit_collide::layout::{points_from_pairs, segments_to_flat, wall_codes, LayoutError};
use circuit_collide::query::{collision_flags, nearest_wall_distances, shape_collisions};
use circuit_collide::track::{sector_gates, walls_from_rails};
use pyo3::prelude::*;

#[pyfunction]
pub fn col_circuit(segs: Vec<f64>, walls: Vec<f64>) -> PyResult<Vec<i32>> {
    let q = segments_from_py(segs)?;
    let w = segments_from_py(walls)?;
    Ok(wall_codes(&collision_flags(&q, &w)))
}

/// Distance from each segment start to the nearest wall; `1e9` on a miss.
#[pyfunction]
pub fn col_dist_circuit(segs: Vec<f64>, walls: Vec<f64>) -> PyResult<Vec<f64>> {
    let q = segments_from_py(segs)?;
    let w = segments_from_py(walls)?;
    Ok(nearest_wall_distances(&q, &w))
}

/// One flag per car polygon (list of `(x, y)` vertices).
#[pyfunction]
pub fn col_circuit_shapes(shapes: Vec<Vec<(f64, f64)>>, walls: Vec<f64>) -> PyResult<Vec<i32>> {
    let w = segments_from_py(walls)?;
    let polys: Vec<_> = shapes.iter().map(|s| points_from_pairs(s)).collect();
    Ok(wall_codes(&shape_collisions(&polys, &w, GeomCfg::default())))
}

/// Flat wall list from the two rails, x shifted by `shift`.
#[pyfunction]
#[pyo3(signature = (outer, inner, shift = 0.0))]
pub fn walls_list(outer: Vec<(f64, f64)>, inner: Vec<(f64, f64)>, shift: f64) -> Vec<f64> {
    segments_to_flat(&walls_from_rails(
        &points_from_pairs(&outer),
        &points_from_pairs(&inner),
        shift,
    ))
}

#[pyfunction]
pub fn gates_list(outer: Vec<(f64, f64)>, inner: Vec<(f64, f64)>) -> PyResult<Vec<f64>> {
    if outer.len() != inner.len() {
        return Err(map_layout_err(LayoutError::RailLengths {
            outer: outer.len(),
            inner: inner.len(),
        }));
    }
    Ok(segments_to_flat(&sector_gates(
        &points_from_pairs(&outer),
        &points_from_pairs(&inner),
    )))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(col_circuit, m)?)?;
    m.add_function(wrap_pyfunction!(col_dist_circuit, m)?)?;
    m.add_function(wrap_pyfunction!(col_circuit_shapes, m)?)?;
    m.add_function(wrap_pyfunction!(walls_list, m)?)?;
    m.add_function(wrap_pyfunction!(gates_list, m)?)?;
    Ok(())
}
