//! Elliptic annulus bindings.

use crate::common::map_layout_err;
use circuit_collide::ellipse::{angular_sector, classify_ellipse, Annulus};
use circuit_collide::layout::{ellipse_codes, points_from_xy};
use circuit_collide::query::reduce_ellipse;
use nalgebra::Vector2;
use pyo3::prelude::*;

fn annulus(
    center: (f64, f64),
    outter: (f64, f64),
    inner: (f64, f64),
    wall: f64,
    slow_area: f64,
) -> Annulus {
    Annulus::new(Vector2::new(center.0, center.1), outter, inner, wall, slow_area)
}

/// Codes per point: 0 none, 1 slow area, 2 wall.
#[pyfunction]
pub fn col_circuit_ellipse(
    x: Vec<f64>,
    y: Vec<f64>,
    center: (f64, f64),
    outter: (f64, f64),
    inner: (f64, f64),
    wall: f64,
    slow_area: f64,
) -> PyResult<Vec<i32>> {
    let pts = points_from_xy(&x, &y).map_err(map_layout_err)?;
    let ann = annulus(center, outter, inner, wall, slow_area);
    Ok(ellipse_codes(&classify_ellipse(&pts, &ann)))
}

/// Worst code per car, each car contributing `sizes[k]` consecutive points.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn col_circuit_ellipse_shapes(
    x: Vec<f64>,
    y: Vec<f64>,
    sizes: Vec<usize>,
    center: (f64, f64),
    outter: (f64, f64),
    inner: (f64, f64),
    wall: f64,
    slow_area: f64,
) -> PyResult<Vec<i32>> {
    let pts = points_from_xy(&x, &y).map_err(map_layout_err)?;
    let ann = annulus(center, outter, inner, wall, slow_area);
    let per_car = reduce_ellipse(&classify_ellipse(&pts, &ann), &sizes).map_err(map_layout_err)?;
    Ok(ellipse_codes(&per_car))
}

#[pyfunction]
pub fn ellipse_sector(center: (f64, f64), point: (f64, f64), count: usize) -> usize {
    angular_sector(
        Vector2::new(center.0, center.1),
        Vector2::new(point.0, point.1),
        count,
    )
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(col_circuit_ellipse, m)?)?;
    m.add_function(wrap_pyfunction!(col_circuit_ellipse_shapes, m)?)?;
    m.add_function(wrap_pyfunction!(ellipse_sector, m)?)?;
    Ok(())
}
