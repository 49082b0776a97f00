use circuit_collide::layout::{segments_from_flat, LayoutError};
use circuit_collide::Segment;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_layout_err(err: LayoutError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn segments_from_py(flat: Vec<f64>) -> PyResult<Vec<Segment>> {
    segments_from_flat(&flat).map_err(map_layout_err)
}
