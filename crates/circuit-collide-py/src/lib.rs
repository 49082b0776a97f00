//! PyO3 bindings for `circuit-collide`.
//!
//! Notes
//! - Same operations as the C library, but with Python lists in and out and
//!   `ValueError` instead of null results.
//! - Coordinates stay `f64` end to end; result codes match the C library.

mod common;
mod ellipse;
mod sectors;
mod walls;

use pyo3::prelude::*;

#[pymodule]
fn circuit_collide_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", circuit_collide::VERSION)?;
    ellipse::register(m)?;
    sectors::register(m)?;
    walls::register(m)?;
    Ok(())
}
