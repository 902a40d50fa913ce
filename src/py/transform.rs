//! PyO3 bindings for Rijksdriehoek coordinate transformation.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::proj::rijksdriehoek::{self, Rijksdriehoek};
use crate::proj::{transform_points, Direction};

/// Project one point: (lon, lat) in radians -> (x, y) in metres.
#[pyfunction]
pub fn forward(lon: f64, lat: f64) -> (f64, f64) {
    rijksdriehoek::forward(lon, lat)
}

/// Unproject one point: (x, y) in metres -> (lon, lat) in decimal degrees.
#[pyfunction]
pub fn inverse(x: f64, y: f64) -> (f64, f64) {
    rijksdriehoek::inverse(x, y)
}

/// Project arrays of coordinates onto the RD grid.
///
/// Args:
///     lon: 1D array of longitudes in radians.
///     lat: 1D array of latitudes in radians.
///
/// Returns:
///     Tuple of (x, y) arrays in metres.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn forward_points<'py>(
    py: Python<'py>,
    lon: PyReadonlyArray1<'py, f64>,
    lat: PyReadonlyArray1<'py, f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    run(py, lon, lat, Direction::Forward)
}

/// Unproject arrays of RD coordinates.
///
/// Args:
///     x: 1D array of eastings in metres.
///     y: 1D array of northings in metres.
///
/// Returns:
///     Tuple of (lon, lat) arrays in decimal degrees.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn inverse_points<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    run(py, x, y, Direction::Inverse)
}

#[allow(clippy::type_complexity)]
fn run<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    b: PyReadonlyArray1<'py, f64>,
    direction: Direction,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let a: Vec<f64> = a.as_array().iter().copied().collect();
    let b: Vec<f64> = b.as_array().iter().copied().collect();

    let (xs, ys) = py
        .allow_threads(move || transform_points(&Rijksdriehoek, &a, &b, direction))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    ))
}
