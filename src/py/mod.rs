use pyo3::prelude::*;

use crate::proj::rijksdriehoek::Rijksdriehoek;

mod transform;

/// Register all Python-visible functions and constants.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PROJECTION", Rijksdriehoek::NAME)?;
    m.add_function(wrap_pyfunction!(transform::forward, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse, m)?)?;
    m.add_function(wrap_pyfunction!(transform::forward_points, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse_points, m)?)?;
    Ok(())
}
