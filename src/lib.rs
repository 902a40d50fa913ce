//! Conversion between geographic coordinates and the Dutch national grid
//! (Rijksdriehoek) using fixed polynomial series.
//!
//! ```
//! use rd_grid::proj::rijksdriehoek;
//!
//! // Westertoren, Amsterdam
//! let (x, y) = rijksdriehoek::forward(4.88352559_f64.to_radians(), 52.37453253_f64.to_radians());
//! assert!((x - 120_700.723).abs() < 0.01);
//! assert!((y - 487_525.501).abs() < 0.01);
//!
//! // The inverse returns decimal degrees
//! let (lon, lat) = rijksdriehoek::inverse(x, y);
//! assert!((lon - 4.88352559).abs() < 1e-6);
//! assert!((lat - 52.37453253).abs() < 1e-6);
//! ```

pub mod error;
pub mod proj;
#[cfg(feature = "python")]
mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rd_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
