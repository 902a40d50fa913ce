//! Bivariate polynomial series: fixed `(p, q, coefficient)` terms evaluated
//! around an origin point.

/// One term of a series: contributes `coefficient · a^p · b^q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub p: u8,
    pub q: u8,
    pub coefficient: f64,
}

impl Term {
    pub const fn new(p: u8, q: u8, coefficient: f64) -> Self {
        Self { p, q, coefficient }
    }

    /// Evaluate this term at normalized offsets `(a, b)`.
    ///
    /// A zero exponent yields exactly 1.0 for any base, `0^0` included.
    #[inline]
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        self.coefficient * a.powi(i32::from(self.p)) * b.powi(i32::from(self.q))
    }
}

/// Sum all terms of `table` at `(a, b)`, in declared order.
pub fn evaluate_series(table: &[Term], a: f64, b: f64) -> f64 {
    table.iter().fold(0.0, |acc, t| acc + t.evaluate(a, b))
}

/// Reference point the series are centred on, in both coordinate systems.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    /// Planar easting (metres)
    pub x: f64,
    /// Planar northing (metres)
    pub y: f64,
    /// Latitude (decimal degrees)
    pub lat: f64,
    /// Longitude (decimal degrees)
    pub lon: f64,
}
