//! Rijksdriehoek (Dutch national grid, EPSG:28992) by polynomial series.
//!
//! forward: (λ, φ) radians → (x, y) metres
//!   dφ = 0.36·(φ° − φ₀), dλ = 0.36·(λ° − λ₀)
//!   x = x₀ + Σ Rpq·dφᵖ·dλ^q, y = y₀ + Σ Spq·dφᵖ·dλ^q
//! inverse: (x, y) metres → (λ, φ) decimal degrees
//!   dx = (x − x₀)/10⁵, dy = (y − y₀)/10⁵
//!   φ = φ₀ + Σ Kpq·dxᵖ·dy^q / 3600, λ = λ₀ + Σ Lpq·dxᵖ·dy^q / 3600
//!
//! Origin is Amersfoort. Accuracy is sub-metre inside the Netherlands and
//! degrades without bound away from it; inputs are never range checked.
//!
//! Forward takes radians, inverse returns degrees.

use crate::error::ProjError;
use crate::proj::terms::{evaluate_series, Origin, Term};
use crate::proj::units::{arcsec_to_deg, deg_offset_to_series, rad_to_deg};
use crate::proj::Projection;

/// Origin used by the forward series.
const FORWARD_ORIGIN: Origin = Origin {
    x: 155000.0,
    y: 463000.0,
    lat: 52.15517440,
    lon: 5.38720621,
};

/// Origin used by the inverse series. Kept as its own literal set; the two
/// fits are independent.
const INVERSE_ORIGIN: Origin = Origin {
    x: 155000.0,
    y: 463000.0,
    lat: 52.15517440,
    lon: 5.38720621,
};

/// x correction in terms of (dφ, dλ).
const R: [Term; 9] = [
    Term::new(0, 1, 190094.945),
    Term::new(1, 1, -11832.228),
    Term::new(2, 1, -114.221),
    Term::new(0, 3, -32.391),
    Term::new(1, 0, -0.705),
    Term::new(3, 1, -2.340),
    Term::new(1, 3, -0.608),
    Term::new(0, 2, -0.008),
    Term::new(2, 3, 0.148),
];

/// y correction in terms of (dφ, dλ).
const S: [Term; 10] = [
    Term::new(1, 0, 309056.544),
    Term::new(0, 2, 3638.893),
    Term::new(2, 0, 73.077),
    Term::new(1, 2, -157.984),
    Term::new(3, 0, 59.788),
    Term::new(0, 1, 0.433),
    Term::new(2, 2, -6.439),
    Term::new(1, 1, -0.032),
    Term::new(0, 4, 0.092),
    Term::new(1, 4, -0.054),
];

/// φ correction (arcseconds) in terms of (dx, dy).
const K: [Term; 11] = [
    Term::new(0, 1, 3235.65389),
    Term::new(2, 0, -32.58297),
    Term::new(0, 2, -0.24750),
    Term::new(2, 1, -0.84978),
    Term::new(0, 3, -0.06550),
    Term::new(2, 2, -0.01709),
    Term::new(1, 0, -0.00738),
    Term::new(4, 0, 0.00530),
    Term::new(2, 3, -0.00039),
    Term::new(4, 1, 0.00033),
    Term::new(1, 1, -0.00012),
];

/// λ correction (arcseconds) in terms of (dx, dy).
const L: [Term; 9] = [
    Term::new(1, 0, 5260.52916),
    Term::new(1, 1, 105.94684),
    Term::new(1, 2, 2.45656),
    Term::new(3, 0, -0.81885),
    Term::new(1, 3, 0.05594),
    Term::new(3, 1, -0.05607),
    Term::new(0, 1, 0.01199),
    Term::new(3, 2, -0.00256),
    Term::new(1, 4, 0.00128),
];

/// Planar units per inverse series unit (100 km).
const PLANAR_SCALE: f64 = 1e5;

/// Geographic → RD.
///
/// `lon`, `lat` in radians. Returns `(x, y)` in metres.
pub fn forward(lon: f64, lat: f64) -> (f64, f64) {
    let o = &FORWARD_ORIGIN;
    let d_lat = deg_offset_to_series(rad_to_deg(lat) - o.lat);
    let d_lon = deg_offset_to_series(rad_to_deg(lon) - o.lon);

    let x = o.x + evaluate_series(&R, d_lat, d_lon);
    let y = o.y + evaluate_series(&S, d_lat, d_lon);
    (x, y)
}

/// RD → geographic.
///
/// `x`, `y` in metres. Returns `(lon, lat)` in decimal degrees.
pub fn inverse(x: f64, y: f64) -> (f64, f64) {
    let o = &INVERSE_ORIGIN;
    let dx = (x - o.x) / PLANAR_SCALE;
    let dy = (y - o.y) / PLANAR_SCALE;

    let lat = o.lat + arcsec_to_deg(evaluate_series(&K, dx, dy));
    let lon = o.lon + arcsec_to_deg(evaluate_series(&L, dx, dy));
    (lon, lat)
}

/// The series pair as a named [`Projection`].
///
/// Calls pass straight through to [`forward`] and [`inverse`], so the unit
/// contract is the same: radians in, degrees out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rijksdriehoek;

impl Rijksdriehoek {
    pub const NAME: &'static str = "rijksdriehoek";

    pub fn new() -> Self {
        Self
    }

    /// Origin of the forward series.
    pub fn origin(&self) -> Origin {
        FORWARD_ORIGIN
    }
}

impl Projection for Rijksdriehoek {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok(forward(lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok(inverse(x, y))
    }
}
