//! Angle unit conversion between the external radian interface and the
//! decimal degrees the series are fitted in.

/// Radians → decimal degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Decimal degrees → radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Scale a degree offset to the forward series' unit (10⁴ arcseconds).
///
/// 1° = 3600″, so `0.36 · Δdeg = Δ″ / 10⁴`.
#[inline]
pub fn deg_offset_to_series(delta_deg: f64) -> f64 {
    0.36 * delta_deg
}

/// Convert an inverse series sum (arcseconds) to decimal degrees.
#[inline]
pub fn arcsec_to_deg(arcsec: f64) -> f64 {
    arcsec / 3600.0
}
