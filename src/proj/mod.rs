pub mod batch;
pub mod rijksdriehoek;
pub mod terms;
pub mod units;

pub use batch::{transform_points, Direction};

use crate::error::ProjError;

/// Trait for named map projections supporting forward and inverse transforms.
///
/// Implementations pass their own unit contract through unchanged; for
/// [`rijksdriehoek::Rijksdriehoek`] that is radians in, degrees out.
pub trait Projection: Send + Sync {
    /// Name the projection is registered under.
    fn name(&self) -> &'static str;

    /// Forward: (lon_rad, lat_rad) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse: (easting, northing) -> (lon, lat)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Batch forward transform (default: loop).
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rijksdriehoek::{self, Rijksdriehoek};
    use super::*;

    #[test]
    fn test_forward_batch_matches_single() {
        let proj = Rijksdriehoek;
        let input = [(0.085, 0.914), (0.094, 0.910), (0.105, 0.925)];
        let mut coords = input.to_vec();
        proj.forward_batch(&mut coords).unwrap();
        for (&(lon, lat), &out) in input.iter().zip(&coords) {
            assert_eq!(out, rijksdriehoek::forward(lon, lat));
        }
    }

    #[test]
    fn test_inverse_batch_matches_single() {
        let proj = Rijksdriehoek;
        let input = [(155_000.0, 463_000.0), (120_700.723, 487_525.501)];
        let mut coords = input.to_vec();
        proj.inverse_batch(&mut coords).unwrap();
        for (&(x, y), &out) in input.iter().zip(&coords) {
            assert_eq!(out, rijksdriehoek::inverse(x, y));
        }
    }

    #[test]
    fn test_usable_as_trait_object() {
        let proj: Box<dyn Projection> = Box::new(Rijksdriehoek::new());
        assert_eq!(proj.name(), Rijksdriehoek::NAME);
        let mut empty: Vec<(f64, f64)> = Vec::new();
        proj.forward_batch(&mut empty).unwrap();
        assert!(empty.is_empty());
    }
}
