//! Transforms over parallel coordinate slices.

use std::fmt;
use std::str::FromStr;

use crate::error::ProjError;
use crate::proj::Projection;

/// Which way a batch goes through a [`Projection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// geographic (radians) → planar
    Forward,
    /// planar → geographic
    Inverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Inverse => f.write_str("inverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "inverse" => Ok(Direction::Inverse),
            _ => Err(ProjError::UnknownDirection(s.to_string())),
        }
    }
}

/// Transform two parallel coordinate slices through `proj`.
///
/// Returns new `(first, second)` vectors in the output units of the chosen
/// direction.
pub fn transform_points(
    proj: &dyn Projection,
    x: &[f64],
    y: &[f64],
    direction: Direction,
) -> Result<(Vec<f64>, Vec<f64>), ProjError> {
    if x.len() != y.len() {
        return Err(ProjError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    tracing::debug!(
        projection = proj.name(),
        %direction,
        points = x.len(),
        "transforming points"
    );

    let mut coords: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    match direction {
        Direction::Forward => proj.forward_batch(&mut coords)?,
        Direction::Inverse => proj.inverse_batch(&mut coords)?,
    }
    Ok(coords.into_iter().unzip())
}
