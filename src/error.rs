use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjError {
    #[error("x and y must have same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Unknown direction: {0} (expected \"forward\" or \"inverse\")")]
    UnknownDirection(String),
}
