use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AoiError {
    #[error("area of interest needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("invalid point {index}: {message}")]
    InvalidPoint { index: usize, message: String },
}
