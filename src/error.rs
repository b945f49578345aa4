//! Error types.

use thiserror::Error;

/// Rejection reasons for a detection at the ingress boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("score {0} is outside [0, 1]")]
    ScoreOutOfRange(f32),
    #[error("{field} must be non-negative, got {value}")]
    NegativeDimension { field: &'static str, value: f32 },
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tracker configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid detection: {0}")]
    Validation(#[from] ValidationError),
    #[error("detector failed: {0}")]
    Detector(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
