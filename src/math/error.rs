// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("Triangulation references point index {index}, but only {point_count} points exist")]
    InvalidIndex { index: usize, point_count: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },
}

pub type EffectResult<T> = Result<T, EffectError>;
