//! Math error types

use thiserror::Error;

/// A vector with zero (or near-zero) length was asked for its direction
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVectorError {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
