//! Error types

use crate::{Coordinate, CurveIdx, NumBits};
use thiserror::Error;

/// Result type of fallible curve operations
pub type Result<T> = core::result::Result<T, Error>;

/// Curve operation error
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The requested curve cannot be represented
    #[error("invalid curve configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A curve index lies past the end of the curve
    #[error("curve index {index} is out of range (maximum is {max})")]
    IndexOutOfRange { index: CurveIdx, max: CurveIdx },

    /// A coordinate lies outside of the grid covered by the curve
    #[error("coordinate {value} of axis {axis} is out of range (maximum is {max})")]
    CoordinateOutOfRange {
        axis: usize,
        value: Coordinate,
        max: Coordinate,
    },
}

impl Error {
    /// Truth that this error was caused by an out-of-range conversion input
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::CoordinateOutOfRange { .. }
        )
    }
}

/// Reason why a curve configuration was rejected
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// Curves need at least one axis
    #[error("a curve needs at least one dimension")]
    NoDimensions,

    /// Curves need at least one bit of resolution per axis
    #[error("a curve needs at least one bit of resolution per axis")]
    NoBits,

    /// Coordinates are too narrow for the requested resolution
    #[error("{bits} bits per axis do not fit in a {max}-bit coordinate")]
    CoordinateTooNarrow { bits: NumBits, max: NumBits },

    /// Curve indices are too narrow for the requested resolution
    #[error("{bits} bits per axis across {dims} axes do not fit in a {max}-bit curve index")]
    IndexTooNarrow {
        bits: NumBits,
        dims: usize,
        max: NumBits,
    },
}
