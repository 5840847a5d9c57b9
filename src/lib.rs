//! Mapping between positions on an N-dimensional Hilbert curve and points of
//! the integer grid it fills
//!
//! The entry point is [`HilbertCodec`], which converts a curve index into the
//! coordinates of the matching point and back. Under the hood, this goes
//! through an intermediate "transposed" representation of the curve index,
//! which is produced by the [`morton`] module's bit interleaving and turned
//! into actual coordinates by the [`hilbert`] module.
//!
//! ```
//! use hilbert_index::HilbertCodec;
//!
//! let codec = HilbertCodec::<2>::new(5)?;
//! assert_eq!(codec.index_to_point(2)?, [1, 1]);
//! assert_eq!(codec.point_to_index([1, 1])?, 2);
//! # Ok::<(), hilbert_index::Error>(())
//! ```

pub mod bits;
pub mod codec;
pub mod error;
pub mod hilbert;
pub mod morton;
pub mod params;

pub use crate::{
    codec::HilbertCodec,
    error::{ConfigError, Error, Result},
    params::CurveParams,
};

/// Integer type suitable for counting number of bits
///
/// Although 32-bit is very much overkill for this purpose, I am using this type
/// for interface compatibility with standard Rust integer methods.
///
pub type NumBits = u32;

/// Index of a point on a space-filling curve
///
/// The number of bits per axis times the number of axes of a curve must not
/// exceed the width of this type.
///
pub type CurveIdx = u64;

/// Coordinate of a point on a space-filling curve, along one axis
pub type Coordinate = u32;

/// Coordinates of an N-dimensional point on a space-filling curve
///
/// The same array type also carries the "transposed" form of a curve index,
/// see the [`morton`] module for more on that.
///
pub type Coordinates<const DIM: usize> = [Coordinate; DIM];
