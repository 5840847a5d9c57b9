//! Conversions between Hilbert curve indices and N-dimensional points

use crate::{
    error::Result, hilbert, morton, params::CurveParams, Coordinate, Coordinates, CurveIdx,
    NumBits,
};
use log::trace;

/// Hilbert curve over a `DIM`-dimensional grid of fixed resolution
///
/// The curve visits every point of the grid `[0, 2^bits)^DIM` exactly once,
/// and moves by exactly one unit along exactly one axis at every step. Its
/// first point is the origin, and its last point is the far end of axis 0.
///
/// Compared to a Morton (Z-order) curve, this gives curve indices which
/// preserve spatial locality much better, at the cost of slightly more
/// expensive conversions.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HilbertCodec<const DIM: usize> {
    params: CurveParams<DIM>,
}

impl<const DIM: usize> HilbertCodec<DIM> {
    /// Set up a curve with `bits` bits of resolution per axis
    ///
    /// Fails if there are no axes, no bits, or more bits than `Coordinate`
    /// and `CurveIdx` can hold.
    ///
    pub fn new(bits: NumBits) -> Result<Self> {
        CurveParams::new(bits).map(Self::from_params)
    }

    /// Set up a curve from pre-validated parameters
    pub const fn from_params(params: CurveParams<DIM>) -> Self {
        Self { params }
    }

    /// Parameters of this curve
    pub const fn params(&self) -> &CurveParams<DIM> {
        &self.params
    }

    /// Number of bits of resolution per axis
    pub const fn bits(&self) -> NumBits {
        self.params.bits()
    }

    /// Number of axes
    pub const fn dims(&self) -> usize {
        DIM
    }

    /// Largest valid coordinate along any axis
    pub const fn max_coordinate(&self) -> Coordinate {
        self.params.max_coordinate()
    }

    /// Index of the last point of the curve
    pub const fn max_index(&self) -> CurveIdx {
        self.params.max_index()
    }

    /// Compute the coordinates of the `index`-th point of the curve
    ///
    /// Fails if `index` lies past the end of the curve.
    ///
    pub fn index_to_point(&self, index: CurveIdx) -> Result<Coordinates<DIM>> {
        let transposed = morton::decode(index, &self.params)?;
        let point = hilbert::transposed_to_axes(transposed, self.bits());
        trace!("Hilbert index {index} -> point {point:?}");
        Ok(point)
    }

    /// Compute the position of a point along the curve
    ///
    /// Fails if any coordinate lies outside of the grid covered by the curve.
    ///
    pub fn point_to_index(&self, point: Coordinates<DIM>) -> Result<CurveIdx> {
        self.params.check_coordinates(&point)?;
        let transposed = hilbert::axes_to_transposed(point, self.bits());
        let index = morton::encode_unchecked(transposed, self.bits());
        trace!("Hilbert point {point:?} -> index {index}");
        Ok(index)
    }
}

impl<const DIM: usize> From<CurveParams<DIM>> for HilbertCodec<DIM> {
    fn from(params: CurveParams<DIM>) -> Self {
        Self::from_params(params)
    }
}
