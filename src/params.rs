//! Validated resolution parameters of an N-dimensional curve

use crate::{
    bits::{self, num_bits},
    error::{ConfigError, Error, Result},
    Coordinate, Coordinates, CurveIdx, NumBits,
};
use log::debug;

/// Shape of the grid covered by a curve
///
/// The number of dimensions is fixed at compile time by `DIM`, while the
/// number of bits of resolution per axis is picked at run time. A curve with
/// `bits` bits of resolution covers the coordinates `0..2^bits` of each axis,
/// and its points are indexed by the integers `0..2^(bits * DIM)`.
///
/// Once a `CurveParams` has been built, both ranges are known to be
/// representable by the [`Coordinate`] and [`CurveIdx`] types.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CurveParams<const DIM: usize> {
    bits: NumBits,
}

impl<const DIM: usize> CurveParams<DIM> {
    /// Validate the parameters of a curve with `bits` bits per axis
    pub fn new(bits: NumBits) -> Result<Self> {
        Self::validate(bits).map_err(|e| {
            debug!("Rejected {DIM}-dimensional curve with {bits} bits per axis: {e}");
            Error::from(e)
        })?;
        debug!("Set up {DIM}-dimensional curve with {bits} bits per axis");
        Ok(Self { bits })
    }

    fn validate(bits: NumBits) -> core::result::Result<(), ConfigError> {
        if DIM == 0 {
            return Err(ConfigError::NoDimensions);
        }
        if bits == 0 {
            return Err(ConfigError::NoBits);
        }
        let max_coord_bits = num_bits::<Coordinate>();
        if bits > max_coord_bits {
            return Err(ConfigError::CoordinateTooNarrow {
                bits,
                max: max_coord_bits,
            });
        }
        let max_idx_bits = num_bits::<CurveIdx>();
        let fits_index = (bits as usize)
            .checked_mul(DIM)
            .map_or(false, |idx_bits| idx_bits <= max_idx_bits as usize);
        if !fits_index {
            return Err(ConfigError::IndexTooNarrow {
                bits,
                dims: DIM,
                max: max_idx_bits,
            });
        }
        Ok(())
    }

    /// Number of bits of resolution per axis
    #[inline]
    pub const fn bits(&self) -> NumBits {
        self.bits
    }

    /// Number of axes
    #[inline]
    pub const fn dims(&self) -> usize {
        DIM
    }

    /// Number of significant bits of a curve index
    #[inline]
    pub const fn index_bits(&self) -> NumBits {
        self.bits * DIM as NumBits
    }

    /// Largest valid coordinate along any axis
    #[inline]
    pub const fn max_coordinate(&self) -> Coordinate {
        bits::low_order_mask(self.bits) as Coordinate
    }

    /// Largest valid curve index
    #[inline]
    pub const fn max_index(&self) -> CurveIdx {
        bits::low_order_mask(self.index_bits())
    }

    /// Check that a curve index designates a point of this curve
    pub fn check_index(&self, index: CurveIdx) -> Result<()> {
        let max = self.max_index();
        if index > max {
            debug!("Rejected curve index {index}, past the end of the curve ({max})");
            return Err(Error::IndexOutOfRange { index, max });
        }
        Ok(())
    }

    /// Check that every coordinate lies within the grid covered by this curve
    ///
    /// The error reports the first out-of-range axis.
    ///
    pub fn check_coordinates(&self, coords: &Coordinates<DIM>) -> Result<()> {
        let max = self.max_coordinate();
        match coords.iter().position(|&value| value > max) {
            Some(axis) => {
                let value = coords[axis];
                debug!("Rejected coordinate {value} of axis {axis}, outside of 0..={max}");
                Err(Error::CoordinateOutOfRange { axis, value, max })
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            CurveParams::<0>::new(4),
            Err(Error::InvalidConfiguration(ConfigError::NoDimensions))
        );
        assert_eq!(
            CurveParams::<2>::new(0),
            Err(Error::InvalidConfiguration(ConfigError::NoBits))
        );
        assert_eq!(
            CurveParams::<1>::new(33),
            Err(Error::InvalidConfiguration(
                ConfigError::CoordinateTooNarrow { bits: 33, max: 32 }
            ))
        );
        assert_eq!(
            CurveParams::<3>::new(22),
            Err(Error::InvalidConfiguration(ConfigError::IndexTooNarrow {
                bits: 22,
                dims: 3,
                max: 64
            }))
        );
        assert_eq!(
            CurveParams::<65>::new(1),
            Err(Error::InvalidConfiguration(ConfigError::IndexTooNarrow {
                bits: 1,
                dims: 65,
                max: 64
            }))
        );

        // Largest configurations that still fit
        assert!(CurveParams::<1>::new(32).is_ok());
        assert!(CurveParams::<2>::new(32).is_ok());
        assert!(CurveParams::<3>::new(21).is_ok());
        assert!(CurveParams::<64>::new(1).is_ok());
    }

    #[test]
    fn ranges() {
        let params = CurveParams::<2>::new(5).unwrap();
        assert_eq!(params.bits(), 5);
        assert_eq!(params.dims(), 2);
        assert_eq!(params.index_bits(), 10);
        assert_eq!(params.max_coordinate(), 31);
        assert_eq!(params.max_index(), 1023);

        let params = CurveParams::<2>::new(32).unwrap();
        assert_eq!(params.max_coordinate(), Coordinate::MAX);
        assert_eq!(params.max_index(), CurveIdx::MAX);

        let params = CurveParams::<3>::new(21).unwrap();
        assert_eq!(params.index_bits(), 63);
        assert_eq!(params.max_index(), CurveIdx::MAX >> 1);
    }

    #[test]
    fn check_index() {
        let params = CurveParams::<2>::new(5).unwrap();
        assert_eq!(params.check_index(0), Ok(()));
        assert_eq!(params.check_index(1023), Ok(()));
        assert_eq!(
            params.check_index(1024),
            Err(Error::IndexOutOfRange {
                index: 1024,
                max: 1023
            })
        );
        assert_eq!(
            CurveParams::<2>::new(32).unwrap().check_index(CurveIdx::MAX),
            Ok(())
        );
    }

    #[test]
    fn check_coordinates() {
        let params = CurveParams::<3>::new(5).unwrap();
        assert_eq!(params.check_coordinates(&[0, 31, 17]), Ok(()));
        assert_eq!(
            params.check_coordinates(&[0, 32, 40]),
            Err(Error::CoordinateOutOfRange {
                axis: 1,
                value: 32,
                max: 31
            })
        );
        assert_eq!(
            CurveParams::<1>::new(32)
                .unwrap()
                .check_coordinates(&[Coordinate::MAX]),
            Ok(())
        );
    }
}
