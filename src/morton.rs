//! Utilities related to the Morton bit interleaving
//!
//! A Morton code combines N integers with bit patterns [ a1 a2 ... aB ],
//! [ b1 b2 ... bB ], ... [ n1 n2 ... nB ] into the interleaved bit pattern
//! [ a1 b1 ... n1 a2 b2 ... n2 ... aB bB ... nB ].
//!
//! Decoding the set of Morton codes produces the Z-order curve, which has
//! reasonable spatial locality but brutally jumps from one area of space to
//! another at times. Here, we are more interested in Morton decoding as a way
//! to "transpose" a Hilbert curve index into one integer per axis, which is
//! the input format of the [`hilbert`](crate::hilbert) module. Note that the
//! first axis receives the most significant bit of each group of N bits.

use crate::{
    bits::{self, num_bits},
    error::Result,
    params::CurveParams,
    Coordinate, Coordinates, CurveIdx, NumBits,
};

/// Split a curve index into its `DIM` interleaved sub-indices
///
/// Fails if `index` lies past the end of the curve described by `params`.
///
pub fn decode<const DIM: usize>(
    index: CurveIdx,
    params: &CurveParams<DIM>,
) -> Result<Coordinates<DIM>> {
    params.check_index(index)?;
    Ok(decode_unchecked(index, params.bits()))
}

/// Interleave `DIM` sub-indices into a curve index
///
/// Fails if a sub-index has more than `params.bits()` significant bits.
///
pub fn encode<const DIM: usize>(
    transposed: Coordinates<DIM>,
    params: &CurveParams<DIM>,
) -> Result<CurveIdx> {
    params.check_coordinates(&transposed)?;
    Ok(encode_unchecked(transposed, params.bits()))
}

/// Split a curve index into its `DIM` interleaved sub-indices, `bits` bits each
///
/// The caller must guarantee that `bits * DIM` fits in a `CurveIdx`, that
/// `bits` fits in a `Coordinate`, and that `index < 2^(bits * DIM)`.
///
#[inline]
pub const fn decode_unchecked<const DIM: usize>(
    mut index: CurveIdx,
    bits: NumBits,
) -> Coordinates<DIM> {
    debug_assert!(bits <= num_bits::<Coordinate>());
    debug_assert!(bits as usize * DIM <= num_bits::<CurveIdx>() as usize);
    debug_assert!(index & !bits::low_order_mask(bits * DIM as NumBits) == 0);

    // Consume the index from its least significant end, which holds the
    // least significant bit of every sub-index, last axis first:
    // [ ... aB-1 bB-1 ... nB-1 aB bB ... nB ]
    let mut transposed = [0 as Coordinate; DIM];
    let mut bit_idx = 0;
    while bit_idx < bits {
        let mut axis = DIM;
        while axis > 0 {
            axis -= 1;
            transposed[axis] |= ((index & 1) as Coordinate) << bit_idx;
            index >>= 1;
        }
        bit_idx += 1;
    }
    transposed
}

/// Interleave `DIM` sub-indices of `bits` bits each into a curve index
///
/// The caller must guarantee that `bits * DIM` fits in a `CurveIdx`, and that
/// every sub-index is smaller than `2^bits`.
///
#[inline]
pub const fn encode_unchecked<const DIM: usize>(
    transposed: Coordinates<DIM>,
    bits: NumBits,
) -> CurveIdx {
    debug_assert!(bits <= num_bits::<Coordinate>());
    debug_assert!(bits as usize * DIM <= num_bits::<CurveIdx>() as usize);

    // Emit bits from the most significant group to the least significant one,
    // first axis first within each group
    let mut index = 0;
    let mut bit_idx = bits;
    while bit_idx > 0 {
        bit_idx -= 1;
        let mut axis = 0;
        while axis < DIM {
            debug_assert!(transposed[axis] as CurveIdx <= bits::low_order_mask(bits));
            index = (index << 1) | ((transposed[axis] >> bit_idx) & 1) as CurveIdx;
            axis += 1;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use bits::test_utils::*;
    use quickcheck::quickcheck;

    // Straight translation of the interleaving rule: bit (bits-1-k) of axis j
    // is bit k*DIM + j of the index, counting from its most significant bit
    fn reference_decode<const DIM: usize>(index: CurveIdx, bits: NumBits) -> Coordinates<DIM> {
        let index_bits = bits * DIM as NumBits;
        let mut results = [0 as Coordinate; DIM];
        for k in 0..bits {
            for (j, result) in results.iter_mut().enumerate() {
                let global_pos = k * DIM as NumBits + j as NumBits;
                push_bit(result, get_bit(index, index_bits - 1 - global_pos));
            }
        }
        results
    }

    fn test<const DIM: usize>(index: CurveIdx, bits: NumBits) {
        let transposed = decode_unchecked::<DIM>(index, bits);
        assert_eq!(
            transposed,
            reference_decode::<DIM>(index, bits),
            "Unexpected {}D Morton decoding result for input {:b} at {} bits/axis",
            DIM,
            index,
            bits
        );
        assert_eq!(
            encode_unchecked(transposed, bits),
            index,
            "Morton encoding did not invert decoding of {:b} at {} bits/axis",
            index,
            bits
        );
    }

    #[test]
    fn exhaustive() {
        for bits in 1..=8 {
            for index in 0..(1 << (2 * bits)) {
                test::<2>(index, bits);
            }
        }
        for bits in 1..=5 {
            for index in 0..(1 << (3 * bits)) {
                test::<3>(index, bits);
            }
        }
        for index in 0..(1 << 12) {
            test::<1>(index, 12);
            test::<12>(index, 1);
        }
    }

    quickcheck! {
        fn quick_2d(index: CurveIdx) -> bool {
            test::<2>(index, 32);
            true
        }

        fn quick_3d(index: CurveIdx) -> bool {
            test::<3>(index >> 1, 21);
            true
        }

        fn quick_64d(index: CurveIdx) -> bool {
            test::<64>(index, 1);
            true
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(decode_unchecked::<2>(0b11_01, 2), [0b10, 0b11]);
        assert_eq!(decode_unchecked::<3>(0b101_011, 2), [0b10, 0b01, 0b11]);
        assert_eq!(encode_unchecked([0b10, 0b01, 0b11], 2), 0b101_011);
        assert_eq!(decode_unchecked::<1>(0b10110, 5), [0b10110]);
        assert_eq!(
            decode_unchecked::<2>(CurveIdx::MAX, 32),
            [Coordinate::MAX, Coordinate::MAX]
        );
    }

    #[test]
    fn checked() {
        let params = CurveParams::<2>::new(3).unwrap();
        assert_eq!(decode(0b110_100, &params), Ok([0b100, 0b110]));
        assert_eq!(encode([0b111, 0b000], &params), Ok(0b101_010));
        assert_eq!(
            decode(64, &params),
            Err(Error::IndexOutOfRange { index: 64, max: 63 })
        );
        assert_eq!(
            encode([0, 8], &params),
            Err(Error::CoordinateOutOfRange {
                axis: 1,
                value: 8,
                max: 7
            })
        );
    }
}
