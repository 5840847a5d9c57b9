//! Binary arithmetic utilities used for space-filling curve computations

use crate::{Coordinate, CurveIdx, NumBits};

/// Count the number of bits of an integer
#[inline(always)]
pub const fn num_bits<T>() -> NumBits {
    // TODO: Once assert in const is allowed, sanity check input
    // assert!(core::mem::size_of<T>() <= NumBits::MAX as usize);
    (core::mem::size_of::<T>() * 8) as _
}

/// Generate a mask that selects a certain number of low-order bits: 0000...0011
///
/// Masks for coordinates are obtained by truncating the result, which is
/// exact as long as `length` does not exceed the width of `Coordinate`.
///
#[inline(always)]
pub const fn low_order_mask(length: NumBits) -> CurveIdx {
    debug_assert!(length <= num_bits::<CurveIdx>());
    if length < num_bits::<CurveIdx>() {
        (1 << length) - 1
    } else {
        CurveIdx::MAX
    }
}

/// Compute the left-to-right inclusive XOR scan of an integer's bits
///
/// Given an integer with bits [ x1 x2 x3 ... ], this produces another integer
/// with bits [ x1  x1^x2  x1^x2^x3 ... ].
///
// FIXME: Extract common inclusive/exclusive scan routines once const fn
//        supports that (requires at least function pointers, ideally traits)
//
#[inline(always)]
pub const fn bitwise_xor_ltr_inclusive_scan(mut bits: Coordinate) -> Coordinate {
    // This is a bitwise implementation of the Hillis/Steele parallel inclusive
    // scan algorithm.
    let mut stride = 1;
    while stride < num_bits::<Coordinate>() {
        // Iteration 0: [ x1     x2        x3           x4           x5 ... ]
        // Iteration 1: [ x1  x1^x2     x2^x3        x3^x4        x4^x5 ... ]
        // Iteration 2: [ x1  x1^x2  x1^x2^x3  x1^x2^x3^x4  x2^x3^x4^x5 ... ]
        bits ^= bits >> stride;
        stride *= 2;
    }
    bits
}

/// Compute the left-to-right exclusive XOR scan of an integer's bits
///
/// Given an integer with bits [ x1 x2 x3 x4 ... ], this produces another
/// integer with bits [ 0  x1  x1^x2  x1^x2^x3 ... ].
///
/// In other words, each bit of the output tells whether an odd number of bits
/// are set above the matching bit of the input.
///
#[inline(always)]
pub const fn bitwise_xor_ltr_exclusive_scan(bits: Coordinate) -> Coordinate {
    bitwise_xor_ltr_inclusive_scan(bits >> 1)
}

/// Conditionally swap two integers' bits according to a mask
///
/// Given an integer A with bits [ a1 a2 ... aN ], an integer B with bits
/// [ b1 b2 ... bN ], and a mask with bits [ m1 m2 ... mN ], this function
/// produces two integers:
///
/// - One whose bits are equal to ai where the corresponding mask bit mi is
///   false and to bi where mi is true.
/// - One whose bits are conversely equal to bi where the corresponding mask
///   bit mi is false and to ai where mi is true.
///
#[inline(always)]
pub const fn bitwise_swaps(
    swap_mask: Coordinate,
    src1: Coordinate,
    src2: Coordinate,
) -> [Coordinate; 2] {
    // Only the bits that differ need to be flipped, on both sides
    let flips = (src1 ^ src2) & swap_mask;
    [src1 ^ flips, src2 ^ flips]
}
