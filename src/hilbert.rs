//! Utilities related to the Hilbert space-filling curve
//!
//! This module converts between the "transposed" form of a Hilbert curve index
//! and the coordinates of the matching point, in any number of dimensions,
//! using John Skilling's algorithm from "Programming the Hilbert curve" (AIP
//! Conference Proceedings 707, 2004).
//!
//! The transposed form of a curve index is what you get by splitting the bits
//! of that index across axes in round-robin fashion, most significant bits
//! first, as done by [`morton::decode`](crate::morton::decode). With 3 axes and
//! 4 bits per axis, the 12-bit index [ A B C D E F G H I J K L ] becomes:
//!
//! ```text
//! axis 0: [ A D G J ]
//! axis 1: [ B E H K ]
//! axis 2: [ C F I L ]
//! ```
//!
//! Each column of this table, from left to right, selects one of the 2^N
//! sub-cubes of the current cube at increasing recursion depths. What the
//! functions of this module do is turn these column-wise selections into
//! actual coordinates, accounting for the reflections and axis exchanges that
//! the Hilbert curve applies to its sub-cubes in order to remain continuous.

use crate::{bits, Coordinate, Coordinates, NumBits};

/// Compute the coordinates of a point on the Hilbert curve from the transposed
/// form of its curve index
///
/// `bits` is the number of bits of resolution per axis, which must be at most
/// the width of `Coordinate`. Every element of `transposed` must be smaller
/// than `2^bits`, and so is every coordinate of the result.
///
/// This is the inverse of [`axes_to_transposed()`].
///
#[inline]
pub const fn transposed_to_axes<const DIM: usize>(
    mut x: Coordinates<DIM>,
    bits: NumBits,
) -> Coordinates<DIM> {
    if DIM == 0 {
        return x;
    }

    // Within one column of the transposed form, the 2^N sub-cubes are visited
    // in binary reflected Gray code order. So we Gray-decode each column...
    //
    // * Axis i needs to XOR in the bit of axis i-1 from the same column
    // * Axis 0 needs to XOR in the bit of the last axis from the previous
    //   (more significant) column, because the Gray code runs across columns.
    //
    let carry = x[DIM - 1] >> 1;
    let mut axis = DIM - 1;
    while axis > 0 {
        x[axis] ^= x[axis - 1];
        axis -= 1;
    }
    x[0] ^= carry;

    // ...then walk the recursion from the deepest level to the shallowest one,
    // applying each level's reflections and exchanges to all the bits below.
    let mut level = 1;
    while level < bits {
        let level_bit = 1 << level;
        let mut axis = DIM;
        while axis > 0 {
            axis -= 1;
            x = invert_or_exchange(x, axis, level_bit);
        }
        level += 1;
    }
    x
}

/// Compute the transposed form of the Hilbert curve index of a point
///
/// `bits` is the number of bits of resolution per axis, which must be at most
/// the width of `Coordinate`. Every coordinate of `x` must be smaller than
/// `2^bits`, and so is every element of the result.
///
/// This is the inverse of [`transposed_to_axes()`].
///
#[inline]
pub const fn axes_to_transposed<const DIM: usize>(
    mut x: Coordinates<DIM>,
    bits: NumBits,
) -> Coordinates<DIM> {
    if DIM == 0 {
        return x;
    }

    // Undo the reflections and exchanges, from the shallowest recursion level
    // to the deepest one. Since each of these operations is its own inverse,
    // this is the same loop as in transposed_to_axes(), run backwards.
    let mut level = bits;
    while level > 1 {
        level -= 1;
        let level_bit = 1 << level;
        let mut axis = 0;
        while axis < DIM {
            x = invert_or_exchange(x, axis, level_bit);
            axis += 1;
        }
    }

    // Gray-encode each column...
    let mut axis = 1;
    while axis < DIM {
        x[axis] ^= x[axis - 1];
        axis += 1;
    }

    // ...then undo the cross-column carry. Bit k of the last axis was XORed
    // into axis 0 at bit k-1 on the way in, and that chains down to every
    // lower bit, so the correction for bit k is the XOR of all bits above k.
    let correction = bits::bitwise_xor_ltr_exclusive_scan(x[DIM - 1]);
    let mut axis = 0;
    while axis < DIM {
        x[axis] ^= correction;
        axis += 1;
    }
    x
}

/// Apply the sub-cube transform of one recursion level to one axis
///
/// If the point lies in the upper half of `axis` at this level, the bits of
/// axis 0 below this level are inverted (reflection). Otherwise, the bits of
/// axis 0 and `axis` below this level are exchanged. Either way, running the
/// transform twice gives back the original coordinates.
///
#[inline(always)]
const fn invert_or_exchange<const DIM: usize>(
    mut x: Coordinates<DIM>,
    axis: usize,
    level_bit: Coordinate,
) -> Coordinates<DIM> {
    let low_bits = level_bit - 1;
    if x[axis] & level_bit != 0 {
        x[0] ^= low_bits;
    } else {
        let [first, other] = bits::bitwise_swaps(low_bits, x[0], x[axis]);
        x[0] = first;
        x[axis] = other;
    }
    x
}
