//! Conversion between a packed `n*p`-bit integer and its "transpose" form:
//! `n` words of `p` bits, one per axis.
//!
//! Bit level `j` of every axis forms one `n`-bit group in the packed value,
//! axis 0 first. Groups are ordered most significant first, so bit `j` of
//! axis `i` lands at packed bit `j*n + (n-1-i)`. This module knows nothing
//! about curves; it is a plain bijection between the two layouts.

use num_bigint::BigUint;
use smallvec::{SmallVec, smallvec};

use crate::error::{Error, Result};

/// Per-axis bit planes. Inline storage covers up to eight axes.
pub type Transpose = SmallVec<[u64; 8]>;

/// Packed bit position of bit `level` of `axis` for `dimensions` axes.
#[inline]
fn packed_bit(level: u32, axis: usize, dimensions: usize) -> usize {
    level as usize * dimensions + (dimensions - 1 - axis)
}

/// Interleave `transpose` (each word `order` bits wide) into one integer.
///
/// Bits above `order` in any word are ignored.
pub fn pack(transpose: &[u64], order: u32) -> BigUint {
    let dimensions = transpose.len();
    let total = order as usize * dimensions;
    let mut digits = vec![0u32; total.div_ceil(32)];
    for level in 0..order {
        for (axis, &word) in transpose.iter().enumerate() {
            if (word >> level) & 1 == 1 {
                let pos = packed_bit(level, axis, dimensions);
                digits[pos / 32] |= 1 << (pos % 32);
            }
        }
    }
    BigUint::new(digits)
}

/// Split `packed` into `dimensions` words of `order` bits. Inverse of
/// [`pack`].
///
/// Fails with [`Error::OutOfRange`] if `packed` needs more than
/// `order * dimensions` bits.
pub fn unpack(packed: &BigUint, order: u32, dimensions: u32) -> Result<Transpose> {
    let total = u64::from(order) * u64::from(dimensions);
    if packed.bits() > total {
        return Err(Error::out_of_range(
            "packed value",
            packed,
            format!("fewer than {total} bits"),
        ));
    }

    let dimensions = dimensions as usize;
    let digits = packed.to_u32_digits();
    let bit = |pos: usize| digits.get(pos / 32).is_some_and(|d| (d >> (pos % 32)) & 1 == 1);

    let mut transpose: Transpose = smallvec![0; dimensions];
    for level in 0..order {
        for (axis, word) in transpose.iter_mut().enumerate() {
            if bit(packed_bit(level, axis, dimensions)) {
                *word |= 1 << level;
            }
        }
    }
    Ok(transpose)
}
