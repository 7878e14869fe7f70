//! In-place Hilbert transforms over transpose-form words.
//!
//! This is Skilling's formulation ("Programming the Hilbert curve", 2004):
//! the Hilbert index in transpose form differs from the coordinates by a
//! sequence of per-level exchanges and inversions against axis 0, followed by
//! a Gray code over the interleaved bits. [`encode`] and [`decode`] are kept
//! as separate pass sequences; each pass of one is undone by the mirrored pass
//! of the other, with levels and axes walked in the opposite direction.
//!
//! Both functions expect `words.len() >= 2` and every word below `2^order`.

/// Exchange low bits of `words[axis]` with axis 0, or invert axis 0, for the
/// level selected by `q`.
#[inline]
fn exchange_or_invert(words: &mut [u64], axis: usize, q: u64) {
    let low = q - 1;
    if words[axis] & q != 0 {
        words[0] ^= low;
    } else {
        let t = (words[0] ^ words[axis]) & low;
        words[0] ^= t;
        words[axis] ^= t;
    }
}

/// Convert coordinates to the transpose-form Hilbert index.
pub fn encode(words: &mut [u64], order: u32) {
    let dimensions = words.len();

    // Inverse undo, from the top level down.
    for level in (1..order).rev() {
        let q = 1u64 << level;
        for axis in 0..dimensions {
            exchange_or_invert(words, axis, q);
        }
    }

    // Gray encode along the axis chain.
    for axis in 1..dimensions {
        words[axis] ^= words[axis - 1];
    }

    // Fold the carries of the last axis back into every axis.
    let last = words[dimensions - 1];
    let mut t = 0u64;
    for level in (1..order).rev() {
        let q = 1u64 << level;
        if last & q != 0 {
            t ^= q - 1;
        }
    }
    for word in words.iter_mut() {
        *word ^= t;
    }
}

/// Convert a transpose-form Hilbert index back to coordinates.
pub fn decode(words: &mut [u64], order: u32) {
    let dimensions = words.len();

    // Gray decode of the interleaved word, H ^ (H >> 1). The shifted-out bits
    // of the last axis carry into axis 0 one level down.
    let t = words[dimensions - 1] >> 1;
    for axis in (1..dimensions).rev() {
        words[axis] ^= words[axis - 1];
    }
    words[0] ^= t;

    // Redo the exchanges, from the bottom level up.
    for level in 1..order {
        let q = 1u64 << level;
        for axis in (0..dimensions).rev() {
            exchange_or_invert(words, axis, q);
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::transpose::{pack, unpack};

    fn point_of(distance: u32, order: u32, dimensions: u32) -> Vec<u64> {
        let mut words = unpack(&BigUint::from(distance), order, dimensions).unwrap();
        decode(&mut words, order);
        words.to_vec()
    }

    fn distance_of(point: &[u64], order: u32) -> BigUint {
        let mut words = point.to_vec();
        encode(&mut words, order);
        pack(&words, order)
    }

    #[test]
    fn order_one_square() {
        let expected = [[0, 0], [0, 1], [1, 1], [1, 0]];
        for (d, p) in expected.iter().enumerate() {
            assert_eq!(point_of(d as u32, 1, 2), p);
            assert_eq!(distance_of(p, 1), BigUint::from(d));
        }
    }

    #[test]
    fn order_two_square() {
        let expected: [[u64; 2]; 16] = [
            [0, 0],
            [1, 0],
            [1, 1],
            [0, 1],
            [0, 2],
            [0, 3],
            [1, 3],
            [1, 2],
            [2, 2],
            [2, 3],
            [3, 3],
            [3, 2],
            [3, 1],
            [2, 1],
            [2, 0],
            [3, 0],
        ];
        for (d, p) in expected.iter().enumerate() {
            assert_eq!(point_of(d as u32, 2, 2), p);
            assert_eq!(distance_of(p, 2), BigUint::from(d));
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(point_of(35, 2, 3), [2, 3, 0]);
        assert_eq!(point_of(12345, 5, 3), [14, 19, 14]);
        assert_eq!(distance_of(&[5, 10, 19], 5), BigUint::from(8006u32));
    }

    #[test]
    fn passes_are_inverse_past_two_levels() {
        // Three or more levels exercise the carry from the last axis into
        // axis 0 during decode.
        for order in 3..=4 {
            for dimensions in 2..=3 {
                for d in 0..(1u32 << (order * dimensions)) {
                    let p = point_of(d, order, dimensions);
                    assert_eq!(distance_of(&p, order), BigUint::from(d));
                }
            }
        }
    }

    #[test]
    fn full_width_axes() {
        let mut words = [u64::MAX, 0, 1 << 63];
        let original = words;
        encode(&mut words, 64);
        decode(&mut words, 64);
        assert_eq!(words, original);
    }
}
