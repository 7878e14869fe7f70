//! Validated curve parameters and the constants derived from them.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Smallest supported order (bits per axis).
pub const MIN_ORDER: u32 = 1;
/// Largest supported order. Coordinates are stored as `u64`.
pub const MAX_ORDER: u32 = u64::BITS;
/// Smallest supported number of dimensions.
pub const MIN_DIMENSIONS: u32 = 2;

/// An order-`p`, `n`-dimensional Hilbert curve.
///
/// Construct once and pass by reference to [`crate::distance_to_point`] and
/// [`crate::point_to_distance`]. The value is immutable, so it can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveConfig {
    /// Bits per axis (`p`).
    order: u32,
    /// Number of axes (`n`).
    dimensions: u32,
    /// Largest valid distance, `2^(n*p) - 1`.
    max_distance: BigUint,
}

impl CurveConfig {
    /// Validate `order` and `dimensions` and derive the curve constants.
    ///
    /// Fails with [`Error::InvalidConfig`] when `order` is outside
    /// `1..=64` or `dimensions` is below 2.
    pub fn new(order: u32, dimensions: u32) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidConfig(format!(
                "order must be at least {MIN_ORDER}, got {order}"
            )));
        }
        if order > MAX_ORDER {
            return Err(Error::InvalidConfig(format!(
                "order must be at most {MAX_ORDER}, got {order}"
            )));
        }
        if dimensions < MIN_DIMENSIONS {
            return Err(Error::InvalidConfig(format!(
                "dimensions must be at least {MIN_DIMENSIONS}, got {dimensions}"
            )));
        }

        let total_bits = u64::from(order) * u64::from(dimensions);
        let max_distance = (BigUint::one() << total_bits) - BigUint::one();
        Ok(Self {
            order,
            dimensions,
            max_distance,
        })
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of axes.
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Width of a packed distance in bits, `n * p`.
    pub fn total_bits(&self) -> u64 {
        u64::from(self.order) * u64::from(self.dimensions)
    }

    /// Number of points on the curve, `2^(n*p)`.
    pub fn length(&self) -> BigUint {
        &self.max_distance + BigUint::one()
    }

    /// Smallest distance along the curve. Always zero.
    pub fn min_distance(&self) -> BigUint {
        BigUint::zero()
    }

    /// Largest distance along the curve.
    pub fn max_distance(&self) -> &BigUint {
        &self.max_distance
    }

    /// Smallest coordinate on any axis. Always zero.
    pub fn min_coord(&self) -> u64 {
        0
    }

    /// Largest coordinate on any axis, `2^p - 1`.
    pub fn max_coord(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.order)
    }

    /// Whether `distance` lies in `[0, max_distance]`.
    pub fn contains_distance(&self, distance: &BigInt) -> bool {
        distance.magnitude() <= &self.max_distance && distance.sign() != Sign::Minus
    }

    /// Whether `coords` has one coordinate per axis, each within range.
    pub fn contains_point(&self, coords: &[u64]) -> bool {
        coords.len() == self.dimensions as usize && coords.iter().all(|&c| c <= self.max_coord())
    }
}

impl fmt::Display for CurveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HilbertCurve(p={}, n={})", self.order, self.dimensions)
    }
}
