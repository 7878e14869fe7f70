//! Conversion between distances along an N‑dimensional Hilbert curve and the
//! lattice points they visit.
//!
//! A curve of order `p` in `n` dimensions covers the grid `[0, 2^p)^n`.
//! Distances are arbitrary precision ([`num_bigint::BigUint`]) so that
//! `n * p` may exceed any machine word; coordinates are `u64`.
//!
//! ```
//! use hilbertcurve::{CurveConfig, distance_to_point, point_to_distance};
//! use num_bigint::BigUint;
//!
//! let curve = CurveConfig::new(2, 3)?;
//! let point = distance_to_point(&curve, 35)?;
//! assert_eq!(point.as_slice(), &[2, 3, 0]);
//! assert_eq!(point_to_distance(&curve, &point)?, BigUint::from(35u32));
//! # Ok::<(), hilbertcurve::error::Error>(())
//! ```

/// Validated curve parameters.
pub mod config;
/// Public distance/point conversions.
mod curve;
/// Error types used across the crate.
pub mod error;
/// N‑dimensional points and helpers.
pub mod point;
/// Hilbert encode/decode passes over transpose-form words.
#[doc(hidden)]
pub mod transform;
/// Packing between integers and per-axis bit planes.
#[doc(hidden)]
pub mod transpose;

pub use num_bigint::{BigInt, BigUint};

pub use crate::{
    config::CurveConfig,
    curve::{distance_to_point, distances_from_points, point_to_distance, points_from_distances},
    point::Point,
};
