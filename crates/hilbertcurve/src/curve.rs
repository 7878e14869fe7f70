//! Distance <-> point conversion for a configured curve.

use num_bigint::{BigInt, BigUint};
use smallvec::SmallVec;

use crate::{
    config::CurveConfig,
    error::{Error, Result},
    point::Point,
    transform, transpose,
};

/// Map `distance` along the curve to its lattice point.
///
/// Accepts any integer type convertible to [`BigInt`], so negative input is
/// rejected rather than unrepresentable. Fails with [`Error::OutOfRange`]
/// unless `0 <= distance <= config.max_distance()`.
pub fn distance_to_point(config: &CurveConfig, distance: impl Into<BigInt>) -> Result<Point> {
    let distance = distance.into();
    if !config.contains_distance(&distance) {
        return Err(Error::out_of_range(
            "distance",
            &distance,
            format!("0..={}", config.max_distance()),
        ));
    }

    let (_, magnitude) = distance.into_parts();
    let mut words = transpose::unpack(&magnitude, config.order(), config.dimensions())?;
    transform::decode(&mut words, config.order());
    Ok(Point(words))
}

/// Map a lattice point to its distance along the curve.
///
/// `point` must have exactly `config.dimensions()` coordinates, each at most
/// `config.max_coord()`; otherwise [`Error::OutOfRange`] is returned and no
/// transform work is done.
pub fn point_to_distance(config: &CurveConfig, point: &[u64]) -> Result<BigUint> {
    if point.len() != config.dimensions() as usize {
        return Err(Error::out_of_range(
            "point dimension",
            point.len(),
            format!("exactly {}", config.dimensions()),
        ));
    }
    if let Some((axis, &coord)) = point
        .iter()
        .enumerate()
        .find(|&(_, &c)| c > config.max_coord())
    {
        return Err(Error::out_of_range(
            "coordinate",
            coord,
            format!("0..={} on axis {axis}", config.max_coord()),
        ));
    }

    let mut words: SmallVec<[u64; 8]> = SmallVec::from_slice(point);
    transform::encode(&mut words, config.order());
    Ok(transpose::pack(&words, config.order()))
}

/// Map many distances to points, in input order.
///
/// Stops at the first invalid distance and returns its error.
pub fn points_from_distances<I>(config: &CurveConfig, distances: I) -> Result<Vec<Point>>
where
    I: IntoIterator,
    I::Item: Into<BigInt>,
{
    distances
        .into_iter()
        .map(|d| distance_to_point(config, d))
        .collect()
}

/// Map many points to distances, in input order.
///
/// Stops at the first invalid point and returns its error.
pub fn distances_from_points<I>(config: &CurveConfig, points: I) -> Result<Vec<BigUint>>
where
    I: IntoIterator,
    I::Item: AsRef<[u64]>,
{
    points
        .into_iter()
        .map(|p| point_to_distance(config, p.as_ref()))
        .collect()
}
