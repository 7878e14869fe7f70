//! Command handlers for the `hilbert` CLI.
//!
//! Each handler returns the lines to print so `main` owns all output.

use anyhow::{Context, Result};
use hilbertcurve::{BigInt, CurveConfig, Point, distance_to_point, point_to_distance};

/// Map each distance to its point, one `DISTANCE -> [x0, ...]` line each.
pub fn points(curve: &CurveConfig, distances: &[BigInt]) -> Result<Vec<String>> {
    distances
        .iter()
        .map(|d| {
            let point = distance_to_point(curve, d.clone())
                .with_context(|| format!("cannot map distance on {curve}"))?;
            Ok(format!("{d} -> {point}"))
        })
        .collect()
}

/// Map a point to its distance as a `[x0, ...] -> DISTANCE` line.
pub fn distance(curve: &CurveConfig, coords: &[u64]) -> Result<String> {
    let d = point_to_distance(curve, coords)
        .with_context(|| format!("cannot map point on {curve}"))?;
    Ok(format!("{} -> {d}", Point::new(coords)))
}

/// Describe a curve and its derived constants.
pub fn info(curve: &CurveConfig) -> Vec<String> {
    vec![
        curve.to_string(),
        format!("total bits:   {}", curve.total_bits()),
        format!(
            "distances:    {}..={}",
            curve.min_distance(),
            curve.max_distance()
        ),
        format!(
            "coordinates:  {}..={}",
            curve.min_coord(),
            curve.max_coord()
        ),
        format!("points:       {}", curve.length()),
    ]
}
