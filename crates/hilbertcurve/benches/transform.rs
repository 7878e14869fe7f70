//! Benchmarks for distance -> point and point -> distance conversions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hilbertcurve::{BigUint, CurveConfig, distance_to_point, point_to_distance};

/// Benchmark configurations: (order, dimensions).
/// The last entries need distances wider than 128 bits.
fn bench_configs() -> Vec<(u32, u32)> {
    vec![
        // Machine-word sized
        (8, 2),
        (16, 2),
        (8, 3),
        (4, 8),
        // Wide distances
        (32, 8),
        (64, 4),
        (64, 16),
    ]
}

/// Midpoint of a curve's distance range.
fn midpoint(curve: &CurveConfig) -> BigUint {
    curve.max_distance() >> 1u32
}

/// Benchmark `distance_to_point` at the curve midpoint.
fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_to_point");

    for (order, dims) in bench_configs() {
        let curve = CurveConfig::new(order, dims).expect("valid curve");
        let mid = midpoint(&curve);

        group.bench_function(BenchmarkId::new("hilbert", format!("p{order}-n{dims}")), |b| {
            b.iter(|| distance_to_point(&curve, black_box(mid.clone())))
        });
    }

    group.finish();
}

/// Benchmark `point_to_distance` at the curve midpoint.
fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_to_distance");

    for (order, dims) in bench_configs() {
        let curve = CurveConfig::new(order, dims).expect("valid curve");
        let pt = distance_to_point(&curve, midpoint(&curve)).expect("in range");

        group.bench_function(BenchmarkId::new("hilbert", format!("p{order}-n{dims}")), |b| {
            b.iter(|| point_to_distance(&curve, black_box(&pt)))
        });
    }

    group.finish();
}

/// Benchmark scaling with order at a fixed dimension count.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for order in [4, 8, 16, 32, 64] {
        let curve = CurveConfig::new(order, 3).expect("valid curve");
        let mid = midpoint(&curve);
        group.bench_function(BenchmarkId::new("point", order), |b| {
            b.iter(|| distance_to_point(&curve, black_box(mid.clone())))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_point, bench_distance, bench_scaling);
}

pub use bench_defs::benches;
criterion_main!(benches);
