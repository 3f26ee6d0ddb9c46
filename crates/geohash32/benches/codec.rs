//! Benchmarks for geohash encoding, decoding and neighbour search.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geohash32::{Coordinate, Direction};

/// Precisions exercised by the encode and decode benchmarks.
const PRECISIONS: [usize; 4] = [1, 6, 9, 12];

/// Benchmark encoding a point at explicit precisions and with inference.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let point = Coordinate::new(57.648, 10.410);

    for precision in PRECISIONS {
        group.bench_function(BenchmarkId::new("explicit", precision), |b| {
            b.iter(|| geohash32::encode(black_box(point), Some(precision)))
        });
    }
    group.bench_function("inferred", |b| {
        b.iter(|| geohash32::encode(black_box(point), None))
    });

    group.finish();
}

/// Benchmark decoding geohashes of increasing length.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let point = Coordinate::new(-25.38262, -49.26561);

    for precision in PRECISIONS {
        let hash = geohash32::encode(point, Some(precision)).expect("valid point");
        group.bench_function(BenchmarkId::new("bounds", precision), |b| {
            b.iter(|| geohash32::bounds(black_box(&hash)))
        });
        group.bench_function(BenchmarkId::new("decode", precision), |b| {
            b.iter(|| geohash32::decode(black_box(&hash)))
        });
    }

    group.finish();
}

/// Benchmark neighbour lookups, including the worst-case border recursion.
fn bench_neighbours(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbours");

    for hash in ["u4pruy", "ezzz", "7zzzzzzzzzzz"] {
        group.bench_function(BenchmarkId::new("adjacent", hash), |b| {
            b.iter(|| geohash32::adjacent(black_box(hash), Direction::N))
        });
        group.bench_function(BenchmarkId::new("all", hash), |b| {
            b.iter(|| geohash32::neighbours(black_box(hash)))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_encode, bench_decode, bench_neighbours);
}

pub use bench_defs::benches;
criterion_main!(benches);
