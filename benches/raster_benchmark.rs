#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterization kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_line");

    for len in [10, 100, 1_000, 10_000] {
        let p0 = Point::new(0, 0);
        let p1 = Point::new(len, len / 3);
        for alg in LineAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.tag(), len), &len, |b, _| {
                b.iter(|| rasterize_line(black_box(p0), black_box(p1), alg));
            });
        }
    }

    group.finish();
}

fn ellipse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_ellipse");

    for size in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| rasterize_ellipse(black_box(Point::new(0, 0)), black_box(Point::new(size, size / 2))));
        });
    }

    group.finish();
}

fn curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_curve");

    for n in [4, 8, 16] {
        let control: Vec<Point> = (0..n).map(|i| Point::new(i * 20, if i % 2 == 0 { 0 } else { 100 })).collect();
        for alg in CurveAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.tag(), n), &control, |b, control| {
                b.iter(|| evaluate_curve(black_box(control), alg));
            });
        }
    }

    group.finish();
}

fn clip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_line");
    let window = ClipWindow::from_corners(Point::new(0, 0), Point::new(100, 100))
        .expect("window should be non-degenerate");

    for alg in ClipAlgorithm::ALL {
        group.bench_function(alg.tag(), |b| {
            b.iter(|| {
                clip_segment(black_box(Point::new(-50, 20)), black_box(Point::new(150, 130)), &window, alg)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, ellipse_benchmark, curve_benchmark, clip_benchmark);
criterion_main!(benches);
