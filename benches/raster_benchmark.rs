#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line and circle rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_clip::prelude::*;

fn line_algorithms_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_algorithms");
    let options = RasterOptions::default();

    for length in [10.0, 100.0, 1_000.0] {
        // Shallow slope so every algorithm walks the same major axis.
        let line = Primitive::Line(Segment::from_coords(0.0, 0.0, length, length * 0.37));

        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_line()) {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), length),
                &line,
                |b, line| {
                    b.iter(|| rasterize(algorithm, black_box(line), &options).expect("line should rasterize"));
                },
            );
        }
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bresenham_circle");
    let options = RasterOptions::default();

    for radius in [8_u32, 64, 512] {
        let circle = Primitive::Circle { center: Point::new(100.0, 100.0), radius };

        group.bench_with_input(BenchmarkId::from_parameter(radius), &circle, |b, circle| {
            b.iter(|| {
                rasterize(Algorithm::BresenhamCircle, black_box(circle), &options)
                    .expect("circle should rasterize")
            });
        });
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_all");
    let options = RasterOptions::default();

    for count in [100, 1_000] {
        let jobs: Vec<(Algorithm, Primitive)> = (0..count)
            .map(|i| {
                let t = f64::from(i);
                (Algorithm::Wu, Primitive::Line(Segment::from_coords(t, 0.0, t + 50.0, t * 0.5)))
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &jobs, |b, jobs| {
            b.iter(|| rasterize_all(black_box(jobs), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, line_algorithms_benchmark, circle_benchmark, batch_benchmark);
criterion_main!(benches);
