//! Criterion benchmarks for the point classifiers.
//! Focus sizes: 256 points; sectors in {4, 16, 64}.

use circuit_collide::ellipse::{classify_ellipse, Annulus};
use circuit_collide::geom::Point2;
use circuit_collide::rand::{random_points, Bounds2, ReplayToken};
use circuit_collide::sector::{classify_sectors, TrackBoundary};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

/// Circular two-rail track with `n` sectors (closed ring of `n + 1` points).
fn ring_track(n: usize) -> TrackBoundary {
    let rail = |r: f64| -> Vec<Point2> {
        (0..=n)
            .map(|k| {
                let t = std::f64::consts::TAU * (k % n) as f64 / n as f64;
                Point2::new(300.0 + r * t.cos(), 300.0 + r * t.sin())
            })
            .collect()
    };
    TrackBoundary::new(rail(250.0), rail(150.0)).expect("equal rails")
}

fn bench_classify(c: &mut Criterion) {
    let bounds = Bounds2::new(Point2::new(0.0, -600.0), Point2::new(600.0, 0.0));
    let mut group = c.benchmark_group("classify");
    let ann = Annulus::new(Point2::new(300.0, 300.0), (250.0, 200.0), (150.0, 100.0), 5.0, 20.0);
    group.bench_function("ellipse/256", |b| {
        b.iter_batched(
            || random_points(bounds, 256, ReplayToken { seed: 11, index: 0 }),
            |pts| {
                let _res = classify_ellipse(&pts, &ann);
            },
            BatchSize::SmallInput,
        )
    });
    for &n in &[4usize, 16, 64] {
        let track = ring_track(n);
        group.bench_with_input(BenchmarkId::new("sectors", n), &n, |b, _| {
            b.iter_batched(
                || random_points(bounds, 256, ReplayToken { seed: 12, index: 0 }),
                |pts| {
                    let _res = classify_sectors(&pts, &track);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
