//! Criterion benchmarks for the hull and the polygon metrics.
//! Focus sizes: n in {3, 10, 100, 1000} cloud points.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullcalc::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
use hullcalc::geom2::{convex_hull, GeomCfg, PolygonMetrics};

fn cloud(n: usize, seed: u64) -> Vec<hullcalc::Point> {
    let cfg = CloudCfg {
        count: n,
        ..CloudCfg::default()
    };
    draw_cloud(cfg, ReplayToken::new(seed))
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    let cfg = GeomCfg::default();
    for &n in &[3usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts, &cfg);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("metrics", n), &n, |b, &n| {
            // hull sizes grow slowly with n; metrics include the O(h²) farthest-pair scan
            let hull = convex_hull(&cloud(n, 44), &cfg).unwrap_or_default();
            b.iter(|| PolygonMetrics::of(&hull))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
