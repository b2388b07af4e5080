//! Benchmarks pour la conversion LLH → ECEF

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use geodesy::Geodetic;

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodetic_to_ecef");

    group.bench_function("single", |b| {
        b.iter(|| {
            let geo = Geodetic::from_degrees(black_box(45.0), black_box(5.72), black_box(0.2));
            black_box(geo.to_ecef())
        })
    });

    group.finish();
}

fn bench_latitude_sweep(c: &mut Criterion) {
    let points: Vec<Geodetic> = (0..=1800)
        .map(|i| Geodetic::from_degrees(-90.0 + i as f64 * 0.1, 2.35, 0.1))
        .collect();

    let mut group = c.benchmark_group("geodetic_to_ecef");
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("latitude_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for geo in &points {
                acc += black_box(geo.to_ecef()).z_km;
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_point, bench_latitude_sweep);
criterion_main!(benches);
