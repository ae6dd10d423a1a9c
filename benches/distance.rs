#[macro_use]
extern crate criterion;

extern crate reception_map;

use criterion::Criterion;
use reception_map::haversine::haversine_distance;
use reception_map::scan::{distances, farthest};
use reception_map::{distance, DistanceUnit, GeoPoint};

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = GeoPoint::new(51.301389, 6.953333);
    let point2 = GeoPoint::new(50.823194, 6.186389);
    c.bench_function("law of cosines", |b| b.iter(|| distance(&point1, &point2, DistanceUnit::Kilometers)));
    c.bench_function("haversine", |b| b.iter(|| haversine_distance(&point1, &point2, DistanceUnit::Kilometers)));

    let track = (0..10_000)
        .map(|i| GeoPoint::new(44. + (i as f64) * 1e-4, -81. - (i as f64) * 2e-4))
        .collect::<Vec<_>>();
    c.bench_function("farthest of 10k", |b| b.iter(|| farthest(&point1, &track, DistanceUnit::Kilometers)));
    c.bench_function("distances of 10k", |b| b.iter(|| distances(&point1, &track, DistanceUnit::Kilometers)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
