use std::f64::consts::TAU;

use criterion::{BatchSize, Criterion, criterion_group};
use greiner::{Tolerance, cartesian::Polygon};
use rand::Rng;

const TOTAL_VERTICES: usize = 1000;

/// Returns a random polygon whose vertices are sorted by angle around its center, so it never
/// crosses itself.
fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();
    let center = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];

    let mut angles = (0..TOTAL_VERTICES)
        .map(|_| rng.random_range(0.0..TAU))
        .collect::<Vec<f64>>();

    angles.sort_by(f64::total_cmp);
    angles.dedup();

    angles
        .into_iter()
        .map(|angle| {
            let radius = rng.random_range(0.5..1.0);
            [
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            ]
        })
        .collect::<Vec<_>>()
        .into()
}

fn random_operands() -> [Polygon<f64>; 2] {
    [random_polygon(), random_polygon()]
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("union", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.or(clip, Tolerance::default()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("difference", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.not(clip, Tolerance::default()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("intersection", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.and(clip, Tolerance::default()),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, large_polygons);
