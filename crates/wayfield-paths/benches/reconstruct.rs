use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfield_core::{GridLayout, Neighborhood, Point};
use wayfield_paths::{DistanceMap, Drift, NoiseMap, Router};

// Same stride as a 162-wide map with a one-tile border.
fn layout() -> GridLayout {
    GridLayout::with_stride(160, 160, 162, 163).expect("valid layout")
}

fn open_field(layout: GridLayout, source: Point) -> DistanceMap {
    DistanceMap::from_fn(layout, |p| 1 + p.chebyshev(source))
}

fn bench_path(c: &mut Criterion) {
    let layout = layout();
    let src = Point::new(10, 10);
    let field = open_field(layout, src);
    let mut router = Router::new();
    let mut group = c.benchmark_group("reconstruct.path");
    for len in [16, 64, 149] {
        let dst = Point::new(10 + len, 10 + len / 3);
        group.bench_with_input(BenchmarkId::from_parameter(len), &dst, |b, &dst| {
            b.iter(|| {
                let path = router
                    .path(&field, &layout, src, black_box(dst), Neighborhood::Eight)
                    .map(|p| p.len());
                black_box(path)
            })
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let layout = layout();
    let src = Point::new(10, 10);
    let field = open_field(layout, src);
    let mut router = Router::new();
    c.bench_function("reconstruct.range/far", |b| {
        b.iter(|| {
            black_box(router.closest_within_range(
                &field,
                &layout,
                src,
                black_box(Point::new(150, 120)),
                Neighborhood::Four,
                8,
            ))
        })
    });
}

fn bench_water(c: &mut Criterion) {
    let layout = layout();
    let src = Point::new(10, 10);
    let field = open_field(layout, src);
    let mut rng = StdRng::seed_from_u64(3);
    let noise = NoiseMap::generate(layout, &mut rng);
    let mut router = Router::new();
    c.bench_function("reconstruct.water/flotsam", |b| {
        b.iter(|| {
            let path = router
                .water_path(
                    &field,
                    &layout,
                    black_box(Point::new(120, 140)),
                    Drift::Flotsam(&noise),
                    &mut rng,
                )
                .map(|p| p.len());
            black_box(path)
        })
    });
}

criterion_group!(benches, bench_path, bench_range, bench_water);
criterion_main!(benches);
