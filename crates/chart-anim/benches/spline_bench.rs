use chart_anim::spline::segment_control_points;
use chart_anim::{coefficients, Point, SplineOptions, SplineType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, (i as f64 * 0.05).sin() * 50.0 + (i % 7) as f64)).collect()
}

fn bench_coefficients(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline_coefficients");
    for &n in &[100usize, 1_000, 10_000] {
        let points = gen_points(n);
        for ty in [SplineType::Natural, SplineType::Monotonic, SplineType::Cardinal, SplineType::Clamped] {
            let opts = SplineOptions::new(ty);
            group.bench_with_input(BenchmarkId::new(format!("{ty:?}"), n), &points, |b, pts| {
                b.iter(|| {
                    let coefs = coefficients(black_box(pts), &opts);
                    black_box(segment_control_points(pts, &coefs, &opts));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_coefficients);
criterion_main!(benches);
