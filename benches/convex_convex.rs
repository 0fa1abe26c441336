use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rcollide::data::{Point, PolygonConvex};
use rcollide::{convex_convex, convex_convex_with, SatHints};

fn shifted(poly: &PolygonConvex<f64>, dx: f64) -> PolygonConvex<f64> {
  PolygonConvex::new_unchecked(
    poly
      .points()
      .iter()
      .map(|pt| Point::new([pt[0] + dx, pt[1]]))
      .collect(),
  )
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  let mut group = c.benchmark_group("convex_convex");
  for n in [8, 64, 512] {
    let a = PolygonConvex::<f64>::random(n, &mut rng);
    let b = shifted(&PolygonConvex::random(n, &mut rng), 1.5);
    group.bench_with_input(BenchmarkId::new("cold", n), &(&a, &b), |bench, (a, b)| {
      bench.iter(|| convex_convex(a, b))
    });
    group.bench_with_input(BenchmarkId::new("warm", n), &(&a, &b), |bench, (a, b)| {
      let mut hints = SatHints::default();
      bench.iter(|| convex_convex_with(a, b, &mut hints))
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
