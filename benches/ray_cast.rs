use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rcollide::data::{Circle, Point, PolygonConvex, Ray, Rectangle};
use rcollide::{ray_circle, ray_convex, ray_rectangle};

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  let rays: Vec<Ray<f64>> = (0..256)
    .map(|_| {
      let start: Point<f64, 2> = rng.gen();
      let end: Point<f64, 2> = rng.gen();
      Ray::new_unchecked(start, end)
    })
    .collect();
  let circle = Circle::new_unchecked(Point::new([0.5, 0.5]), 0.25);
  let rect = Rectangle::new_unchecked(Point::new([0.25, 0.25]), Point::new([0.75, 0.75]));
  let poly = PolygonConvex::<f64>::random(32, &mut rng);

  c.bench_function("ray_circle", |b| {
    b.iter(|| rays.iter().filter_map(|ray| ray_circle(ray, &circle)).count())
  });
  c.bench_function("ray_rectangle", |b| {
    b.iter(|| rays.iter().filter_map(|ray| ray_rectangle(ray, &rect)).count())
  });
  c.bench_function("ray_convex(32)", |b| {
    b.iter(|| rays.iter().filter_map(|ray| ray_convex(ray, &poly)).count())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
