use claims::debug_assert_ok;
use num_traits::*;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::f64::consts::TAU;

use super::EdgeIter;
use crate::data::{Point, PointLocation, Rectangle};
use crate::{Error, Orientation, Scalar};

/// Strictly convex polygon with counter-clockwise winding.
///
/// The boundary is implicitly closed: the last vertex connects back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConvex<T> {
  points: Vec<Point<T, 2>>,
}

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: Scalar,
{
  /// $O(n)$ Validate the vertices before accepting them.
  pub fn new(points: Vec<Point<T, 2>>) -> Result<PolygonConvex<T>, Error> {
    let convex = PolygonConvex { points };
    convex.validate()?;
    Ok(convex)
  }

  /// $O(1)$ Assume that the vertices form a convex polygon.
  ///
  /// # Safety
  /// The input has to be strictly convex and counter-clockwise, ie. no
  /// vertices are allowed to be concave or colinear. Violations are not
  /// detected in release builds and make every intersection test on the
  /// polygon silently wrong.
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> PolygonConvex<T> {
    let convex = PolygonConvex { points };
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.points.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    if !self.points.iter().all(Point::is_finite) {
      return Err(Error::NonFinite);
    }
    if self.iter_boundary_edges().any(|edge| edge.src == edge.dst) {
      return Err(Error::DuplicatePoints);
    }
    if self.signed_area_2x() < T::zero() {
      return Err(Error::ClockWiseViolation);
    }
    for i in 0..n {
      let prev = &self.points[(i + n - 1) % n];
      let next = &self.points[(i + 1) % n];
      if Point::orient(prev, &self.points[i], next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    // Every turn is a left turn. The boundary is convex iff it winds around
    // exactly once, ie. the edge direction sweeps past angle zero once.
    let edges: Vec<_> = self.iter_boundary_edges().map(|e| e.vector()).collect();
    let windings = (0..n)
      .filter(|&i| edges[i][1] < T::zero() && edges[(i + 1) % n][1] >= T::zero())
      .count();
    if windings != 1 {
      return Err(Error::ConvexViolation);
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      points: &self.points,
      position: 0,
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_f64(2.0)
  }

  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p[0] * q[1] - q[0] * p[1]
      })
      .sum()
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let mut location = PointLocation::Inside;
    for edge in self.iter_boundary_edges() {
      match Point::orient(edge.src, edge.dst, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => location = PointLocation::OnBoundary,
        Orientation::CounterClockWise => {}
      }
    }
    location
  }

  /// $O(n)$ Smallest axis-aligned rectangle containing every vertex.
  pub fn bounding_box(&self) -> Rectangle<T> {
    let first = self.points[0];
    let (min, max) = self.points[1..]
      .iter()
      .fold((first, first), |(min, max), pt| {
        (
          Point::new([min[0].min(pt[0]), min[1].min(pt[1])]),
          Point::new([max[0].max(pt[0]), max[1].max(pt[1])]),
        )
      });
    Rectangle::new_unchecked(min, max)
  }

  /// Sample a random convex polygon with at most `n` vertices on the unit
  /// circle.
  ///
  /// Angles closer together than the scalar type can resolve are merged, so
  /// the result may have fewer than `n` vertices (but always at least 3).
  pub fn random<R>(n: usize, rng: &mut R) -> PolygonConvex<T>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let min_gap = (T::epsilon().sqrt() * T::from_f64(64.0))
      .to_f64()
      .unwrap_or(1e-3);
    let mut angles: Vec<OrderedFloat<f64>> = (0..n)
      .map(|_| OrderedFloat(rng.gen_range(0.0..TAU)))
      .collect();
    angles.sort_unstable();
    let mut kept: Vec<f64> = Vec::with_capacity(n);
    for angle in angles.into_iter().map(OrderedFloat::into_inner) {
      match kept.last() {
        Some(&prev) if angle - prev < min_gap => {}
        _ => kept.push(angle),
      }
    }
    while kept.len() > 1 && kept[0] + TAU - kept[kept.len() - 1] < min_gap {
      kept.pop();
    }
    let points = kept
      .into_iter()
      .map(|angle| Point::new([T::from_f64(angle.cos()), T::from_f64(angle.sin())]))
      .collect();
    match PolygonConvex::new(points) {
      // Too few distinct angles survived. Give up and try again.
      Err(_) => Self::random(n, rng),
      Ok(p) => p,
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T> TryFrom<Rectangle<T>> for PolygonConvex<T>
where
  T: Scalar,
{
  type Error = Error;
  fn try_from(rect: Rectangle<T>) -> Result<PolygonConvex<T>, Error> {
    PolygonConvex::new(rect.corners().to_vec())
  }
}

impl<T> Distribution<PolygonConvex<T>> for Standard
where
  T: Scalar,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PolygonConvex<T> {
    PolygonConvex::random(16, rng)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;

  use crate::testing::*;
  use proptest::prelude::*;
  use rand::SeedableRng;

  fn square(points: [(f64, f64); 4]) -> Vec<Point<f64, 2>> {
    points.iter().map(|&pt| Point::from(pt)).collect()
  }

  proptest! {
    #[test]
    fn all_random_convex_polygons_are_valid(poly in any_convex()) {
      prop_assert_eq!(poly.validate().err(), None)
    }

    #[test]
    fn random_convex_f32_are_valid(seed in any::<u64>()) {
      let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
      let poly: PolygonConvex<f32> = PolygonConvex::random(64, rng);
      prop_assert_eq!(poly.validate().err(), None)
    }

    #[test]
    fn vertices_are_on_boundary(poly in any_convex()) {
      for pt in poly.points() {
        prop_assert_eq!(poly.locate(pt), PointLocation::OnBoundary)
      }
    }

    #[test]
    fn bounding_box_contains_vertices(poly in any_convex()) {
      let bbox = poly.bounding_box();
      for pt in poly.points() {
        prop_assert_ne!(bbox.locate(pt), PointLocation::Outside)
      }
    }

    #[test]
    fn rectangles_convert(rect in any_rectangle()) {
      prop_assume!(rect.width() > 0.0 && rect.height() > 0.0);
      let poly = PolygonConvex::try_from(rect);
      prop_assert!(poly.is_ok())
    }
  }

  #[test]
  fn unit_square() -> Result<(), Error> {
    let poly = PolygonConvex::new(square([(0., 0.), (1., 0.), (1., 1.), (0., 1.)]))?;
    assert_eq!(poly.signed_area(), 1.0);
    assert_eq!(poly.iter_boundary_edges().len(), 4);
    assert_eq!(poly.locate(&Point::new([0.5, 0.5])), PointLocation::Inside);
    assert_eq!(poly.locate(&Point::new([1.0, 0.5])), PointLocation::OnBoundary);
    assert_eq!(poly.locate(&Point::new([2.0, 0.5])), PointLocation::Outside);
    Ok(())
  }

  #[test]
  fn closing_edge() -> Result<(), Error> {
    let poly = PolygonConvex::new(square([(0., 0.), (1., 0.), (1., 1.), (0., 1.)]))?;
    let last = poly.iter_boundary_edges().last();
    assert_eq!(
      last.map(|edge| (*edge.src, *edge.dst)),
      Some((Point::new([0.0, 1.0]), Point::new([0.0, 0.0])))
    );
    Ok(())
  }

  #[test]
  fn rejects_clockwise() {
    let poly = PolygonConvex::new(square([(0., 0.), (0., 1.), (1., 1.), (1., 0.)]));
    assert_eq!(poly.err(), Some(Error::ClockWiseViolation));
  }

  #[test]
  fn rejects_concave() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([1.0, 0.5]),
      Point::new([2.0, 2.0]),
      Point::new([0.0, 2.0]),
    ];
    assert_eq!(PolygonConvex::new(pts).err(), Some(Error::ConvexViolation));
  }

  #[test]
  fn rejects_colinear() {
    let pts = square([(0., 0.), (1., 0.), (2., 0.), (1., 1.)]);
    assert_eq!(PolygonConvex::new(pts).err(), Some(Error::ConvexViolation));
  }

  #[test]
  fn rejects_duplicates() {
    let pts = square([(0., 0.), (1., 0.), (1., 0.), (0., 1.)]);
    assert_eq!(PolygonConvex::new(pts).err(), Some(Error::DuplicatePoints));
  }

  #[test]
  fn rejects_too_few() {
    let pts = vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
    assert_eq!(
      PolygonConvex::new(pts).err(),
      Some(Error::InsufficientVertices)
    );
  }

  // A pentagram turns left at every vertex but winds around twice.
  #[test]
  fn rejects_pentagram() {
    let pts = (0..5i32)
      .map(|i| {
        let angle = TAU * <f64 as From<i32>>::from(i * 2) / 5.0;
        Point::new([angle.cos(), angle.sin()])
      })
      .collect();
    assert_eq!(PolygonConvex::new(pts).err(), Some(Error::ConvexViolation));
  }
}
