use super::{Intersects, Overlap};
use crate::algorithms::{project, ExtremeHints};
use crate::data::{Circle, PolygonConvex, Rectangle};
use crate::Scalar;

/// Circles intersect iff their centers are closer than the sum of their
/// radii. Touching circles do not intersect.
pub fn circle_circle<T>(a: &Circle<T>, b: &Circle<T>) -> bool
where
  T: Scalar,
{
  let r = a.radius() + b.radius();
  a.center().squared_euclidean_distance(b.center()) < r * r
}

/// Axis-aligned rectangles intersect iff they overlap on both axes.
///
/// The comparisons are strict: rectangles that only share an edge or a
/// corner do not intersect.
pub fn rectangle_rectangle<T>(a: &Rectangle<T>, b: &Rectangle<T>) -> bool
where
  T: Scalar,
{
  a.min()[0] < b.max()[0] // no gap in [b.max.x, a.min.x]
    && b.min()[0] < a.max()[0] // no gap in [a.max.x, b.min.x]
    && a.min()[1] < b.max()[1] // no gap in [b.max.y, a.min.y]
    && b.min()[1] < a.max()[1] // no gap in [a.max.y, b.min.y]
}

/// Support-search seeds for both polygons of a separating-axis test.
///
/// Keeping one `SatHints` per pair of colliding bodies and passing it to
/// [`convex_convex_with`] every frame lets each support search resume where
/// the previous frame's ended. Hints never change the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SatHints {
  pub a: ExtremeHints,
  pub b: ExtremeHints,
}

/// $O(n \cdot m)$ worst case, close to $O(n + m)$ with warm hints.
/// Separating-axis test for convex polygons.
///
/// The candidate axes are the outward normals of every edge of both
/// polygons. The polygons are disjoint iff their projections onto one of
/// these axes are disjoint. Projections that share only an endpoint are not
/// disjoint, so polygons touching along an edge or at a vertex intersect.
pub fn convex_convex<T>(a: &PolygonConvex<T>, b: &PolygonConvex<T>) -> bool
where
  T: Scalar,
{
  convex_convex_with(a, b, &mut SatHints::default())
}

/// [`convex_convex`] with caller-owned support-search seeds.
pub fn convex_convex_with<T>(
  a: &PolygonConvex<T>,
  b: &PolygonConvex<T>,
  hints: &mut SatHints,
) -> bool
where
  T: Scalar,
{
  let axes = a
    .iter_boundary_edges()
    .chain(b.iter_boundary_edges())
    .map(|edge| edge.outward_normal());
  for axis in axes {
    let (min_a, max_a) = project(a.points(), &axis, &mut hints.a);
    let (min_b, max_b) = project(b.points(), &axis, &mut hints.b);
    if min_a > max_b || min_b > max_a {
      log::trace!("separating axis {:?}", axis);
      return false;
    }
  }
  true
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<T> Intersects<&Circle<T>> for &Circle<T>
where
  T: Scalar,
{
  type Result = Overlap;
  fn intersect(self, other: &Circle<T>) -> Option<Overlap> {
    circle_circle(self, other).then_some(Overlap)
  }
}

impl<T> Intersects<&Rectangle<T>> for &Rectangle<T>
where
  T: Scalar,
{
  type Result = Overlap;
  fn intersect(self, other: &Rectangle<T>) -> Option<Overlap> {
    rectangle_rectangle(self, other).then_some(Overlap)
  }
}

impl<T> Intersects<&PolygonConvex<T>> for &PolygonConvex<T>
where
  T: Scalar,
{
  type Result = Overlap;
  fn intersect(self, other: &PolygonConvex<T>) -> Option<Overlap> {
    convex_convex(self, other).then_some(Overlap)
  }
}
