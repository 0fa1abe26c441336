use super::{Intersects, RayHit};
use crate::data::{Circle, PolygonConvex, Ray, Rectangle};
use crate::Scalar;

/// First `t` in `[0, 1]` where the ray meets the circle.
///
/// Solves `|start + t·d - center|² = r²`. Of the two roots the smaller one
/// inside `[0, 1]` is returned. A ray that starts inside the circle
/// therefore reports where it leaves, or `None` if it ends inside too.
/// A degenerate ray hits at `t = 0` iff its start is inside or on the circle.
pub fn ray_circle<T>(ray: &Ray<T>, circle: &Circle<T>) -> Option<T>
where
  T: Scalar,
{
  let d = ray.direction();
  let cp = ray.start() - circle.center();
  let two = T::from_f64(2.0);
  let a = d.dot(&d);
  let b = two * d.dot(&cp);
  let c = cp.dot(&cp) - circle.radius() * circle.radius();

  if a == T::zero() {
    return (c <= T::zero()).then_some(T::zero());
  }

  let discriminant = b * b - T::from_f64(4.0) * a * c;
  if discriminant < T::zero() {
    return None;
  }
  let root = discriminant.sqrt();
  let t1 = (-b - root) / (two * a);
  let t2 = (-b + root) / (two * a);
  let unit = |t: T| t >= T::zero() && t <= T::one();
  [t1, t2].into_iter().find(|&t| unit(t))
}

/// First `t` in `[0, 1]` where the ray meets the rectangle.
///
/// Slab method. Each axis restricts `t` to the interval where the ray lies
/// between the rectangle's bounds on that axis. A ray parallel to an axis
/// is either outside that slab for every `t` (no hit) or inside it for every
/// `t` (no restriction). A ray starting inside the rectangle hits at `t = 0`.
pub fn ray_rectangle<T>(ray: &Ray<T>, rect: &Rectangle<T>) -> Option<T>
where
  T: Scalar,
{
  let d = ray.direction();
  let mut t_min = T::zero();
  let mut t_max = T::one();
  for axis in 0..2 {
    let start = ray.start()[axis];
    let (lo, hi) = (rect.min()[axis], rect.max()[axis]);
    if d[axis] == T::zero() {
      if start < lo || start > hi {
        return None;
      }
      continue;
    }
    let t_lo = (lo - start) / d[axis];
    let t_hi = (hi - start) / d[axis];
    let (enter, exit) = if t_lo <= t_hi { (t_lo, t_hi) } else { (t_hi, t_lo) };
    if enter > t_min {
      t_min = enter;
    }
    if exit < t_max {
      t_max = exit;
    }
    if t_min > t_max {
      return None;
    }
  }
  Some(t_min)
}

/// First `t` in `[0, 1]` where the ray meets the convex polygon.
///
/// Clips `[0, 1]` against the inner half-plane of every edge. For an edge
/// starting at `p` with outward normal `n`, a point `x` is inside iff
/// `n · (x - p) <= 0`. Edges the ray runs parallel to either reject it
/// outright or leave the interval alone.
pub fn ray_convex<T>(ray: &Ray<T>, poly: &PolygonConvex<T>) -> Option<T>
where
  T: Scalar,
{
  let d = ray.direction();
  let mut t_min = T::zero();
  let mut t_max = T::one();
  for edge in poly.iter_boundary_edges() {
    let normal = edge.outward_normal();
    let num = normal.dot(&(edge.src - ray.start()));
    let den = normal.dot(&d);
    if den == T::zero() {
      if num < T::zero() {
        return None;
      }
      continue;
    }
    let t = num / den;
    if den < T::zero() {
      // Entering the half-plane.
      if t > t_min {
        t_min = t;
      }
    } else if t < t_max {
      t_max = t;
    }
    if t_min > t_max {
      return None;
    }
  }
  Some(t_min)
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

macro_rules! ray_intersects {
  ($shape:ident, $cast:ident) => {
    impl<T> Intersects<&$shape<T>> for &Ray<T>
    where
      T: Scalar,
    {
      type Result = RayHit<T>;
      fn intersect(self, other: &$shape<T>) -> Option<RayHit<T>> {
        $cast(self, other).map(|t| RayHit { t })
      }
    }

    impl<T> Intersects<&Ray<T>> for &$shape<T>
    where
      T: Scalar,
    {
      type Result = RayHit<T>;
      fn intersect(self, other: &Ray<T>) -> Option<RayHit<T>> {
        other.intersect(self)
      }
    }
  };
}

ray_intersects!(Circle, ray_circle);
ray_intersects!(Rectangle, ray_rectangle);
ray_intersects!(PolygonConvex, ray_convex);
