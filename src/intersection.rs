//! Intersection tests.
//!
//! Every test is a pure function of its arguments. The free functions answer
//! with `bool` or `Option<T>`; the [`Intersects`] trait wraps the same
//! answers as `Option<Overlap>` and `Option<RayHit<T>>`.
use crate::data::{Point, Ray};
use crate::Scalar;

mod rays;
mod shapes;

pub use rays::{ray_circle, ray_convex, ray_rectangle};
pub use shapes::{circle_circle, convex_convex, convex_convex_with, rectangle_rectangle, SatHints};

pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

/// Two solid shapes share interior points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap;

/// Where a ray cast reports its hit.
///
/// For rectangles and convex polygons this is where the ray first enters
/// the shape, `t = 0` when it starts inside. For circles it is the smaller
/// root of the ray's quadratic in `[0, 1]`, which is the exit point when the
/// ray starts inside; see [`ray_circle`](crate::ray_circle).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RayHit<T> {
  /// Ray parameter in `[0, 1]`.
  pub t: T,
}

impl<T> RayHit<T>
where
  T: Scalar,
{
  pub fn point(&self, ray: &Ray<T>) -> Point<T, 2> {
    ray.point_at(self.t)
  }
}
