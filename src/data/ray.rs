use claims::debug_assert_ok;

use super::{Point, Vector};
use crate::{Error, Scalar};

/// Bounded ray cast from `start` to `end`.
///
/// Positions along the ray are given by a parameter `t`: `t = 0` is `start`,
/// `t = 1` is `end`. There are no infinite rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
  start: Point<T, 2>,
  end: Point<T, 2>,
}

impl<T> Ray<T>
where
  T: Scalar,
{
  pub fn new(start: Point<T, 2>, end: Point<T, 2>) -> Result<Ray<T>, Error> {
    let ray = Ray { start, end };
    ray.validate()?;
    Ok(ray)
  }

  /// $O(1)$ Assume that both endpoints are finite.
  ///
  /// # Safety
  /// A NaN or infinite coordinate makes every ray cast report made-up hits.
  /// Debug builds check the invariant.
  pub fn new_unchecked(start: Point<T, 2>, end: Point<T, 2>) -> Ray<T> {
    let ray = Ray { start, end };
    debug_assert_ok!(ray.validate());
    ray
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.start.is_finite() || !self.end.is_finite() {
      return Err(Error::NonFinite);
    }
    Ok(())
  }

  pub fn start(&self) -> &Point<T, 2> {
    &self.start
  }

  pub fn end(&self) -> &Point<T, 2> {
    &self.end
  }

  /// `end - start`
  pub fn direction(&self) -> Vector<T, 2> {
    &self.end - &self.start
  }

  /// Point at parameter `t`: `start + t * (end - start)`.
  pub fn point_at(&self, t: T) -> Point<T, 2> {
    self.start + self.direction() * t
  }

  /// A ray whose start and end coincide.
  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }
}
