use claims::debug_assert_ok;

use super::{Point, PointLocation, Rectangle, Vector};
use crate::{Error, Scalar};

/// Solid disc given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T> {
  center: Point<T, 2>,
  radius: T,
}

impl<T> Circle<T>
where
  T: Scalar,
{
  pub fn new(center: Point<T, 2>, radius: T) -> Result<Circle<T>, Error> {
    let circle = Circle { center, radius };
    circle.validate()?;
    Ok(circle)
  }

  /// $O(1)$ Assume that the radius is finite and non-negative.
  ///
  /// # Safety
  /// A negative or non-finite radius silently produces wrong intersection
  /// answers. Debug builds check the invariant.
  pub fn new_unchecked(center: Point<T, 2>, radius: T) -> Circle<T> {
    let circle = Circle { center, radius };
    debug_assert_ok!(circle.validate());
    circle
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.center.is_finite() || !self.radius.is_finite() {
      return Err(Error::NonFinite);
    }
    if self.radius < T::zero() {
      return Err(Error::NegativeRadius);
    }
    Ok(())
  }

  pub fn center(&self) -> &Point<T, 2> {
    &self.center
  }

  pub fn radius(&self) -> T {
    self.radius
  }

  /// $O(1)$
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let dist = self.center.squared_euclidean_distance(pt);
    let r2 = self.radius * self.radius;
    if dist < r2 {
      PointLocation::Inside
    } else if dist == r2 {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    }
  }

  pub fn bounding_box(&self) -> Rectangle<T> {
    let extent = Vector([self.radius, self.radius]);
    Rectangle::new_unchecked(&self.center - &extent, &self.center + &extent)
  }
}
