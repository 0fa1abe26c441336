use claims::debug_assert_ok;

use super::{Point, PointLocation};
use crate::{Error, Scalar};

/// Axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T> {
  min: Point<T, 2>,
  max: Point<T, 2>,
}

impl<T> Rectangle<T>
where
  T: Scalar,
{
  pub fn new(min: Point<T, 2>, max: Point<T, 2>) -> Result<Rectangle<T>, Error> {
    let rect = Rectangle { min, max };
    rect.validate()?;
    Ok(rect)
  }

  /// $O(1)$ Assume that `min <= max` on both axes.
  ///
  /// # Safety
  /// Inverted corners silently produce wrong intersection answers. Debug
  /// builds check the invariant.
  pub fn new_unchecked(min: Point<T, 2>, max: Point<T, 2>) -> Rectangle<T> {
    let rect = Rectangle { min, max };
    debug_assert_ok!(rect.validate());
    rect
  }

  /// Rectangle spanned by two opposite corners given in any order.
  pub fn from_corners(a: Point<T, 2>, b: Point<T, 2>) -> Result<Rectangle<T>, Error> {
    Rectangle::new(
      Point::new([a[0].min(b[0]), a[1].min(b[1])]),
      Point::new([a[0].max(b[0]), a[1].max(b[1])]),
    )
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.min.is_finite() || !self.max.is_finite() {
      return Err(Error::NonFinite);
    }
    if self.min[0] > self.max[0] || self.min[1] > self.max[1] {
      return Err(Error::InvertedBounds);
    }
    Ok(())
  }

  pub fn min(&self) -> &Point<T, 2> {
    &self.min
  }

  pub fn max(&self) -> &Point<T, 2> {
    &self.max
  }

  pub fn width(&self) -> T {
    self.max[0] - self.min[0]
  }

  pub fn height(&self) -> T {
    self.max[1] - self.min[1]
  }

  /// Corners in counter-clockwise order, starting at `min`.
  pub fn corners(&self) -> [Point<T, 2>; 4] {
    [
      self.min,
      Point::new([self.max[0], self.min[1]]),
      self.max,
      Point::new([self.min[0], self.max[1]]),
    ]
  }

  /// $O(1)$
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let outside = (0..2).any(|i| pt[i] < self.min[i] || pt[i] > self.max[i]);
    let on_edge = (0..2).any(|i| pt[i] == self.min[i] || pt[i] == self.max[i]);
    if outside {
      PointLocation::Outside
    } else if on_edge {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}
