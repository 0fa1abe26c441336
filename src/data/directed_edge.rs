use super::Point;
use super::Vector;

use std::ops::Neg;
use std::ops::Sub;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, PartialEq)]
// Directed edge from A to B, including A and excluding B.
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T, const N: usize> DirectedEdge<'_, T, N>
where
  T: Sub<T, Output = T> + Clone,
{
  pub fn vector(&self) -> Vector<T, N> {
    self.dst - self.src
  }
}

impl<T> DirectedEdge<'_, T, 2>
where
  T: Sub<T, Output = T> + Neg<Output = T> + Clone,
{
  /// Normal pointing away from the interior of a counter-clockwise polygon:
  /// the edge vector rotated by 90° clockwise, `(dy, -dx)`.
  ///
  /// Not normalized.
  pub fn outward_normal(&self) -> Vector<T, 2> {
    -self.vector().perpendicular()
  }
}
