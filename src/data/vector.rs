use array_init::array_init;
use num_traits::{Float, NumOps, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;

/// Displacement between two points.
///
/// Every operation returns a fresh vector; none of them mutate their inputs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize = 2>(pub [T; N]);

impl<T, const N: usize> Distribution<Vector<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T, N> {
    Vector(array_init(|_| rng.gen()))
  }
}

impl<T, const N: usize> Vector<T, N>
where
  T: Clone,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T
  where
    T: Zero + NumOps,
  {
    let mut total = T::zero();
    for i in 0..N {
      total = total + self.0[i].clone() * other.0[i].clone();
    }
    total
  }

  pub fn squared_magnitude(&self) -> T
  where
    T: Zero + NumOps,
  {
    self.dot(self)
  }
}

impl<T: Float, const N: usize> Vector<T, N> {
  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Unit vector pointing in the same direction.
  ///
  /// The zero vector has no direction; normalizing it divides by zero and
  /// yields non-finite components. Callers must rule it out.
  pub fn normalize(&self) -> Vector<T, N> {
    *self / self.magnitude()
  }
}

impl<T> Vector<T, 2> {
  /// Rotate by 90° counter-clockwise: `(x, y) -> (-y, x)`.
  pub fn perpendicular(&self) -> Vector<T, 2>
  where
    T: Clone + Neg<Output = T>,
  {
    Vector([-self.0[1].clone(), self.0[0].clone()])
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

impl<'a, T, const N: usize> From<&'a Point<T, N>> for &'a Vector<T, N> {
  fn from(point: &Point<T, N>) -> &Vector<T, N> {
    // Both types are #[repr(transparent)] wrappers around [T; N].
    unsafe { &*(point as *const Point<T, N> as *const Vector<T, N>) }
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| self.0.index(i).clone().neg()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn perpendicular_is_orthogonal(v in any_vector()) {
      prop_assert_eq!(v.dot(&v.perpendicular()), 0.0)
    }

    #[test]
    fn four_quarter_turns_is_identity(v in any_vector()) {
      prop_assert_eq!(v.perpendicular().perpendicular().perpendicular().perpendicular(), v)
    }

    #[test]
    fn normalize_has_unit_length(v in any_vector()) {
      prop_assume!(v.squared_magnitude() > 1e-6);
      prop_assert!((v.normalize().magnitude() - 1.0).abs() < 1e-12)
    }

    #[test]
    fn double_negation(v in any_vector()) {
      prop_assert_eq!(-(-v), v)
    }
  }

  #[test]
  fn vector_utilities() {
    let u = Vector([3.0, 4.0]);
    let v = Vector([-1.0, 2.0]);
    assert_eq!(-u, Vector([-3.0, -4.0]));
    assert_eq!(u.dot(&v), 5.0);
    assert_eq!(u.squared_magnitude(), 25.0);
    assert_eq!(u.magnitude(), 5.0);
    assert_eq!(u + v, Vector([2.0, 6.0]));
    assert_eq!(&u - &v, Vector([4.0, 2.0]));
    assert_eq!(u.perpendicular(), Vector([-4.0, 3.0]));
    assert_eq!(u.normalize(), Vector([0.6, 0.8]));
    assert_eq!(u * 2.0, Vector([6.0, 8.0]));
  }

  #[test]
  fn normalize_zero_is_not_finite() {
    let n = Vector([0.0f64, 0.0]).normalize();
    assert!(n.0.iter().all(|c| !c.is_finite()));
  }

  #[test]
  fn point_as_vector() {
    let p = Point::new([1.0, 2.0]);
    assert_eq!(p.as_vec(), &Vector([1.0, 2.0]));
    assert_eq!(Point::from(Vector::from(p)), p);
  }
}
