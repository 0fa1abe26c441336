use array_init::array_init;
use num_traits::*;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Orientation, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn as_vec(&self) -> &Vector<T, N> {
    self.into()
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Clone + Zero + NumOps,
  {
    (self - rhs).squared_magnitude()
  }

  // Similar to num_traits::identities::Zero but doesn't require an Add impl.
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  pub fn is_finite(&self) -> bool
  where
    T: Float,
  {
    self.array.iter().all(|c| c.is_finite())
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
  fn from(vector: Vector<T, N>) -> Point<T, N> {
    Point { array: vector.0 }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn orient(p: &Point<T, 2>, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: Scalar,
  {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: Scalar,
  {
    Point::orient(self, q, r)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

mod add;
mod sub;
