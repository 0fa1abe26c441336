//! Support points of convex polygons.
//!
//! A support point is the vertex that is extremal in a given direction. For
//! vertices in counter-clockwise order around a convex polygon, the dot
//! products with any direction form a cyclic sequence with a single minimum
//! and a single maximum. Walking downhill from any starting vertex therefore
//! finds the true extremum. Starting from the answer of a similar, earlier
//! query (the previous frame, or the previous separating axis) usually takes
//! only a step or two.
//!
//! The starting vertex is an explicit [`SupportHint`] owned by the caller.
//! Hints only affect how long a search takes, never its answer.
use crate::data::{Point, Vector};
use crate::Scalar;

/// Seed for a support search: the vertex index a previous search ended at.
///
/// Any value is accepted; indices past the end of the vertex list wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SupportHint(usize);

impl SupportHint {
  pub fn new(index: usize) -> SupportHint {
    SupportHint(index)
  }
}

/// Hints for both ends of a polygon's projection onto an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtremeHints {
  pub min: SupportHint,
  pub max: SupportHint,
}

/// Extremal vertex found by a support search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support<T> {
  pub index: usize,
  /// Dot product of the vertex with the search direction.
  pub value: T,
}

impl<T> Support<T> {
  /// Seed for the next search, resuming where this one ended.
  pub fn hint(&self) -> SupportHint {
    SupportHint(self.index)
  }
}

/// $O(n)$, $O(1)$ when the hint is close. Vertex minimizing `p · direction`.
///
/// Two hill-descent walks from `hint`: forward while the next vertex is
/// strictly smaller, then backward while the previous vertex is strictly
/// smaller. Plateaus stop a walk, so the search halts even when every vertex
/// ties. Each walk visits at most `points.len()` vertices.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn min_dot<T>(points: &[Point<T, 2>], direction: &Vector<T, 2>, hint: SupportHint) -> Support<T>
where
  T: Scalar,
{
  let n = points.len();
  let dot = |i: usize| points[i].as_vec().dot(direction);
  let mut index = hint.0 % n;
  let mut value = dot(index);

  for _ in 1..n {
    let next = (index + 1) % n;
    let next_value = dot(next);
    if next_value < value {
      index = next;
      value = next_value;
    } else {
      break;
    }
  }

  for _ in 1..n {
    let prev = (index + n - 1) % n;
    let prev_value = dot(prev);
    if prev_value < value {
      index = prev;
      value = prev_value;
    } else {
      break;
    }
  }

  Support { index, value }
}

/// Vertex maximizing `p · direction`. Searches with the negated direction.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn max_dot<T>(points: &[Point<T, 2>], direction: &Vector<T, 2>, hint: SupportHint) -> Support<T>
where
  T: Scalar,
{
  let support = min_dot(points, &-*direction, hint);
  Support {
    index: support.index,
    value: -support.value,
  }
}

/// Project a convex polygon onto `axis`, returning the interval `(min, max)`
/// of its vertices' dot products. The hints are updated to the extremal
/// vertices that were found.
pub fn project<T>(points: &[Point<T, 2>], axis: &Vector<T, 2>, hints: &mut ExtremeHints) -> (T, T)
where
  T: Scalar,
{
  let min = min_dot(points, axis, hints.min);
  let max = max_dot(points, axis, hints.max);
  hints.min = min.hint();
  hints.max = max.hint();
  (min.value, max.value)
}
