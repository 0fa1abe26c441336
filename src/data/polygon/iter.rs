use crate::data::DirectedEdge;
use crate::data::Point;

/// Boundary edges of a polygon in vertex order, closing with the edge from
/// the last vertex back to the first.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) points: &'a [Point<T, 2>],
  pub(crate) position: usize,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T, 2>;
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.points.len();
    if self.position >= n {
      return None;
    }
    let edge = DirectedEdge {
      src: &self.points[self.position],
      dst: &self.points[(self.position + 1) % n],
    };
    self.position += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.points.len().saturating_sub(self.position)
  }
}
