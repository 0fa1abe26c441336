mod circle;
mod directed_edge;
pub(crate) mod point;
pub mod polygon;
mod ray;
mod rectangle;
mod vector;

pub use circle::Circle;
pub use directed_edge::DirectedEdge;
#[doc(inline)]
pub use polygon::{EdgeIter, PolygonConvex};
pub use point::Point;
pub use ray::Ray;
pub use rectangle::Rectangle;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
