//! 2D collision predicates for game physics.
//!
//! Shape-vs-shape tests answer whether two shapes overlap:
//!
//! * [`circle_circle`]
//! * [`rectangle_rectangle`]
//! * [`convex_convex`] (separating-axis theorem)
//!
//! Ray casts answer where along a bounded segment a shape is first hit, as a
//! parameter `t` in `[0, 1]`:
//!
//! * [`ray_circle`]
//! * [`ray_rectangle`]
//! * [`ray_convex`]
//!
//! ```rust
//! # use rcollide::data::*;
//! # use rcollide::*;
//! let circle = Circle::new(Point::new([0.0, 0.0]), 1.0)?;
//! let ray = Ray::new(Point::new([-2.0, 0.0]), Point::new([2.0, 0.0]))?;
//! assert_eq!(ray_circle(&ray, &circle), Some(0.25));
//! # Ok::<(), rcollide::Error>(())
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
pub mod intersection;
mod orientation;

pub use orientation::Orientation;

#[doc(inline)]
pub use intersection::{
  circle_circle, convex_convex, convex_convex_with, ray_circle, ray_convex, ray_rectangle,
  rectangle_rectangle, Intersects, Overlap, RayHit, SatHints,
};

/// Reasons a shape constructor refuses its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Two consecutive vertices coincide, leaving a zero-length edge.
  DuplicatePoints,
  ClockWiseViolation,
  /// Three consecutive vertices are colinear or turn clockwise, or the
  /// boundary winds around more than once.
  ConvexViolation,
  NegativeRadius,
  /// A rectangle's minimum corner lies above or right of its maximum corner.
  InvertedBounds,
  NonFinite,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::NegativeRadius => write!(f, "Negative radius"),
      Error::InvertedBounds => write!(f, "Minimum corner exceeds maximum corner"),
      Error::NonFinite => write!(f, "Coordinates must be finite"),
    }
  }
}

impl std::error::Error for Error {}

/// Floating-point coordinate type accepted by every shape.
pub trait Scalar: Float + Debug + Sum {
  fn from_f64(val: f64) -> Self;
  /// Exact orientation of `r` relative to the directed line `p -> q`:
  /// `Greater` when counter-clockwise, `Less` when clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl Scalar for $ty {
        fn from_f64(val: f64) -> Self {
          val as $ty
        }

        // Adaptive-precision orient2d, exact for every finite input.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
