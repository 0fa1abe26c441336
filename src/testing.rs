// This module contains strategies for:
//  * points and vectors
//  * circles, rectangles and rays
//  * convex polygons
// Coordinates stay within a few thousand units of the origin, the scale of a
// game world, so rounding never dominates the properties under test.
use crate::data::{Circle, Point, PolygonConvex, Ray, Rectangle, Vector};

use proptest::prelude::*;
use rand::SeedableRng;
use std::f64::consts::TAU;

const COORD: std::ops::Range<f64> = -1000.0..1000.0;

///////////////////////////////////////////////////////////////////////////////
// Points and vectors

pub fn any_point() -> impl Strategy<Value = Point<f64, 2>> {
  (COORD, COORD).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_vector() -> impl Strategy<Value = Vector<f64, 2>> {
  (COORD, COORD).prop_map(|(x, y)| Vector([x, y]))
}

pub fn any_unit_vector() -> impl Strategy<Value = Vector<f64, 2>> {
  (0.0..TAU).prop_map(|angle: f64| Vector([angle.cos(), angle.sin()]))
}

// Integer-valued coordinates. Products and quotients of small integers are
// rounded identically however they are grouped, which lets different
// algorithms be compared for exact equality.
pub fn any_grid_point() -> impl Strategy<Value = Point<f64, 2>> {
  (-100i32..100, -100i32..100).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

///////////////////////////////////////////////////////////////////////////////
// Shapes

pub fn any_circle() -> impl Strategy<Value = Circle<f64>> {
  (any_point(), 0.0..100.0).prop_map(|(center, radius)| Circle::new_unchecked(center, radius))
}

pub fn any_rectangle() -> impl Strategy<Value = Rectangle<f64>> {
  (any_point(), any_point()).prop_filter_map("Finite corners", |(a, b)| {
    Rectangle::from_corners(a, b).ok()
  })
}

pub fn any_grid_rectangle() -> impl Strategy<Value = Rectangle<f64>> {
  (any_grid_point(), any_grid_point()).prop_filter_map("Positive area", |(a, b)| {
    Rectangle::from_corners(a, b)
      .ok()
      .filter(|rect| rect.width() > 0.0 && rect.height() > 0.0)
  })
}

pub fn any_ray() -> impl Strategy<Value = Ray<f64>> {
  (any_point(), any_point()).prop_map(|(start, end)| Ray::new_unchecked(start, end))
}

pub fn any_grid_ray() -> impl Strategy<Value = Ray<f64>> {
  (any_grid_point(), any_grid_point()).prop_map(|(start, end)| Ray::new_unchecked(start, end))
}

///////////////////////////////////////////////////////////////////////////////
// Convex polygons

// Random convex polygon on the unit circle, scaled by a power of two and
// moved to a grid position.
pub fn any_convex() -> impl Strategy<Value = PolygonConvex<f64>> {
  (3usize..50, any::<u64>(), 0i32..6, any_grid_point()).prop_filter_map(
    "Convex after placement",
    |(n, seed, scale, offset)| {
      let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
      let unit = PolygonConvex::<f64>::random(n, rng);
      let scale = f64::from(1 << scale);
      let points = unit
        .points()
        .iter()
        .map(|pt| Point::new([pt[0] * scale + offset[0], pt[1] * scale + offset[1]]))
        .collect();
      PolygonConvex::new(points).ok()
    },
  )
}
