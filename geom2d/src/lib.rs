//! 2D geometry primitives and polygon trees with holes supporting Boolean operations (union,
//! intersection, subtraction).
//!
//! Coordinates may be `i32`, `i64`, `f32`, or `f64`, see [core::traits::Coord].
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod polytree;

pub use static_aabb2d_index::AABB;
