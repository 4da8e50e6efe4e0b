//! Core math for 2D geometry: points, segments, orientation, area, hulls, and simple shapes.
mod base_math;
mod circle;
mod convex_hull;
mod point;
mod rectangle;
mod relationship;
mod segment;

pub use base_math::*;
pub use circle::Circle;
pub use convex_hull::{convex_hull, point_in_convex_hull};
pub use point::{Point, point};
pub use rectangle::Rectangle;
pub use relationship::Relationship;
pub use segment::{LineSegment, SegmentRelationship, segment_intersection, segment_relationship};
