use super::{LineSegment, Point};
use crate::core::traits::Coord;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by a center point and radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Circle<T = f64> {
    pub center: Point<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Coord,
{
    #[inline]
    pub fn new(center: Point<T>, radius: T) -> Self {
        Circle { center, radius }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        let r = self.radius.as_f64();
        std::f64::consts::PI * r * r
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius.as_f64()
    }

    #[inline]
    pub fn bounding_box(&self) -> AABB<T> {
        AABB::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Returns true if `p` is inside or on the circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// let c = Circle::new(Point::new(0, 0), 5);
    /// assert!(c.contains_point(Point::new(3, 4)));
    /// assert!(c.contains_point(Point::new(1, 1)));
    /// assert!(!c.contains_point(Point::new(4, 4)));
    /// ```
    #[inline]
    pub fn contains_point(&self, p: Point<T>) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }

    /// Returns true if `p` lies exactly on the circle.
    #[inline]
    pub fn on_boundary(&self, p: Point<T>) -> bool {
        self.center.distance_squared(p) == self.radius * self.radius
    }

    /// Returns true if any point of `seg` is inside or on the circle.
    #[inline]
    pub fn touches_segment(&self, seg: &LineSegment<T>) -> bool {
        seg.distance_to_point(self.center) <= self.radius.as_f64()
    }

    /// Returns true if `seg` crosses or touches the circle boundary.
    pub fn boundary_touches_segment(&self, seg: &LineSegment<T>) -> bool {
        // segment is within reach and not entirely strictly inside
        let r_sq = self.radius * self.radius;
        let start_inside = self.center.distance_squared(seg.start) < r_sq;
        let end_inside = self.center.distance_squared(seg.end) < r_sq;
        self.touches_segment(seg) && !(start_inside && end_inside)
    }
}
