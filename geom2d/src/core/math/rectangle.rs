use super::{LineSegment, Point};
use crate::core::traits::Coord;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle defined by its lower left and upper right corners.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rectangle<T = f64> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T> Rectangle<T>
where
    T: Coord,
{
    /// Rectangle spanning the two corner points (given in any order).
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// let r = Rectangle::new(Point::new(4, 0), Point::new(0, 3));
    /// assert_eq!(r.min, Point::new(0, 0));
    /// assert_eq!(r.max, Point::new(4, 3));
    /// assert_eq!(r.area(), 12);
    /// assert_eq!(r.perimeter(), 14);
    /// ```
    #[inline]
    pub fn new(p1: Point<T>, p2: Point<T>) -> Self {
        Rectangle {
            min: Point::new(p1.x.min_of(p2.x), p1.y.min_of(p2.y)),
            max: Point::new(p1.x.max_of(p2.x), p1.y.max_of(p2.y)),
        }
    }

    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        Rectangle::new(
            Point::new(aabb.min_x, aabb.min_y),
            Point::new(aabb.max_x, aabb.max_y),
        )
    }

    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    #[inline]
    pub fn perimeter(&self) -> T {
        T::two() * (self.width() + self.height())
    }

    /// Corners in counter clockwise order starting at `min`.
    #[inline]
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Edges in counter clockwise order starting at `min`.
    pub fn edges(&self) -> [LineSegment<T>; 4] {
        let c = self.corners();
        [
            LineSegment::new(c[0], c[1]),
            LineSegment::new(c[1], c[2]),
            LineSegment::new(c[2], c[3]),
            LineSegment::new(c[3], c[0]),
        ]
    }

    /// Returns true if `p` is inside or on the rectangle.
    #[inline]
    pub fn contains_point(&self, p: Point<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if `p` lies on the rectangle boundary.
    #[inline]
    pub fn on_boundary(&self, p: Point<T>) -> bool {
        self.contains_point(p)
            && (p.x == self.min.x || p.x == self.max.x || p.y == self.min.y || p.y == self.max.y)
    }
}
