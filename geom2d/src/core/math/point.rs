use crate::core::traits::Coord;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point (or direction vector) in 2D space.
///
/// Equality is exact, use [Point::fuzzy_eq_eps] for a tolerance based comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Coord,
{
    /// Create a new point with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create a zero point (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale the point by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        point(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`), also known as
    /// the 2D cross product.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector from the origin to this point.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector from the origin to this point.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().as_f64().sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (*self - other).length_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        let dx = self.x.as_f64() - other.x.as_f64();
        let dy = self.y.as_f64() - other.y.as_f64();
        dx.hypot(dy)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Point with both coordinates multiplied by two.
    #[inline]
    pub fn doubled(&self) -> Self {
        self.scale(T::two())
    }

    /// Point with both coordinates divided by two (integer types truncate).
    #[inline]
    pub fn halved(&self) -> Self {
        point(self.x / T::two(), self.y / T::two())
    }

    /// Convert to a `f64` point.
    #[inline]
    pub fn as_f64(&self) -> Point<f64> {
        Point::new(self.x.as_f64(), self.y.as_f64())
    }

    /// Convert from a `f64` point, integer types round to the nearest value.
    #[inline]
    pub fn from_f64(p: Point<f64>) -> Self {
        point(T::from_f64(p.x), T::from_f64(p.y))
    }

    /// Returns `true` if this point is lower than `other`, or at the same height and further left.
    #[inline]
    pub fn is_lower_left_of(&self, other: Self) -> bool {
        self.y < other.y || (self.y == other.y && self.x < other.x)
    }
}

#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Coord,
{
    Point::new(x, y)
}

impl<T> From<(T, T)> for Point<T>
where
    T: Coord,
{
    #[inline]
    fn from(value: (T, T)) -> Self {
        Point::new(value.0, value.1)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Coord> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Coord> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Coord> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, _rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x $op _rhs.x, self.y $op _rhs.y)
            }
        }

        impl<T: Coord> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Coord> ops::Neg for Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert_eq!(($v1 $op $v2), $expected);
            assert_eq!((&$v1 $op $v2), $expected);
            assert_eq!(($v1 $op &$v2), $expected);
            assert_eq!((&$v1 $op &$v2), $expected);
        };
    }

    #[test]
    fn ops() {
        let v1 = point(4, 5);
        let v2 = point(1, 2);
        test_binary_op!(v1, v2, +, point(5, 7));
        test_binary_op!(v1, v2, -, point(3, 3));
        assert_eq!(-v1, point(-4, -5));
    }

    #[test]
    fn doubling_round_trip() {
        let p = point(-7i64, 3);
        assert_eq!(p.doubled(), point(-14, 6));
        assert_eq!(p.doubled().halved(), p);
        let q = point(1.5f64, -0.25);
        assert_eq!(q.doubled().halved(), q);
    }

    #[test]
    fn products_and_distance() {
        let a = point(3.0, 4.0);
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.perp_dot(point(1.0, 0.0)), -4.0);
        assert_eq!(point(0i64, 0).distance(point(3, 4)), 5.0);
    }

    #[test]
    fn lower_left_ordering() {
        assert!(point(5, 0).is_lower_left_of(point(0, 1)));
        assert!(point(0, 1).is_lower_left_of(point(2, 1)));
        assert!(!point(2, 1).is_lower_left_of(point(2, 1)));
    }
}
