use super::Point;
use crate::core::traits::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Coord,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
///
/// With integer coordinates the result truncates, callers that need an exact midpoint keep their
/// coordinates doubled.
#[inline]
pub fn midpoint<T>(p0: Point<T>, p1: Point<T>) -> Point<T>
where
    T: Coord,
{
    Point::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Rounds `value` to the nearest integer if it is within `epsilon` of it, otherwise returns `value`
/// unchanged.
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// assert_eq!(snap_to_epsilon(2.0000001, 1e-6), 2.0);
/// assert_eq!(snap_to_epsilon(2.1, 1e-6), 2.1);
/// // zero epsilon never snaps
/// assert_eq!(snap_to_epsilon(2.0000001, 0.0), 2.0000001);
/// ```
#[inline]
pub fn snap_to_epsilon(value: f64, epsilon: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < epsilon {
        rounded
    } else {
        value
    }
}

/// Orientation of an ordered triplet of points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The points lie on one line.
    Collinear,
    /// The points make a right turn.
    Clockwise,
    /// The points make a left turn.
    CounterClockwise,
}

/// Helper function to avoid repeating code for is_left and orientation checks.
#[inline]
fn perp_dot_test_value<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Coord,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Orientation of the triplet `p`, `q`, `r`.
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let p = Point::new(0, 0);
/// let q = Point::new(4, 0);
/// assert_eq!(orientation(p, q, Point::new(2, 3)), Orientation::CounterClockwise);
/// assert_eq!(orientation(p, q, Point::new(2, -3)), Orientation::Clockwise);
/// assert_eq!(orientation(p, q, Point::new(8, 0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation<T>(p: Point<T>, q: Point<T>, r: Point<T>) -> Orientation
where
    T: Coord,
{
    orientation_eps(p, q, r, T::zero())
}

/// Same as [orientation] but treats a perpendicular dot product within `epsilon` of zero as
/// collinear.
#[inline]
pub fn orientation_eps<T>(p: Point<T>, q: Point<T>, r: Point<T>, epsilon: T) -> Orientation
where
    T: Coord,
{
    let value = perp_dot_test_value(p, q, r);
    if value.fuzzy_eq_zero_eps(epsilon) {
        Orientation::Collinear
    } else if value > T::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns true if `point` is left of a direction vector.
///
/// Direction vector is defined as `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let p0 = Point::new(1.0, 1.0);
/// let p1 = Point::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Point::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Point::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> bool
where
    T: Coord,
{
    perp_dot_test_value(p0, p1, point) > T::zero()
}

/// Twice the signed area of the closed polygon described by `points` (shoelace formula).
///
/// Positive for counter clockwise winding, negative for clockwise winding. The area is kept doubled
/// to avoid a division (which would truncate with integer coordinates).
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let square = [
///     Point::new(0, 0),
///     Point::new(4, 0),
///     Point::new(4, 4),
///     Point::new(0, 4),
/// ];
/// assert_eq!(signed_area_x2(&square), 32);
/// let mut reversed = square;
/// reversed.reverse();
/// assert_eq!(signed_area_x2(&reversed), -32);
/// ```
pub fn signed_area_x2<T>(points: &[Point<T>]) -> T
where
    T: Coord,
{
    let n = points.len();
    if n < 3 {
        return T::zero();
    }

    // partial sums may leave the integer range, wrapping keeps a representable total exact
    let mut double_total_area = T::zero();
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        double_total_area = double_total_area
            .wrapping_add_coord(p1.x.wrapping_mul_coord(p2.y))
            .wrapping_sub_coord(p1.y.wrapping_mul_coord(p2.x));
    }

    double_total_area
}

/// Reverse `points` in place if they wind clockwise.
pub fn ensure_counter_clockwise<T>(points: &mut [Point<T>])
where
    T: Coord,
{
    if signed_area_x2(points) < T::zero() {
        points.reverse();
    }
}

/// Reverse `points` in place if they wind counter clockwise.
pub fn ensure_clockwise<T>(points: &mut [Point<T>])
where
    T: Coord,
{
    if signed_area_x2(points) > T::zero() {
        points.reverse();
    }
}
