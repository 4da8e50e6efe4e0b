use super::{Orientation, Point, orientation};
use crate::core::traits::Coord;
use std::cmp::Ordering;

/// Convex hull of `points` using Andrew's monotone chain.
///
/// Returns the hull vertices in counter clockwise order starting from the lowest x (then lowest y)
/// point, collinear points along hull edges are removed. The hull is implicitly closed (first
/// point is not repeated). Fewer than 3 distinct points returns those points (sorted).
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let points = vec![
///     Point::new(0, 0),
///     Point::new(2, 0),
///     Point::new(1, 1),
///     Point::new(2, 2),
///     Point::new(0, 2),
/// ];
/// let hull = convex_hull(&points);
/// assert_eq!(
///     hull,
///     vec![Point::new(0, 0), Point::new(2, 0), Point::new(2, 2), Point::new(0, 2)]
/// );
/// ```
pub fn convex_hull<T>(points: &[Point<T>]) -> Vec<Point<T>>
where
    T: Coord,
{
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let is_left_turn = |chain: &[Point<T>], p: Point<T>| {
        let n = chain.len();
        orientation(chain[n - 2], chain[n - 1], p) == Orientation::CounterClockwise
    };

    let mut lower: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && !is_left_turn(&lower, p) {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && !is_left_turn(&upper, p) {
            upper.pop();
        }
        upper.push(p);
    }

    // last point of each chain is the first point of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Returns true if `point` is inside or on the boundary of the counter clockwise convex `hull`.
///
/// Degenerate hulls (fewer than 3 points) contain only the points on them.
///
/// # Examples
///
/// ```
/// # use geom2d::core::math::*;
/// let pts = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)];
/// let hull = convex_hull(&pts);
/// assert!(point_in_convex_hull(&hull, Point::new(2, 2)));
/// assert!(point_in_convex_hull(&hull, Point::new(4, 2)));
/// assert!(!point_in_convex_hull(&hull, Point::new(5, 2)));
/// ```
pub fn point_in_convex_hull<T>(hull: &[Point<T>], point: Point<T>) -> bool
where
    T: Coord,
{
    match hull.len() {
        0 => false,
        1 => hull[0] == point,
        2 => super::LineSegment::new(hull[0], hull[1]).contains_point(point),
        n => (0..n).all(|i| {
            orientation(hull[i], hull[(i + 1) % n], point) != Orientation::Clockwise
        }),
    }
}
