//! Relationship of a single node contour to other shapes.
//!
//! Every shape is moved into doubled space before comparing against the node contour.
use super::contains::point_location;
use crate::core::{
    math::{Circle, LineSegment, Point, Rectangle, Relationship, SegmentRelationship},
    traits::Coord,
};
use crate::polytree::{PointLocation, PolyNode, Polarity};

pub fn node_to_point<T>(node: &PolyNode<T>, point: Point<T>) -> Relationship
where
    T: Coord,
{
    match point_location(node, point.doubled(), T::zero()) {
        PointLocation::Inside => Relationship::Contains,
        PointLocation::OnBoundary => Relationship::Intersection,
        PointLocation::Outside => Relationship::Disjoint,
    }
}

pub fn node_to_segment<T>(node: &PolyNode<T>, segment: &LineSegment<T>) -> Relationship
where
    T: Coord,
{
    let seg = LineSegment::new(segment.start.doubled(), segment.end.doubled());
    if node
        .contour
        .edges()
        .any(|e| e.relationship(&seg, T::zero()).is_touching())
    {
        return Relationship::Intersection;
    }

    match point_location(node, seg.start, T::zero()) {
        PointLocation::Inside => Relationship::Contains,
        _ => Relationship::Disjoint,
    }
}

pub fn node_to_rectangle<T>(node: &PolyNode<T>, rectangle: &Rectangle<T>) -> Relationship
where
    T: Coord,
{
    match PolyNode::from_points(&rectangle.corners(), Polarity::Solid, T::zero()) {
        Ok(rect_node) => node_to_node(node, &rect_node),
        // zero area rectangle is a segment
        Err(_) => node_to_segment(node, &LineSegment::new(rectangle.min, rectangle.max)),
    }
}

pub fn node_to_circle<T>(node: &PolyNode<T>, circle: &Circle<T>) -> Relationship
where
    T: Coord,
{
    let c = Circle::new(circle.center.doubled(), circle.radius * T::two());
    if node.contour.edges().any(|e| c.boundary_touches_segment(&e)) {
        return Relationship::Intersection;
    }

    if node.contour.points().all(|p| c.contains_point(p)) {
        return Relationship::ContainedBy;
    }

    match point_location(node, c.center, T::zero()) {
        PointLocation::Inside => Relationship::Contains,
        _ => Relationship::Disjoint,
    }
}

/// Relationship of the contour of `a` to the contour of `b` (polarity is ignored).
pub fn node_to_node<T>(a: &PolyNode<T>, b: &PolyNode<T>) -> Relationship
where
    T: Coord,
{
    if same_point_set(a, b) {
        return Relationship::Equal;
    }

    if boundaries_touch(a, b) {
        return Relationship::Intersection;
    }

    if point_location(a, b.contour[0].point, T::zero()) == PointLocation::Inside {
        Relationship::Contains
    } else if point_location(b, a.contour[0].point, T::zero()) == PointLocation::Inside {
        Relationship::ContainedBy
    } else {
        Relationship::Disjoint
    }
}

/// Returns true if the areas enclosed by `a` and `b` share interior points.
///
/// Contours that only touch along their boundaries do not overlap.
pub fn contours_overlap<T>(a: &PolyNode<T>, b: &PolyNode<T>) -> bool
where
    T: Coord,
{
    if same_point_set(a, b) {
        return true;
    }

    let crosses = a.contour.edges().any(|ea| {
        b.contour
            .edges()
            .any(|eb| ea.relationship(&eb, T::zero()) == SegmentRelationship::Intersects)
    });

    crosses
        || b.contour
            .points()
            .any(|p| point_location(a, p, T::zero()) == PointLocation::Inside)
        || a.contour
            .points()
            .any(|p| point_location(b, p, T::zero()) == PointLocation::Inside)
}

fn boundaries_touch<T>(a: &PolyNode<T>, b: &PolyNode<T>) -> bool
where
    T: Coord,
{
    a.contour.edges().any(|ea| {
        b.contour
            .edges()
            .any(|eb| ea.relationship(&eb, T::zero()).is_touching())
    })
}

/// Returns true if both contours have exactly the same vertex positions.
pub fn same_point_set<T>(a: &PolyNode<T>, b: &PolyNode<T>) -> bool
where
    T: Coord,
{
    a.contour.len() == b.contour.len()
        && a.contour.points().all(|p| b.contour.has_vertex_at(p, T::zero()))
}
