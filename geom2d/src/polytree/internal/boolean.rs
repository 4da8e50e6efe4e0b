//! Boolean operation pipeline between two trees.
use super::{
    contains::region_location, entry_exit::mark_entry_exit, intersects::find_intersections,
    nesting::nest_contours, relationships::same_point_set, traversal::traverse,
};
use crate::core::{
    math::{Point, midpoint},
    traits::Coord,
};
use crate::polytree::{
    BooleanOp, BooleanOptions, OperationError, PointLocation, PolyNode, PolyTree,
};
use log::debug;

/// Location of a point of `node` that is not on the boundary of `other`, trying every vertex then
/// every edge midpoint. `None` if the whole contour lies on the boundary of `other`.
fn representative_location<T>(
    node: &PolyNode<T>,
    other: &PolyTree<T>,
    epsilon: T,
) -> Option<PointLocation>
where
    T: Coord,
{
    let vertices = node.contour.points();
    let midpoints = node.contour.edges().map(|e| midpoint(e.start, e.end));
    vertices
        .chain(midpoints)
        .map(|p| region_location(other, p, epsilon))
        .find(|&loc| loc != PointLocation::OnBoundary)
}

/// Decide whether a contour with no intersection vertices is part of the result.
fn keep_untouched<T>(
    node: &PolyNode<T>,
    other: &PolyTree<T>,
    from_a: bool,
    op: BooleanOp,
    epsilon: T,
) -> bool
where
    T: Coord,
{
    match representative_location(node, other, epsilon) {
        Some(loc) => {
            let inside = loc == PointLocation::Inside;
            match op {
                BooleanOp::Union => !inside,
                BooleanOp::Intersection => inside,
                BooleanOp::Subtraction => inside != from_a,
            }
        }
        None => {
            // coincident contour, only the copy from A is ever kept
            if !from_a {
                return false;
            }
            let same_polarity = other
                .node_ids()
                .into_iter()
                .map(|id| other.node(id))
                .find(|n| same_point_set(node, n))
                .is_none_or(|n| n.polarity == node.polarity);
            match op {
                BooleanOp::Union | BooleanOp::Intersection => same_polarity,
                BooleanOp::Subtraction => !same_polarity,
            }
        }
    }
}

fn untouched_contours<T>(
    this: &PolyTree<T>,
    other: &PolyTree<T>,
    from_a: bool,
    op: BooleanOp,
    epsilon: T,
) -> Vec<Vec<Point<T>>>
where
    T: Coord,
{
    this.node_ids()
        .into_iter()
        .map(|id| this.node(id))
        .filter(|n| !n.contour.has_intersections())
        .filter(|n| keep_untouched(n, other, from_a, op, epsilon))
        .map(|n| n.contour.result_points())
        .collect()
}

/// Result contours of `op` between `a` and `b` (actual coordinates, not nested).
pub fn boolean_contours<T>(
    a: &mut PolyTree<T>,
    b: &mut PolyTree<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
) -> Result<Vec<Vec<Point<T>>>, OperationError>
where
    T: Coord,
{
    let eps = options.epsilon;
    a.reset_intersection_metadata_and_reorder();
    b.reset_intersection_metadata_and_reorder();

    let count = find_intersections(a, b, eps)?;
    debug!("{:?}: {} crossing point(s)", op, count);

    let mut contours = Vec::new();
    if count > 0 {
        mark_entry_exit(a, b, op, eps);
        contours = traverse(a, b, op)?;
        debug!("{:?}: traversal produced {} contour(s)", op, contours.len());
    }

    contours.extend(untouched_contours(a, b, true, op, eps));
    contours.extend(untouched_contours(b, a, false, op, eps));

    Ok(contours)
}

/// Result of `op` between `a` and `b` as a tree, `None` if the result is empty.
pub fn boolean_operation<T>(
    a: &mut PolyTree<T>,
    b: &mut PolyTree<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
) -> Result<Option<PolyTree<T>>, OperationError>
where
    T: Coord,
{
    let contours = boolean_contours(a, b, op, options)?;
    if contours.is_empty() {
        return Ok(None);
    }

    nest_contours(contours, options.epsilon).map(Some)
}
