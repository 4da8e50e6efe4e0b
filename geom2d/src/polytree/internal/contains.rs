//! Point containment tests against a single node contour and against a whole tree region.
use crate::core::{
    math::{Orientation, Point, orientation, point_in_convex_hull},
    traits::Coord,
};
use crate::polytree::{NodeId, PointLocation, PolyNode, PolyTree, Polarity};

/// Location of `p` relative to the contour of `node` (all doubled coordinates).
///
/// The cached hull rejects most outside points, points on an edge (within `epsilon`) are on the
/// boundary, remaining points are resolved by casting a ray in the +x direction (bounded by the
/// cached max x) and counting half open edge crossings.
pub fn point_location<T>(node: &PolyNode<T>, p: Point<T>, epsilon: T) -> PointLocation
where
    T: Coord,
{
    if p.x >= node.max_x + epsilon || !hull_admits(node, p, epsilon) {
        return PointLocation::Outside;
    }

    if node.contour.edges().any(|e| e.contains_point_eps(p, epsilon)) {
        return PointLocation::OnBoundary;
    }

    let mut crossings = 0usize;
    for e in node.contour.edges() {
        let (a, b) = (e.start, e.end);
        let a_above = a.y > p.y;
        let b_above = b.y > p.y;
        if a_above == b_above {
            continue;
        }
        // crossing is right of p iff p is left of the upward directed edge
        let o = if b_above {
            orientation(a, b, p)
        } else {
            orientation(b, a, p)
        };
        if o == Orientation::CounterClockwise {
            crossings += 1;
        }
    }

    if crossings % 2 == 1 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

fn hull_admits<T>(node: &PolyNode<T>, p: Point<T>, epsilon: T) -> bool
where
    T: Coord,
{
    if epsilon <= T::zero() {
        return point_in_convex_hull(&node.hull, p);
    }
    // with tolerance only use the hull bounding box so near boundary points are not rejected
    let (min_x, min_y, max_x, max_y) = node.hull.iter().fold(
        (T::max_value(), T::max_value(), T::min_value(), T::min_value()),
        |(x0, y0, x1, y1), q| (x0.min_of(q.x), y0.min_of(q.y), x1.max_of(q.x), y1.max_of(q.y)),
    );
    p.x.fuzzy_in_range_eps(min_x, max_x, epsilon) && p.y.fuzzy_in_range_eps(min_y, max_y, epsilon)
}

/// Location of `p` (doubled) relative to the filled region of `tree`.
///
/// On the boundary if `p` lies on any contour, otherwise inside iff the innermost contour
/// enclosing `p` is solid.
pub fn region_location<T>(tree: &PolyTree<T>, p: Point<T>, epsilon: T) -> PointLocation
where
    T: Coord,
{
    let mut innermost: Option<(usize, NodeId)> = None;
    for id in tree.node_ids() {
        match point_location(tree.node(id), p, epsilon) {
            PointLocation::OnBoundary => return PointLocation::OnBoundary,
            PointLocation::Inside => {
                let depth = tree.depth(id);
                if innermost.is_none_or(|(d, _)| depth > d) {
                    innermost = Some((depth, id));
                }
            }
            PointLocation::Outside => {}
        }
    }

    match innermost {
        Some((_, id)) if tree.node(id).polarity == Polarity::Solid => PointLocation::Inside,
        _ => PointLocation::Outside,
    }
}

/// Returns true if every vertex of `inner` is inside or on the boundary of `outer`.
pub fn contour_within<T>(outer: &PolyNode<T>, inner: &PolyNode<T>, epsilon: T) -> bool
where
    T: Coord,
{
    inner
        .contour
        .points()
        .all(|p| point_location(outer, p, epsilon) != PointLocation::Outside)
}
