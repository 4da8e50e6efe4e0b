//! Finding where the contours of two trees meet and flagging the points where they cross.
use super::contains::point_location;
use crate::core::{
    math::{LineSegment, Point, midpoint, segment_intersection, snap_to_epsilon},
    traits::Coord,
};
use crate::polytree::{
    Contour, ContourVertex, NodeId, OperationError, PointLocation, PolyNode, PolyTree,
};
use log::trace;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder};

/// Edges between consecutive original vertices (intersection vertices are intermediate points of
/// these edges), doubled coordinates.
pub fn original_edges<T>(node: &PolyNode<T>) -> Vec<LineSegment<T>>
where
    T: Coord,
{
    let originals = node.contour.original_indexes();
    let n = originals.len();
    (0..n)
        .map(|i| {
            LineSegment::new(
                node.contour[originals[i]].point,
                node.contour[originals[(i + 1) % n]].point,
            )
        })
        .collect()
}

fn edge_index<T>(edges: &[LineSegment<T>]) -> StaticAABB2DIndex<T>
where
    T: Coord,
{
    let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
    for e in edges {
        let bb = e.bounding_box();
        builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
    }

    match builder.build() {
        Ok(index) => index,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building edge index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}

/// Insert a vertex at `p` on the original edge `edge` of `contour`.
///
/// Vertices already inserted on the edge stay ordered by distance from the edge start.
pub fn insert_on_edge<T>(contour: &mut Contour<T>, edge: &LineSegment<T>, p: Point<T>)
where
    T: Coord,
{
    let Some(start) =
        (0..contour.len()).find(|&i| contour[i].is_original() && contour[i].point == edge.start)
    else {
        debug_assert!(false, "edge start not found in contour");
        return;
    };

    let dist = edge.start.distance_squared(p);
    let mut i = contour.next_index(start);
    while !contour[i].is_original() {
        if edge.start.distance_squared(contour[i].point) > dist {
            contour.insert(i, ContourVertex::inserted(p));
            return;
        }
        i = contour.next_index(i);
    }

    // index 0 is always an original vertex, append instead of becoming the new start
    let at = if i == 0 { contour.len() } else { i };
    contour.insert(at, ContourVertex::inserted(p));
}

fn degenerate_at<T>(p: Point<T>) -> OperationError
where
    T: Coord,
{
    OperationError::DegenerateIntersection {
        at: (p.x.as_f64() / 2.0, p.y.as_f64() / 2.0),
    }
}

/// Make every point where the contours of `id_a` and `id_b` meet a vertex of both contours.
///
/// A point within `epsilon` of an existing vertex takes the position of that vertex. Returns
/// the distinct meeting points (doubled).
fn insert_meeting_points<T>(
    a: &mut PolyTree<T>,
    id_a: NodeId,
    b: &mut PolyTree<T>,
    id_b: NodeId,
    b_edges: &[LineSegment<T>],
    b_index: &StaticAABB2DIndex<T>,
    epsilon: T,
) -> Result<Vec<Point<T>>, OperationError>
where
    T: Coord,
{
    let eps_f64 = epsilon.as_f64();
    let mut meetings = Vec::new();

    for edge_a in original_edges(a.node(id_a)) {
        let bb = edge_a.bounding_box();
        let mut candidates = b_index.query(
            bb.min_x - epsilon,
            bb.min_y - epsilon,
            bb.max_x + epsilon,
            bb.max_y + epsilon,
        );
        candidates.sort_unstable();

        for i in candidates {
            let edge_b = &b_edges[i];
            let Some(p) = segment_intersection(&edge_a, edge_b) else {
                continue;
            };
            let p = Point::from_f64(Point::new(
                snap_to_epsilon(p.x, eps_f64),
                snap_to_epsilon(p.y, eps_f64),
            ));

            let contour_a = &a.node(id_a).contour;
            let contour_b = &b.node(id_b).contour;
            let near_a = contour_a.position_near(p, epsilon).map(|j| contour_a[j].point);
            let near_b = contour_b.position_near(p, epsilon).map(|j| contour_b[j].point);
            let p = match (near_a, near_b) {
                (Some(pa), Some(pb)) if pa != pb => return Err(degenerate_at(pa)),
                (Some(pa), _) => pa,
                (None, Some(pb)) => pb,
                (None, None) => p,
            };

            if near_a.is_none() {
                insert_on_edge(&mut a.node_mut(id_a).contour, &edge_a, p);
            }
            if near_b.is_none() {
                insert_on_edge(&mut b.node_mut(id_b).contour, edge_b, p);
            }
            if !meetings.contains(&p) {
                meetings.push(p);
            }
        }
    }

    Ok(meetings)
}

/// Location relative to `other` of the edge of `contour` leaving vertex `i`, sampled at its
/// midpoint.
fn side_after<T>(
    contour: &Contour<T>,
    i: usize,
    other: &PolyNode<T>,
    epsilon: T,
) -> PointLocation
where
    T: Coord,
{
    let p = midpoint(contour[i].point, contour[contour.next_index(i)].point);
    point_location(other, p, epsilon)
}

/// Vertex at which `contour` crosses the boundary of `other`, given the contours meet at vertex
/// `i` of `contour`.
///
/// Touching without crossing gives `None`. A run along the boundary of `other` starting at `i`
/// crosses at the vertex where the run ends if it leaves on the opposite side.
fn crossing_from<T>(
    contour: &Contour<T>,
    i: usize,
    other: &PolyNode<T>,
    epsilon: T,
) -> Option<usize>
where
    T: Coord,
{
    let before = side_after(contour, contour.prev_index(i), other, epsilon);
    if before == PointLocation::OnBoundary {
        return None;
    }

    let mut j = i;
    for _ in 0..contour.len() {
        let after = side_after(contour, j, other, epsilon);
        if after != PointLocation::OnBoundary {
            return (after != before).then_some(j);
        }
        j = contour.next_index(j);
    }

    None
}

fn flag_crossing<T>(contour: &mut Contour<T>, p: Point<T>) -> Result<(), OperationError>
where
    T: Coord,
{
    match contour.position_near(p, T::zero()) {
        Some(i) if !contour[i].is_intersection() => {
            contour.vertices_mut()[i].intersection = true;
            Ok(())
        }
        _ => Err(degenerate_at(p)),
    }
}

/// Find every point where the contours of `a` and `b` meet, insert it into both contours, and
/// flag the points where they cross as intersection vertices.
///
/// A crossing at an existing vertex promotes that vertex in place. Points where the contours only
/// touch stay as contact vertices. Collinear overlapping edges meet at their overlap end points.
/// Returns the number of crossings.
///
/// # Errors
///
/// [OperationError::DegenerateIntersection] if a vertex crosses more than one contour of the
/// other tree, or if vertices of both trees are within `epsilon` of a meeting point but apart.
pub fn find_intersections<T>(
    a: &mut PolyTree<T>,
    b: &mut PolyTree<T>,
    epsilon: T,
) -> Result<usize, OperationError>
where
    T: Coord,
{
    let a_ids = a.node_ids();
    let b_ids = b.node_ids();
    let mut count = 0;

    for &id_b in &b_ids {
        let b_edges = original_edges(b.node(id_b));
        let index = edge_index(&b_edges);

        for &id_a in &a_ids {
            let meetings = insert_meeting_points(a, id_a, b, id_b, &b_edges, &index, epsilon)?;

            let contour = &a.node(id_a).contour;
            let node_b = b.node(id_b);
            let crossings: Vec<Point<T>> = meetings
                .iter()
                .filter_map(|&p| contour.position_near(p, T::zero()))
                .filter_map(|i| crossing_from(contour, i, node_b, epsilon))
                .map(|j| contour[j].point)
                .collect();

            for p in crossings {
                flag_crossing(&mut a.node_mut(id_a).contour, p)?;
                flag_crossing(&mut b.node_mut(id_b).contour, p)?;
                count += 1;
                trace!("crossing at {:?} (doubled)", p);
            }
        }
    }

    Ok(count)
}
