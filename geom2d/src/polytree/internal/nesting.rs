//! Assembling flat contours into a [PolyTree] by containment.
use super::{contains::contour_within, relationships::contours_overlap};
use crate::core::{math::Point, traits::Coord};
use crate::polytree::{NodeId, OperationError, PolyNode, PolyTree, Polarity};
use std::cmp::Ordering;

/// Build a tree from flat `contours` (actual coordinates, any winding).
///
/// The largest contour becomes the solid root. Every other contour, from largest to smallest,
/// becomes a child (with opposite polarity) of the deepest node containing all of its vertices,
/// or a sibling of the root if no node contains it.
///
/// Returns [OperationError::OverlappingContours] if a contour overlaps another contour placed at
/// the same level.
///
/// # Examples
///
/// ```
/// # use geom2d::polytree::*;
/// # use geom2d::core::math::*;
/// let outer = vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10), Point::new(0, 10)];
/// let hole = vec![Point::new(2, 2), Point::new(8, 2), Point::new(8, 8), Point::new(2, 8)];
/// let tree = nest_contours(vec![hole, outer], 0).unwrap();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.area(), 64);
/// assert_eq!(tree.contour(tree.root())[2], Point::new(10, 10));
/// ```
pub fn nest_contours<T>(
    contours: Vec<Vec<Point<T>>>,
    epsilon: T,
) -> Result<PolyTree<T>, OperationError>
where
    T: Coord,
{
    let mut nodes = contours
        .iter()
        .map(|c| PolyNode::from_points(c, Polarity::Solid, epsilon))
        .collect::<Result<Vec<_>, _>>()?;

    if nodes.is_empty() {
        return Err(OperationError::EmptyInput);
    }

    // stable sort, equal areas keep input order
    nodes.sort_by(|x, y| {
        let ax = x.contour.signed_area_x2().abs();
        let ay = y.contour.signed_area_x2().abs();
        ay.partial_cmp(&ax).unwrap_or(Ordering::Equal)
    });

    let mut nodes = nodes.into_iter();
    let Some(root) = nodes.next() else {
        return Err(OperationError::EmptyInput);
    };
    let mut tree = PolyTree::from_root_node(root);

    for mut node in nodes {
        let mut container: Option<(usize, NodeId)> = None;
        for id in tree.node_ids() {
            if contour_within(tree.node(id), &node, epsilon) {
                let depth = tree.depth(id);
                if container.is_none_or(|(d, _)| depth > d) {
                    container = Some((depth, id));
                }
            }
        }

        let level: Vec<NodeId> = match container {
            Some((_, parent)) => tree.node(parent).children().to_vec(),
            None => {
                let root = tree.root();
                std::iter::once(root)
                    .chain(tree.node(root).siblings().iter().copied())
                    .collect()
            }
        };
        if level.iter().any(|&id| contours_overlap(tree.node(id), &node)) {
            return Err(OperationError::OverlappingContours);
        }

        match container {
            Some((_, parent)) => {
                node.set_polarity(tree.node(parent).polarity.opposite());
                tree.push_child(parent, node);
            }
            None => {
                node.set_polarity(tree.node(tree.root()).polarity);
                tree.push_root_sibling(node);
            }
        }
    }

    Ok(tree)
}
