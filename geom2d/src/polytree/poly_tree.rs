use super::{
    BooleanOp, BooleanOptions, ConstructionError, NodeId, OperationError, PolyNode, PolyTreeOptions,
    Polarity,
    internal::{boolean, contains::contour_within, relationships},
};
use crate::core::{
    math::{Circle, LineSegment, Point, Rectangle, Relationship, SegmentRelationship},
    traits::Coord,
};
use log::debug;
use static_aabb2d_index::AABB;
use std::collections::{BTreeMap, VecDeque};

/// Polygon hierarchy with holes and islands.
///
/// Nodes live in an arena and refer to each other by [NodeId]. Children have the opposite
/// polarity of their parent, siblings share polarity and do not overlap.
///
/// # Examples
///
/// ```
/// # use geom2d::polytree::*;
/// # use geom2d::core::math::*;
/// let mut a = PolyTree::new(
///     &[Point::new(0, 0), Point::new(10, 0), Point::new(10, 10), Point::new(0, 10)],
///     Polarity::Solid,
/// ).unwrap();
/// let mut b = PolyTree::new(
///     &[Point::new(5, 5), Point::new(15, 5), Point::new(15, 15), Point::new(5, 15)],
///     Polarity::Solid,
/// ).unwrap();
///
/// let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
/// assert_eq!(union.area(), 175);
///
/// let intersection = a.boolean_operation(&mut b, BooleanOp::Intersection).unwrap().unwrap();
/// assert_eq!(intersection.area(), 25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolyTree<T> {
    pub(crate) nodes: Vec<PolyNode<T>>,
    pub(crate) root: NodeId,
}

impl<T> PolyTree<T>
where
    T: Coord,
{
    /// Tree with a single root contour.
    ///
    /// Fails if fewer than 3 distinct points are given or the points enclose no area.
    #[inline]
    pub fn new(points: &[Point<T>], polarity: Polarity) -> Result<Self, ConstructionError> {
        Self::new_opt(points, polarity, PolyTreeOptions::new())
    }

    /// Tree with a root contour and the children and siblings given in `options`.
    pub fn new_opt(
        points: &[Point<T>],
        polarity: Polarity,
        options: PolyTreeOptions<T>,
    ) -> Result<Self, ConstructionError> {
        let root = PolyNode::from_points(points, polarity, options.epsilon)?;
        let mut tree = Self::from_root_node(root);
        for child in options.children {
            tree.add_child(child)?;
        }
        for sibling in options.siblings {
            tree.add_sibling(sibling)?;
        }
        Ok(tree)
    }

    pub(crate) fn from_root_node(root: PolyNode<T>) -> Self {
        PolyTree {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Attach `child` (and its siblings) under the root.
    ///
    /// The child polarity must be opposite of the root polarity and every child vertex must be
    /// inside or on the root contour.
    pub fn add_child(&mut self, child: PolyTree<T>) -> Result<(), ConstructionError> {
        let root = self.node(self.root);
        for id in child.top_level_ids() {
            let node = child.node(id);
            if node.polarity != root.polarity.opposite() {
                return Err(ConstructionError::ChildPolarityMismatch);
            }
            if !contour_within(root, node, T::zero()) {
                return Err(ConstructionError::ChildNotContained);
            }
        }

        let root_id = self.root;
        for id in self.merge(child) {
            self.nodes[id.0].parent = Some(root_id);
            self.nodes[root_id.0].children.push(id);
        }

        Ok(())
    }

    /// Attach `sibling` (and its siblings) next to the root.
    ///
    /// The sibling polarity must match the root polarity and it may not overlap the root or any
    /// existing sibling (touching boundaries are allowed).
    pub fn add_sibling(&mut self, sibling: PolyTree<T>) -> Result<(), ConstructionError> {
        let existing = self.top_level_ids();
        let polarity = self.node(self.root).polarity;
        for id in sibling.top_level_ids() {
            let node = sibling.node(id);
            if node.polarity != polarity {
                return Err(ConstructionError::SiblingPolarityMismatch);
            }
            if existing
                .iter()
                .any(|&e| relationships::contours_overlap(self.node(e), node))
            {
                return Err(ConstructionError::OverlappingSiblings);
            }
        }

        let mut top_level = existing;
        top_level.extend(self.merge(sibling));
        for &id in &top_level {
            self.nodes[id.0].siblings = top_level.iter().copied().filter(|&s| s != id).collect();
        }

        Ok(())
    }

    /// Attach an already normalized node as a child of `parent`.
    pub(crate) fn push_child(&mut self, parent: NodeId, mut node: PolyNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Attach an already normalized node as a sibling of the root.
    pub(crate) fn push_root_sibling(&mut self, node: PolyNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut top_level = self.top_level_ids();
        self.nodes.push(node);
        top_level.push(id);
        for &t in &top_level {
            self.nodes[t.0].siblings = top_level.iter().copied().filter(|&s| s != t).collect();
        }
        id
    }

    /// Move every node of `other` into this arena, returning the remapped ids of the nodes that
    /// had no parent.
    fn merge(&mut self, other: PolyTree<T>) -> Vec<NodeId> {
        let offset = self.nodes.len();
        let remap = |id: NodeId| NodeId(id.0 + offset);
        let mut top_level = Vec::new();
        for (i, mut node) in other.nodes.into_iter().enumerate() {
            node.parent = node.parent.map(remap);
            node.children.iter_mut().for_each(|c| *c = remap(*c));
            node.siblings.iter_mut().for_each(|s| *s = remap(*s));
            if node.parent.is_none() {
                top_level.push(NodeId(i + offset));
            }
            self.nodes.push(node);
        }
        top_level
    }

    /// Root and its siblings.
    fn top_level_ids(&self) -> Vec<NodeId> {
        let mut ids = vec![self.root];
        ids.extend_from_slice(&self.node(self.root).siblings);
        ids
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not from this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &PolyNode<T> {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut PolyNode<T> {
        &mut self.nodes[id.0]
    }

    /// Number of nodes (contours) in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Contour of node `id` at actual coordinates.
    #[inline]
    pub fn contour(&self, id: NodeId) -> Vec<Point<T>> {
        self.node(id).contour()
    }

    /// Node ids in breadth first order: root, its siblings, then children level by level.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([self.root]);
        visited[self.root.0] = true;
        while let Some(id) = queue.pop_front() {
            order.push(id);
            let node = self.node(id);
            for &next in node.siblings.iter().chain(node.children.iter()) {
                if !visited[next.0] {
                    visited[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Number of ancestors of node `id`.
    pub(crate) fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            depth += 1;
            current = self.node(p).parent;
        }
        depth
    }

    /// Total number of vertices across every contour.
    pub(crate) fn vertex_count(&self) -> usize {
        self.nodes.iter().map(|n| n.contour.len()).sum()
    }

    /// Filled area: solid contour areas minus hole contour areas.
    ///
    /// Integer coordinate types truncate half units.
    pub fn area(&self) -> T {
        let area_x8 = self.nodes.iter().fold(T::zero(), |acc, n| {
            let a = n.contour.signed_area_x2().abs();
            match n.polarity {
                Polarity::Solid => acc.wrapping_add_coord(a),
                Polarity::Hole => acc.wrapping_sub_coord(a),
            }
        });
        area_x8 / (T::two() * T::two() * T::two())
    }

    /// Total length of every contour.
    pub fn perimeter(&self) -> f64 {
        self.nodes.iter().map(|n| n.perimeter()).sum()
    }

    /// Bounding box of every contour.
    pub fn bounding_box(&self) -> AABB<T> {
        let mut points = self.nodes.iter().flat_map(|n| n.contour.points());
        let first = points.next().unwrap_or_default();
        let (min_x, min_y, max_x, max_y) = points.fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), p| (x0.min_of(p.x), y0.min_of(p.y), x1.max_of(p.x), y1.max_of(p.y)),
        );
        AABB::new(
            min_x / T::two(),
            min_y / T::two(),
            max_x / T::two(),
            max_y / T::two(),
        )
    }

    /// Move every contour by `delta`.
    pub fn translate(&mut self, delta: Point<T>) {
        let d = delta.doubled();
        for node in self.nodes.iter_mut() {
            for v in node.contour.vertices_mut() {
                v.point = v.point + d;
            }
            node.update_cached_bounds();
        }
    }

    /// Remove intersection vertices left by a previous Boolean operation, clear entry/exit
    /// labels, visited flags and partner links, and rotate every contour back to its lowest then
    /// leftmost vertex.
    ///
    /// Called automatically at the start of every Boolean operation.
    pub fn reset_intersection_metadata_and_reorder(&mut self) {
        for node in self.nodes.iter_mut() {
            node.contour.strip_intersections();
            node.contour.rotate_to_lowest_left();
        }
    }

    /// Perform the Boolean operation `op` between this tree and `other`.
    ///
    /// Returns `Ok(None)` if the result is empty. Both trees receive intersection vertices during
    /// the operation (they are removed at the start of the next operation).
    #[inline]
    pub fn boolean_operation(
        &mut self,
        other: &mut PolyTree<T>,
        op: BooleanOp,
    ) -> Result<Option<PolyTree<T>>, OperationError> {
        self.boolean_operation_opt(other, op, &BooleanOptions::new())
    }

    /// Same as [PolyTree::boolean_operation] with options.
    pub fn boolean_operation_opt(
        &mut self,
        other: &mut PolyTree<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<Option<PolyTree<T>>, OperationError> {
        let result = boolean::boolean_operation(self, other, op, options)?;
        debug!(
            "{:?} result: {} contour(s)",
            op,
            result.as_ref().map_or(0, |t| t.len())
        );
        Ok(result)
    }

    /// Result contours of the Boolean operation `op` before they are nested into a tree.
    #[inline]
    pub fn boolean_contours(
        &mut self,
        other: &mut PolyTree<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<Vec<Vec<Point<T>>>, OperationError> {
        boolean::boolean_contours(self, other, op, options)
    }

    /// Relationship of every node to `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::polytree::*;
    /// # use geom2d::core::math::*;
    /// let tree = PolyTree::new(
    ///     &[Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)],
    ///     Polarity::Solid,
    /// ).unwrap();
    /// let rel = tree.relationship_to_point(Point::new(1, 1));
    /// assert_eq!(rel[&tree.root()], Relationship::Contains);
    /// ```
    pub fn relationship_to_point(&self, point: Point<T>) -> BTreeMap<NodeId, Relationship> {
        self.node_ids()
            .into_iter()
            .map(|id| (id, relationships::node_to_point(self.node(id), point)))
            .collect()
    }

    /// Relationship of every node to `segment`.
    pub fn relationship_to_segment(
        &self,
        segment: &LineSegment<T>,
    ) -> BTreeMap<NodeId, Relationship> {
        self.node_ids()
            .into_iter()
            .map(|id| (id, relationships::node_to_segment(self.node(id), segment)))
            .collect()
    }

    /// Relationship of every node to `rectangle`.
    pub fn relationship_to_rectangle(
        &self,
        rectangle: &Rectangle<T>,
    ) -> BTreeMap<NodeId, Relationship> {
        self.node_ids()
            .into_iter()
            .map(|id| (id, relationships::node_to_rectangle(self.node(id), rectangle)))
            .collect()
    }

    /// Relationship of every node to `circle`.
    pub fn relationship_to_circle(&self, circle: &Circle<T>) -> BTreeMap<NodeId, Relationship> {
        self.node_ids()
            .into_iter()
            .map(|id| (id, relationships::node_to_circle(self.node(id), circle)))
            .collect()
    }

    /// Relationship of every node of this tree to every node of `other`, keyed by
    /// `(self node, other node)`.
    pub fn relationship_to_polytree(
        &self,
        other: &PolyTree<T>,
    ) -> BTreeMap<(NodeId, NodeId), Relationship> {
        let other_ids = other.node_ids();
        let mut result = BTreeMap::new();
        for id in self.node_ids() {
            for &other_id in &other_ids {
                result.insert(
                    (id, other_id),
                    relationships::node_to_node(self.node(id), other.node(other_id)),
                );
            }
        }
        result
    }

    /// Relationship between every pair of (actual coordinate) edges of node `id` and `segment`.
    pub fn edge_relationships(
        &self,
        id: NodeId,
        segment: &LineSegment<T>,
    ) -> Vec<SegmentRelationship> {
        let seg = LineSegment::new(segment.start.doubled(), segment.end.doubled());
        self.node(id)
            .contour
            .edges()
            .map(|e| e.relationship(&seg, T::zero()))
            .collect()
    }
}
