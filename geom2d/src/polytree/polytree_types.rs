use crate::core::traits::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::PolyTree;

/// Whether a contour bounds filled area or a hole.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    /// Contour encloses filled area (stored counter clockwise).
    Solid,
    /// Contour encloses empty area (stored clockwise).
    Hole,
}

impl Polarity {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Polarity::Solid => Polarity::Hole,
            Polarity::Hole => Polarity::Solid,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Boolean operation to perform between two trees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BooleanOp {
    /// Area covered by either tree.
    Union,
    /// Area covered by both trees.
    Intersection,
    /// Area covered by the first tree and not the second.
    Subtraction,
}

impl BooleanOp {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Where a contour vertex came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Vertex given when the contour was constructed.
    Original,
    /// Vertex inserted where a contour of another tree meets this one during a Boolean operation.
    AddedIntersection,
}

/// Traversal label of an intersection vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryExit {
    Unset,
    /// The contour part leaving this vertex (in traversal direction) is kept.
    Entry,
    /// The contour part leaving this vertex is discarded, traversal switches trees here.
    Exit,
}

/// Identifies a node in a [PolyTree] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Index of the node in the tree arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Link from an intersection vertex to the matching vertex in the other operand tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partner {
    pub node: NodeId,
    pub index: usize,
}

/// Location of a point relative to a contour or a tree region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Options for constructing a [PolyTree].
#[derive(Debug, Clone)]
pub struct PolyTreeOptions<T>
where
    T: Coord,
{
    /// Trees attached as children of the new root (polarity must be opposite of the root).
    pub children: Vec<PolyTree<T>>,
    /// Trees attached as siblings of the new root (polarity must match the root).
    pub siblings: Vec<PolyTree<T>>,
    /// Fuzzy comparison epsilon used when removing repeated points.
    pub epsilon: T,
}

impl<T> PolyTreeOptions<T>
where
    T: Coord,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            siblings: Vec::new(),
            epsilon: T::zero(),
        }
    }
}

impl<T> Default for PolyTreeOptions<T>
where
    T: Coord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [PolyTree::boolean_operation_opt].
#[derive(Debug, Clone, Copy)]
pub struct BooleanOptions<T>
where
    T: Coord,
{
    /// Intersection points within this distance of an integer value are snapped to it, and points
    /// within this distance of an existing vertex are not inserted. Zero disables both.
    pub epsilon: T,
}

impl<T> BooleanOptions<T>
where
    T: Coord,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            epsilon: T::zero(),
        }
    }
}

impl<T> Default for BooleanOptions<T>
where
    T: Coord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
