use thiserror::Error;

/// Errors from building a [PolyTree](super::PolyTree) or attaching nodes to one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Fewer than three distinct points were given for a contour.
    #[error("contour requires at least 3 distinct points, got {count}")]
    TooFewPoints { count: usize },
    /// A coordinate magnitude is above [Coord::MAX_COORDINATE](crate::core::traits::Coord) (or
    /// is not a number).
    #[error("coordinate ({x}, {y}) is outside the supported range of +/-{max}")]
    CoordinateOutOfRange { x: f64, y: f64, max: f64 },
    /// Contour points enclose no area (collinear or fully degenerate).
    #[error("contour encloses zero area")]
    ZeroArea,
    /// Child polarity must be the opposite of its parent polarity.
    #[error("child polarity must be opposite of the parent polarity")]
    ChildPolarityMismatch,
    /// Sibling polarity must match the node it is attached to.
    #[error("sibling polarity must match the node polarity")]
    SiblingPolarityMismatch,
    /// Child contour is not contained by the parent contour.
    #[error("child contour is not contained by the parent contour")]
    ChildNotContained,
    /// Sibling contour overlaps an existing sibling.
    #[error("sibling contour overlaps an existing contour")]
    OverlappingSiblings,
}

/// Errors from a Boolean operation or from nesting contours into a tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    /// No contours were given to assemble a tree from.
    #[error("no contours to assemble")]
    EmptyInput,
    /// A result contour could not be turned into a node.
    #[error("degenerate result contour")]
    DegenerateContour(#[source] ConstructionError),
    /// Traversal did not return to its start point (inputs are likely self intersecting).
    #[error("traversal starting at ({}, {}) did not close", start.0, start.1)]
    UnclosedContour { start: (f64, f64) },
    /// The operands meet at a point the contour walk cannot resolve: a vertex crossing more than
    /// one contour, or distinct vertices of both operands within epsilon of each other.
    #[error("unresolvable intersection at ({}, {})", at.0, at.1)]
    DegenerateIntersection { at: (f64, f64) },
    /// Two contours placed at the same nesting level overlap.
    #[error("contours at the same nesting level overlap")]
    OverlappingContours,
}

impl From<ConstructionError> for OperationError {
    fn from(err: ConstructionError) -> Self {
        OperationError::DegenerateContour(err)
    }
}
