//! Polygon trees with holes and islands, and Boolean operations between them.
//!
//! A [PolyTree] stores every contour in an arena of [PolyNode]s. Contours are kept with doubled
//! coordinates so that edge midpoints stay exact for integer coordinate types, all public
//! accessors return actual coordinates.
//!
//! Boolean operations run in stages:
//!
//! 1. intersection vertices are inserted into both trees,
//! 2. each intersection vertex is labelled entry or exit for the operation,
//! 3. labelled contours are walked to produce the result contours,
//! 4. contours without intersections are kept or dropped by containment,
//! 5. result contours are nested back into a tree.
mod contour;
mod error;
mod poly_node;
mod poly_tree;
mod polytree_types;

/// Internal stages of the Boolean operation pipeline made public for testing and benchmarking.
pub mod internal;

pub use contour::{Contour, ContourVertex};
pub use error::{ConstructionError, OperationError};
pub use internal::nesting::nest_contours;
pub use poly_node::PolyNode;
pub use poly_tree::PolyTree;
pub use polytree_types::*;
