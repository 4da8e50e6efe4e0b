//! Core/common traits for use in geom2d.
mod coord;
mod fuzzy_eq;
mod fuzzy_ord;

pub use coord::Coord;
pub use fuzzy_eq::FuzzyEq;
pub use fuzzy_ord::FuzzyOrd;
