#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spatial relationship between two shapes, described from the point of view of the first shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Shapes share no point.
    Disjoint,
    /// Boundaries touch or cross (neither shape strictly contains the other).
    Intersection,
    /// First shape fully contains the second.
    Contains,
    /// First shape is fully contained by the second.
    ContainedBy,
    /// Shapes are the same.
    Equal,
}

impl Relationship {
    /// The same relationship described from the point of view of the second shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// assert_eq!(Relationship::Contains.flipped(), Relationship::ContainedBy);
    /// assert_eq!(Relationship::Intersection.flipped(), Relationship::Intersection);
    /// ```
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Relationship::Contains => Relationship::ContainedBy,
            Relationship::ContainedBy => Relationship::Contains,
            other => other,
        }
    }
}
