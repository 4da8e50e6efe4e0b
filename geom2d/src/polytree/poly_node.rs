use super::{
    ConstructionError, Contour, NodeId, PointLocation, Polarity, internal::contains::point_location,
};
use crate::core::{
    math::{Point, convex_hull, ensure_clockwise, ensure_counter_clockwise, signed_area_x2},
    traits::Coord,
};

/// Single contour of a [PolyTree](super::PolyTree) together with its tree relations.
///
/// Positions are stored with doubled coordinates (so midpoints stay exact for integer
/// coordinates), every public accessor returns actual positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyNode<T> {
    pub(crate) contour: Contour<T>,
    pub(crate) polarity: Polarity,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) siblings: Vec<NodeId>,
    /// Counter clockwise convex hull (doubled).
    pub(crate) hull: Vec<Point<T>>,
    /// Doubled max x of the contour plus one.
    pub(crate) max_x: T,
}

impl<T> PolyNode<T>
where
    T: Coord,
{
    /// Validate and normalize `points` (actual positions) into a node with no relations.
    ///
    /// Repeated consecutive points (within `epsilon`, including the wrap around) are removed,
    /// winding is made counter clockwise for solids and clockwise for holes, and the contour is
    /// rotated to start at its lowest then leftmost vertex.
    pub(crate) fn from_points(
        points: &[Point<T>],
        polarity: Polarity,
        epsilon: T,
    ) -> Result<Self, ConstructionError> {
        let max = T::MAX_COORDINATE;
        if let Some(p) = points
            .iter()
            .find(|p| !(p.x >= -max && p.x <= max && p.y >= -max && p.y <= max))
        {
            return Err(ConstructionError::CoordinateOutOfRange {
                x: p.x.as_f64(),
                y: p.y.as_f64(),
                max: max.as_f64(),
            });
        }

        let mut pts: Vec<Point<T>> = Vec::with_capacity(points.len());
        for &p in points {
            if pts.last().is_none_or(|last| !last.fuzzy_eq_eps(p, epsilon)) {
                pts.push(p);
            }
        }
        while pts.len() > 1 && pts[0].fuzzy_eq_eps(pts[pts.len() - 1], epsilon) {
            pts.pop();
        }

        if pts.len() < 3 {
            return Err(ConstructionError::TooFewPoints { count: pts.len() });
        }

        if signed_area_x2(&pts) == T::zero() {
            return Err(ConstructionError::ZeroArea);
        }

        let mut doubled: Vec<Point<T>> = pts.iter().map(|p| p.doubled()).collect();
        Ok(Self::from_doubled(&mut doubled, polarity))
    }

    /// Node from a doubled, validated point list.
    pub(crate) fn from_doubled(points: &mut [Point<T>], polarity: Polarity) -> Self {
        match polarity {
            Polarity::Solid => ensure_counter_clockwise(points),
            Polarity::Hole => ensure_clockwise(points),
        }

        let mut contour = Contour::from_doubled(points);
        contour.rotate_to_lowest_left();

        let mut node = PolyNode {
            contour,
            polarity,
            parent: None,
            children: Vec::new(),
            siblings: Vec::new(),
            hull: Vec::new(),
            max_x: T::zero(),
        };
        node.update_cached_bounds();
        node
    }

    pub(crate) fn update_cached_bounds(&mut self) {
        let points: Vec<Point<T>> = self.contour.points().collect();
        self.hull = convex_hull(&points);
        self.max_x = points
            .iter()
            .fold(T::min_value(), |acc, p| acc.max_of(p.x))
            + T::one();
    }

    /// Flip the polarity and winding (used when nesting a contour under a node).
    pub(crate) fn set_polarity(&mut self, polarity: Polarity) {
        if self.polarity != polarity {
            self.polarity = polarity;
            self.contour.reverse();
            self.contour.rotate_to_lowest_left();
        }
    }

    /// Contour positions (actual coordinates) starting at the lowest then leftmost vertex.
    #[inline]
    pub fn contour(&self) -> Vec<Point<T>> {
        self.contour.halved_points()
    }

    /// Contour with doubled positions and Boolean operation bookkeeping.
    #[inline]
    pub fn raw_contour(&self) -> &Contour<T> {
        &self.contour
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn siblings(&self) -> &[NodeId] {
        &self.siblings
    }

    /// Convex hull of the contour (actual coordinates, counter clockwise).
    pub fn hull(&self) -> Vec<Point<T>> {
        self.hull.iter().map(|p| p.halved()).collect()
    }

    /// Area enclosed by this contour (always positive, holes are not subtracted).
    ///
    /// Integer coordinate types truncate half units.
    #[inline]
    pub fn area(&self) -> T {
        // doubled space area x2 is 8x the actual area
        self.contour.signed_area_x2().abs() / (T::two() * T::two() * T::two())
    }

    /// Length of the closed contour.
    pub fn perimeter(&self) -> f64 {
        self.contour.edges().map(|e| e.length()).sum::<f64>() / 2.0
    }

    /// Location of `point` (actual coordinates) relative to this contour.
    #[inline]
    pub fn locate(&self, point: Point<T>) -> PointLocation {
        point_location(self, point.doubled(), T::zero())
    }
}
