use super::{EntryExit, Partner, PointKind};
use crate::core::{
    math::{LineSegment, Point, signed_area_x2},
    traits::Coord,
};
use std::ops::Index;

/// Vertex of a [Contour] with the bookkeeping used by Boolean operations.
///
/// `point` is stored with doubled coordinates. `intersection` is set on vertices where the two
/// operands cross, either inserted vertices or original vertices promoted in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourVertex<T> {
    pub point: Point<T>,
    pub kind: PointKind,
    pub intersection: bool,
    pub entry_exit: EntryExit,
    pub visited: bool,
    pub partner: Option<Partner>,
}

impl<T> ContourVertex<T>
where
    T: Coord,
{
    /// Vertex given at construction (`point` already doubled).
    #[inline]
    pub fn original(point: Point<T>) -> Self {
        ContourVertex {
            point,
            kind: PointKind::Original,
            intersection: false,
            entry_exit: EntryExit::Unset,
            visited: false,
            partner: None,
        }
    }

    /// Vertex inserted where the other operand meets this contour (`point` already doubled).
    #[inline]
    pub fn inserted(point: Point<T>) -> Self {
        ContourVertex {
            kind: PointKind::AddedIntersection,
            ..ContourVertex::original(point)
        }
    }

    /// Inserted vertex where the operands cross (`point` already doubled).
    #[inline]
    pub fn intersection(point: Point<T>) -> Self {
        ContourVertex {
            intersection: true,
            ..ContourVertex::inserted(point)
        }
    }

    #[inline]
    pub fn is_original(&self) -> bool {
        self.kind == PointKind::Original
    }

    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.intersection
    }

    /// Inserted vertex where the operands only touch, never part of a result contour.
    #[inline]
    pub fn is_contact(&self) -> bool {
        self.kind == PointKind::AddedIntersection && !self.intersection
    }
}

/// Closed sequence of vertices (the last vertex connects back to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<T> {
    vertices: Vec<ContourVertex<T>>,
}

impl<T> Contour<T>
where
    T: Coord,
{
    /// Contour of original vertices from points that are already doubled.
    pub(crate) fn from_doubled(points: &[Point<T>]) -> Self {
        Contour {
            vertices: points.iter().map(|&p| ContourVertex::original(p)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[ContourVertex<T>] {
        &self.vertices
    }

    #[inline]
    pub(crate) fn vertices_mut(&mut self) -> &mut [ContourVertex<T>] {
        &mut self.vertices
    }

    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.len() { 0 } else { next }
    }

    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 { self.len() - 1 } else { index - 1 }
    }

    /// Iterate the (doubled) vertex points.
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    /// Vertex points at their actual (halved) positions.
    pub fn halved_points(&self) -> Vec<Point<T>> {
        self.points().map(|p| p.halved()).collect()
    }

    /// Iterate the (doubled) edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment<T>> + '_ {
        (0..self.len()).map(move |i| {
            LineSegment::new(
                self.vertices[i].point,
                self.vertices[self.next_index(i)].point,
            )
        })
    }

    /// Indexes of the original vertices, in contour order.
    pub(crate) fn original_indexes(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_original())
            .map(|(i, _)| i)
            .collect()
    }

    /// Actual positions of every vertex except contact vertices.
    pub(crate) fn result_points(&self) -> Vec<Point<T>> {
        self.vertices
            .iter()
            .filter(|v| !v.is_contact())
            .map(|v| v.point.halved())
            .collect()
    }

    /// Signed area x2 in doubled space (4x the signed area x2 of the actual contour).
    #[inline]
    pub(crate) fn signed_area_x2(&self) -> T {
        let points: Vec<Point<T>> = self.points().collect();
        signed_area_x2(&points)
    }

    /// Returns true if any vertex has position `p` (doubled) within `epsilon`.
    pub(crate) fn has_vertex_at(&self, p: Point<T>, epsilon: T) -> bool {
        self.position_near(p, epsilon).is_some()
    }

    /// Index of the first vertex at `p` (doubled) within `epsilon`.
    pub(crate) fn position_near(&self, p: Point<T>, epsilon: T) -> Option<usize> {
        self.vertices.iter().position(|v| v.point.fuzzy_eq_eps(p, epsilon))
    }

    pub(crate) fn has_intersections(&self) -> bool {
        self.vertices.iter().any(|v| v.is_intersection())
    }

    #[inline]
    pub(crate) fn insert(&mut self, index: usize, vertex: ContourVertex<T>) {
        self.vertices.insert(index, vertex);
    }

    /// Remove every inserted vertex and clear the traversal bookkeeping of the rest.
    pub(crate) fn strip_intersections(&mut self) {
        self.vertices.retain(|v| v.is_original());
        for v in self.vertices.iter_mut() {
            v.intersection = false;
            v.entry_exit = EntryExit::Unset;
            v.visited = false;
            v.partner = None;
        }
    }

    /// Rotate so index 0 is the lowest (then leftmost) vertex.
    pub(crate) fn rotate_to_lowest_left(&mut self) {
        let start = self
            .vertices
            .iter()
            .enumerate()
            .fold(0, |best, (i, v)| {
                if v.point.is_lower_left_of(self.vertices[best].point) {
                    i
                } else {
                    best
                }
            });
        self.vertices.rotate_left(start);
    }

    /// Reverse the vertex order (flips winding).
    #[inline]
    pub(crate) fn reverse(&mut self) {
        self.vertices.reverse();
    }
}

impl<T> Index<usize> for Contour<T> {
    type Output = ContourVertex<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}
