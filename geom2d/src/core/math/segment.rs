use super::{Orientation, Point, orientation};
use crate::core::traits::Coord;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line segment from `start` to `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LineSegment<T = f64> {
    pub start: Point<T>,
    pub end: Point<T>,
}

/// Relationship between two line segments `AB` (`self`) and `CD` (`other`).
///
/// The non collinear variants are only reported when exactly one kind of contact exists,
/// collinear variants describe how the two segments overlap along their shared line.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentRelationship {
    /// Segments do not touch.
    Miss,
    /// Segments cross at a single point interior to both.
    Intersects,
    /// `A` equals `C`.
    AeqC,
    /// `A` equals `D`.
    AeqD,
    /// `B` equals `C`.
    BeqC,
    /// `B` equals `D`.
    BeqD,
    /// `A` lies on the interior of `CD`.
    AonCD,
    /// `B` lies on the interior of `CD`.
    BonCD,
    /// `C` lies on the interior of `AB`.
    ConAB,
    /// `D` lies on the interior of `AB`.
    DonAB,
    /// Segments share a line but do not touch.
    CollinearDisjoint,
    /// Segments share a line, `A` lies on `CD` (partial overlap or end to end contact).
    CollinearAonCD,
    /// Segments share a line, `B` lies on `CD` (partial overlap or end to end contact).
    CollinearBonCD,
    /// Segments share a line and `AB` lies entirely within `CD`.
    CollinearABinCD,
    /// Segments share a line and `CD` lies entirely within `AB`.
    CollinearCDinAB,
    /// Segments have the same end points (in either direction).
    CollinearEqual,
}

impl SegmentRelationship {
    /// Returns true if the segments share at least one point.
    #[inline]
    pub fn is_touching(&self) -> bool {
        !matches!(
            self,
            SegmentRelationship::Miss | SegmentRelationship::CollinearDisjoint
        )
    }

    /// Returns true if the relationship is one of the collinear variants.
    #[inline]
    pub fn is_collinear(&self) -> bool {
        use SegmentRelationship::*;
        matches!(
            self,
            CollinearDisjoint
                | CollinearAonCD
                | CollinearBonCD
                | CollinearABinCD
                | CollinearCDinAB
                | CollinearEqual
        )
    }
}

impl<T> LineSegment<T>
where
    T: Coord,
{
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        LineSegment { start, end }
    }

    /// Segment with start and end swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        LineSegment::new(self.end, self.start)
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.start.distance_squared(self.end)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment (computed in `f64` so integer segments do not truncate).
    #[inline]
    pub fn midpoint(&self) -> Point<f64> {
        let s = self.start.as_f64();
        let e = self.end.as_f64();
        Point::new((s.x + e.x) / 2.0, (s.y + e.y) / 2.0)
    }

    /// Axis aligned bounding box of the segment.
    #[inline]
    pub fn bounding_box(&self) -> AABB<T> {
        AABB::new(
            self.start.x.min_of(self.end.x),
            self.start.y.min_of(self.end.y),
            self.start.x.max_of(self.end.x),
            self.start.y.max_of(self.end.y),
        )
    }

    /// Returns true if `p` lies on the segment (end points included).
    ///
    /// An `epsilon` of zero is an exact test, otherwise `p` is on the segment if its distance to
    /// the segment is within `epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// let seg = LineSegment::new(Point::new(0, 0), Point::new(10, 10));
    /// assert!(seg.contains_point_eps(Point::new(5, 5), 0));
    /// assert!(seg.contains_point_eps(Point::new(10, 10), 0));
    /// assert!(!seg.contains_point_eps(Point::new(5, 6), 0));
    /// assert!(!seg.contains_point_eps(Point::new(11, 11), 0));
    /// ```
    pub fn contains_point_eps(&self, p: Point<T>, epsilon: T) -> bool {
        if epsilon <= T::zero() {
            if orientation(self.start, self.end, p) != Orientation::Collinear {
                return false;
            }
            let (min_x, max_x) = (self.start.x.min_of(self.end.x), self.start.x.max_of(self.end.x));
            let (min_y, max_y) = (self.start.y.min_of(self.end.y), self.start.y.max_of(self.end.y));
            return p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y;
        }

        dist_to_segment(self.start.as_f64(), self.end.as_f64(), p.as_f64()) <= epsilon.as_f64()
    }

    /// Shortest distance from `p` to any point on the segment.
    #[inline]
    pub fn distance_to_point(&self, p: Point<T>) -> f64 {
        dist_to_segment(self.start.as_f64(), self.end.as_f64(), p.as_f64())
    }

    /// Same as [LineSegment::contains_point_eps] using an exact test.
    #[inline]
    pub fn contains_point(&self, p: Point<T>) -> bool {
        self.contains_point_eps(p, T::zero())
    }

    /// Single intersection point between this segment and `other`.
    ///
    /// The result is always computed in `f64`, even for integer segments. Collinear segments
    /// overlapping by more than a point have no single intersection point and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// let s1 = LineSegment::new(Point::new(0, 0), Point::new(4, 4));
    /// let s2 = LineSegment::new(Point::new(0, 4), Point::new(4, 0));
    /// assert_eq!(s1.intersection(&s2), Some(Point::new(2.0, 2.0)));
    ///
    /// let s3 = LineSegment::new(Point::new(0, 1), Point::new(4, 5));
    /// assert_eq!(s1.intersection(&s3), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &LineSegment<T>) -> Option<Point<f64>> {
        segment_intersection(self, other)
    }

    /// Classify how this segment (`AB`) relates to `other` (`CD`), see [SegmentRelationship].
    ///
    /// Point equality and on segment tests use `epsilon` (zero is exact).
    ///
    /// # Examples
    ///
    /// ```
    /// # use geom2d::core::math::*;
    /// let ab = LineSegment::new(Point::new(0, 0), Point::new(10, 0));
    /// let cd = LineSegment::new(Point::new(5, -5), Point::new(5, 5));
    /// assert_eq!(ab.relationship(&cd, 0), SegmentRelationship::Intersects);
    ///
    /// let cd = LineSegment::new(Point::new(2, 0), Point::new(4, 0));
    /// assert_eq!(ab.relationship(&cd, 0), SegmentRelationship::CollinearCDinAB);
    /// ```
    pub fn relationship(&self, other: &LineSegment<T>, epsilon: T) -> SegmentRelationship {
        use SegmentRelationship::*;

        let (a, b) = (self.start, self.end);
        let (c, d) = (other.start, other.end);
        let eq = |p: Point<T>, q: Point<T>| p.fuzzy_eq_eps(q, epsilon);

        if (eq(a, c) && eq(b, d)) || (eq(a, d) && eq(b, c)) {
            return CollinearEqual;
        }

        let a_on_cd = other.contains_point_eps(a, epsilon);
        let b_on_cd = other.contains_point_eps(b, epsilon);
        let c_on_ab = self.contains_point_eps(c, epsilon);
        let d_on_ab = self.contains_point_eps(d, epsilon);

        if on_line(a, b, c, epsilon) && on_line(a, b, d, epsilon) {
            return if a_on_cd && b_on_cd {
                CollinearABinCD
            } else if c_on_ab && d_on_ab {
                CollinearCDinAB
            } else if a_on_cd {
                CollinearAonCD
            } else if b_on_cd {
                CollinearBonCD
            } else {
                CollinearDisjoint
            };
        }

        if eq(a, c) {
            return AeqC;
        }
        if eq(a, d) {
            return AeqD;
        }
        if eq(b, c) {
            return BeqC;
        }
        if eq(b, d) {
            return BeqD;
        }

        if a_on_cd {
            return AonCD;
        }
        if b_on_cd {
            return BonCD;
        }
        if c_on_ab {
            return ConAB;
        }
        if d_on_ab {
            return DonAB;
        }

        let o1 = orientation(a, b, c);
        let o2 = orientation(a, b, d);
        let o3 = orientation(c, d, a);
        let o4 = orientation(c, d, b);
        if o1 != o2 && o3 != o4 {
            return Intersects;
        }

        Miss
    }
}

/// Same as [LineSegment::relationship].
#[inline]
pub fn segment_relationship<T>(
    seg1: &LineSegment<T>,
    seg2: &LineSegment<T>,
    epsilon: T,
) -> SegmentRelationship
where
    T: Coord,
{
    seg1.relationship(seg2, epsilon)
}

/// Returns true if `p` is on the infinite line through `a` and `b`.
fn on_line<T>(a: Point<T>, b: Point<T>, p: Point<T>, epsilon: T) -> bool
where
    T: Coord,
{
    if epsilon <= T::zero() {
        return orientation(a, b, p) == Orientation::Collinear;
    }

    let a = a.as_f64();
    let b = b.as_f64();
    let p = p.as_f64();
    let dir = b - a;
    let len = dir.length();
    if len == 0.0 {
        return p.distance(a) <= epsilon.as_f64();
    }
    (dir.perp_dot(p - a) / len).abs() <= epsilon.as_f64()
}

/// Distance from `p` to the segment `p0` -> `p1`.
fn dist_to_segment(p0: Point<f64>, p1: Point<f64>, p: Point<f64>) -> f64 {
    let v = p1 - p0;
    let len_sq = v.length_squared();
    if len_sq == 0.0 {
        return p.distance(p0);
    }

    let t = ((p - p0).dot(v) / len_sq).clamp(0.0, 1.0);
    p.distance(p0 + v.scale(t))
}

/// Holds the result of finding the intersect between two line segments (in parametric form).
#[derive(Debug, Copy, Clone, PartialEq)]
enum SegmentIntr {
    /// Segments are parallel and not collinear or otherwise do not touch.
    NoIntersect,
    /// Segments touch at exactly one point.
    TrueIntersect { seg1_t: f64 },
    /// Segments are collinear and overlap by more than a point.
    Overlapping,
}

/// Parametric intersect of `v1->v2` and `u1->u2` using perpendicular products.
///
/// `P(t) = p0 + t * (p1 - p0)` for both segments, `seg1_t` is the parameter along `v1->v2`.
fn segment_intr(
    v1: Point<f64>,
    v2: Point<f64>,
    u1: Point<f64>,
    u2: Point<f64>,
) -> SegmentIntr {
    use SegmentIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    if v_pdot_u != 0.0 {
        // not parallel
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(0.0..=1.0).contains(&seg1_t) || !(0.0..=1.0).contains(&seg2_t) {
            return NoIntersect;
        }
        return TrueIntersect { seg1_t };
    }

    if v.perp_dot(w) != 0.0 || u.perp_dot(w) != 0.0 {
        // parallel and not collinear
        return NoIntersect;
    }

    let v_is_point = v1 == v2;
    let u_is_point = u1 == u2;
    if v_is_point || u_is_point {
        // degenerate segments are not used by polygon edges, treat a shared point as the intersect
        if v_is_point && u_is_point {
            return if v1 == u1 {
                TrueIntersect { seg1_t: 0.0 }
            } else {
                NoIntersect
            };
        }
        if v_is_point {
            return if dist_to_segment(u1, u2, v1) == 0.0 {
                TrueIntersect { seg1_t: 0.0 }
            } else {
                NoIntersect
            };
        }
        let t = (u1 - v1).dot(v) / v.length_squared();
        return if (0.0..=1.0).contains(&t) {
            TrueIntersect { seg1_t: t }
        } else {
            NoIntersect
        };
    }

    // collinear, project seg1 end points onto seg2
    let w2 = v2 - u1;
    let (mut seg2_t0, mut seg2_t1) = if u.x == 0.0 {
        (w.y / u.y, w2.y / u.y)
    } else {
        (w.x / u.x, w2.x / u.x)
    };
    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    if seg2_t0 > 1.0 || seg2_t1 < 0.0 {
        return NoIntersect;
    }

    seg2_t0 = seg2_t0.max(0.0);
    seg2_t1 = seg2_t1.min(1.0);

    if seg2_t1 - seg2_t0 == 0.0 {
        // segments line up end to end
        let seg1_t = if v1 == u1 || v1 == u2 { 0.0 } else { 1.0 };
        return TrueIntersect { seg1_t };
    }

    Overlapping
}

/// Intersection point of `seg1` and `seg2`, computed in `f64`.
///
/// Returns `None` if the segments do not touch or if they overlap along a shared line by more than
/// a single point.
pub fn segment_intersection<T>(seg1: &LineSegment<T>, seg2: &LineSegment<T>) -> Option<Point<f64>>
where
    T: Coord,
{
    let v1 = seg1.start.as_f64();
    let v2 = seg1.end.as_f64();
    match segment_intr(v1, v2, seg2.start.as_f64(), seg2.end.as_f64()) {
        SegmentIntr::TrueIntersect { seg1_t } => {
            // return exact end points rather than interpolating
            if seg1_t == 0.0 {
                Some(v1)
            } else if seg1_t == 1.0 {
                Some(v2)
            } else {
                Some(v1 + (v2 - v1).scale(seg1_t))
            }
        }
        SegmentIntr::NoIntersect | SegmentIntr::Overlapping => None,
    }
}
