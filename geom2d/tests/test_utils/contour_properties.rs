use geom2d::{
    AABB,
    core::{
        math::{Point, signed_area_x2},
        traits::{Coord, FuzzyEq},
    },
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a contour for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct ContourProperties {
    pub vertex_count: usize,
    /// Absolute area enclosed.
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl ContourProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-6;

    pub fn from_contour<T>(contour: &[Point<T>]) -> Self
    where
        T: Coord,
    {
        let pts: Vec<Point<f64>> = contour.iter().map(|p| p.as_f64()).collect();
        let n = pts.len();
        let path_length = (0..n).map(|i| pts[i].distance(pts[(i + 1) % n])).sum();
        let extents = pts.iter().skip(1).fold(
            AABB::new(pts[0].x, pts[0].y, pts[0].x, pts[0].y),
            |bb, p| {
                AABB::new(
                    bb.min_x.min(p.x),
                    bb.min_y.min(p.y),
                    bb.max_x.max(p.x),
                    bb.max_y.max(p.y),
                )
            },
        );

        Self {
            vertex_count: n,
            area: signed_area_x2(&pts).abs() / 2.0,
            path_length,
            extents,
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.path_length.fuzzy_eq_eps(other.path_length, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set<T>(contours: &[Vec<Point<T>>]) -> Vec<ContourProperties>
where
    T: Coord,
{
    contours
        .iter()
        .map(|c| ContourProperties::from_contour(c))
        .collect()
}

pub fn property_sets_match(
    result_set: &[ContourProperties],
    expected_set: &[ContourProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // using simple N^2 comparisons to compare property sets (sets are always relatively small)
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, ContourProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Contour rotated to start at its lowest then leftmost point and wound counter clockwise, used to
/// compare contours regardless of start point and direction.
pub fn normalized_contour(contour: &[Point<i64>]) -> Vec<Point<i64>> {
    let mut pts = contour.to_vec();
    if signed_area_x2(&pts) < 0 {
        pts.reverse();
    }
    let start = (0..pts.len())
        .min_by_key(|&i| (pts[i].y, pts[i].x))
        .unwrap();
    pts.rotate_left(start);
    pts
}

/// Normalized contours sorted so sets of contours compare regardless of order.
pub fn normalized_contour_set(contours: &[Vec<Point<i64>>]) -> Vec<Vec<Point<i64>>> {
    let mut set: Vec<Vec<Point<i64>>> = contours.iter().map(|c| normalized_contour(c)).collect();
    set.sort_by_key(|c| c.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
    set
}
