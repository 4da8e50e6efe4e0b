use geom2d::core::math::{
    LineSegment, Point, SegmentRelationship, segment_intersection, segment_relationship,
};

fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> LineSegment<i64> {
    LineSegment::new(Point::new(x0, y0), Point::new(x1, y1))
}

/// Relationship expected when the two segments swap roles (only defined for non collinear
/// variants plus the symmetric collinear ones).
fn swapped(r: SegmentRelationship) -> Option<SegmentRelationship> {
    use SegmentRelationship::*;
    Some(match r {
        Miss => Miss,
        Intersects => Intersects,
        AeqC => AeqC,
        AeqD => BeqC,
        BeqC => AeqD,
        BeqD => BeqD,
        AonCD => ConAB,
        BonCD => DonAB,
        ConAB => AonCD,
        DonAB => BonCD,
        CollinearDisjoint => CollinearDisjoint,
        CollinearEqual => CollinearEqual,
        CollinearABinCD => CollinearCDinAB,
        CollinearCDinAB => CollinearABinCD,
        CollinearAonCD | CollinearBonCD => return None,
    })
}

#[test]
fn every_relationship_variant() {
    use SegmentRelationship::*;
    let ab = seg(0, 0, 10, 0);
    let cases = [
        (seg(0, 5, 10, 5), Miss),
        (seg(20, -5, 20, 5), Miss),
        (seg(5, -5, 5, 5), Intersects),
        (seg(0, 0, 0, 5), AeqC),
        (seg(0, 5, 0, 0), AeqD),
        (seg(10, 0, 10, 5), BeqC),
        (seg(10, 5, 10, 0), BeqD),
        (seg(0, -5, 0, 5), AonCD),
        (seg(10, -5, 10, 5), BonCD),
        (seg(5, 0, 5, 5), ConAB),
        (seg(5, 5, 5, 0), DonAB),
        (seg(12, 0, 20, 0), CollinearDisjoint),
        (seg(-5, 0, 5, 0), CollinearAonCD),
        (seg(5, 0, 15, 0), CollinearBonCD),
        (seg(10, 0, 20, 0), CollinearBonCD),
        (seg(-5, 0, 15, 0), CollinearABinCD),
        (seg(0, 0, 15, 0), CollinearABinCD),
        (seg(2, 0, 4, 0), CollinearCDinAB),
        (seg(0, 0, 10, 0), CollinearEqual),
        (seg(10, 0, 0, 0), CollinearEqual),
    ];

    for (cd, expected) in cases {
        assert_eq!(ab.relationship(&cd, 0), expected, "cd: {:?}", cd);
        assert_eq!(segment_relationship(&ab, &cd, 0), expected);
        if let Some(swapped_expected) = swapped(expected) {
            assert_eq!(
                cd.relationship(&ab, 0),
                swapped_expected,
                "swapped cd: {:?}",
                cd
            );
        }
    }
}

#[test]
fn touching_and_collinear_flags() {
    use SegmentRelationship::*;
    assert!(!Miss.is_touching());
    assert!(!CollinearDisjoint.is_touching());
    assert!(CollinearDisjoint.is_collinear());
    assert!(Intersects.is_touching());
    assert!(!Intersects.is_collinear());
    assert!(BeqD.is_touching());
    assert!(CollinearEqual.is_touching());
    assert!(CollinearEqual.is_collinear());
    assert!(!DonAB.is_collinear());
}

#[test]
fn relationship_with_epsilon() {
    let ab = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let cd = LineSegment::new(Point::new(5.0, 1e-9), Point::new(5.0, 5.0));
    assert_eq!(ab.relationship(&cd, 0.0), SegmentRelationship::Miss);
    assert_eq!(ab.relationship(&cd, 1e-6), SegmentRelationship::ConAB);

    let cd = LineSegment::new(Point::new(10.0 + 1e-9, 0.0), Point::new(10.0, 5.0));
    assert_eq!(ab.relationship(&cd, 1e-6), SegmentRelationship::BeqC);
}

#[test]
fn intersection_points() {
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(5, -5, 5, 5)),
        Some(Point::new(5.0, 0.0))
    );
    assert_eq!(
        segment_intersection(&seg(0, 0, 3, 1), &seg(0, 1, 3, 0)),
        Some(Point::new(1.5, 0.5))
    );
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(10, 0, 10, 5)),
        Some(Point::new(10.0, 0.0))
    );
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(0, 5, 10, 5)),
        None
    );
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(2, 0, 4, 0)),
        None
    );
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(12, -5, 12, 5)),
        None
    );
    // collinear end to end contact is a single point
    assert_eq!(
        segment_intersection(&seg(0, 0, 10, 0), &seg(10, 0, 20, 0)),
        Some(Point::new(10.0, 0.0))
    );
}

#[test]
fn containment_and_distance() {
    let s = seg(0, 0, 10, 10);
    assert!(s.contains_point(Point::new(3, 3)));
    assert!(s.contains_point(Point::new(0, 0)));
    assert!(!s.contains_point(Point::new(3, 4)));
    assert!(!s.contains_point(Point::new(-1, -1)));
    assert_eq!(s.distance_to_point(Point::new(-3, -4)), 5.0);
    assert_eq!(s.length_squared(), 200);
    assert_eq!(s.midpoint(), Point::new(5.0, 5.0));
    assert_eq!(s.reversed().start, Point::new(10, 10));

    let f = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(f.contains_point_eps(Point::new(5.0, 0.5), 1.0));
    assert!(!f.contains_point_eps(Point::new(5.0, 1.5), 1.0));
}
