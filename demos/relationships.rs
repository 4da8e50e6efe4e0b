use geom2d::{
    core::math::{Circle, LineSegment, Point, Rectangle, Relationship, SegmentRelationship},
    polytree::{Polarity, PolyTree},
};

fn main() {
    segments();
    tree_queries();
}

fn segments() {
    println!("Classifying segment pairs...");

    let seg = |x0, y0, x1, y1| LineSegment::new(Point::new(x0, y0), Point::new(x1, y1));
    let ab = seg(0, 0, 10, 0);
    let cases = [
        (seg(5, -5, 5, 5), SegmentRelationship::Intersects),
        (seg(10, 0, 10, 5), SegmentRelationship::BeqC),
        (seg(5, 0, 5, 5), SegmentRelationship::ConAB),
        (seg(5, 0, 15, 0), SegmentRelationship::CollinearBonCD),
        (seg(0, 5, 10, 5), SegmentRelationship::Miss),
    ];
    for (cd, expected) in cases {
        let rel = ab.relationship(&cd, 0);
        assert_eq!(rel, expected);
        println!("{:?} vs {:?}: {:?} (intersect {:?})", ab, cd, rel, ab.intersection(&cd));
    }
}

fn tree_queries() {
    println!("Querying a tree against other shapes...");

    let tree = PolyTree::new(
        &[
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(20, 20),
            Point::new(0, 20),
        ],
        Polarity::Solid,
    )
    .unwrap();
    let root = tree.root();

    let rel = tree.relationship_to_point(Point::new(5, 5));
    assert_eq!(rel[&root], Relationship::Contains, "Point inside");
    let rel = tree.relationship_to_point(Point::new(20, 5));
    assert_eq!(rel[&root], Relationship::Intersection, "Point on the boundary");

    let seg = LineSegment::new(Point::new(10, 10), Point::new(30, 10));
    let rel = tree.relationship_to_segment(&seg);
    assert_eq!(rel[&root], Relationship::Intersection, "Segment leaving the contour");

    let rect = Rectangle::new(Point::new(-5, -5), Point::new(25, 25));
    let rel = tree.relationship_to_rectangle(&rect);
    assert_eq!(rel[&root], Relationship::ContainedBy, "Rectangle around the contour");

    let circle = Circle::new(Point::new(10, 10), 3);
    let rel = tree.relationship_to_circle(&circle);
    assert_eq!(rel[&root], Relationship::Contains, "Circle inside the contour");

    let other = PolyTree::new(
        &[
            Point::new(20, 0),
            Point::new(30, 0),
            Point::new(30, 10),
            Point::new(20, 10),
        ],
        Polarity::Solid,
    )
    .unwrap();
    let rel = tree.relationship_to_polytree(&other);
    assert_eq!(
        rel[&(root, other.root())],
        Relationship::Intersection,
        "Contours sharing an edge touch"
    );

    for (id, r) in &rel {
        println!("{:?}: {:?}", id, r);
    }
}
