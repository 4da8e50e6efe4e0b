use geom2d::{
    core::math::Point,
    polytree::{BooleanOp, Polarity, PolyTree, PolyTreeOptions},
};

fn main() {
    overlapping_squares();
    squares_with_holes();
    special_cases();
}

fn square(x0: i64, y0: i64, size: i64) -> Vec<Point<i64>> {
    vec![
        Point::new(x0, y0),
        Point::new(x0 + size, y0),
        Point::new(x0 + size, y0 + size),
        Point::new(x0, y0 + size),
    ]
}

fn square_with_hole(x0: i64, y0: i64) -> PolyTree<i64> {
    let mut options = PolyTreeOptions::new();
    options
        .children
        .push(PolyTree::new(&square(x0 + 5, y0 + 5, 10), Polarity::Hole).unwrap());
    PolyTree::new_opt(&square(x0, y0, 20), Polarity::Solid, options).unwrap()
}

fn overlapping_squares() {
    println!("Boolean operations on overlapping squares...");

    let mut a = PolyTree::new(&square(0, 0, 10), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&square(5, 5, 10), Polarity::Solid).unwrap();

    for (op, expected_area) in [
        (BooleanOp::Union, 175),
        (BooleanOp::Intersection, 25),
        (BooleanOp::Subtraction, 75),
    ] {
        let result = a
            .boolean_operation(&mut b, op)
            .unwrap()
            .expect("overlapping squares give a non empty result");
        assert_eq!(result.area(), expected_area, "{:?} area", op);
        println!("{:?}: {:?}", op, result.contour(result.root()));
    }
}

fn squares_with_holes() {
    println!("Boolean operations on squares with holes...");

    let mut a = square_with_hole(0, 0);
    let mut b = square_with_hole(7, 7);

    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(union.area(), 550, "Union area");
    assert_eq!(union.len(), 4, "Union should have an outline and three holes");

    let intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(intersection.area(), 50, "Intersection area");
    assert_eq!(intersection.len(), 2, "Intersection should have two pieces");

    let difference = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(difference.area(), 250, "Difference area");

    for id in union.node_ids() {
        println!("union {:?}: {:?}", union.node(id).polarity(), union.contour(id));
    }
}

fn special_cases() {
    println!("Boolean operations without intersections...");

    let mut outer = PolyTree::new(&square(0, 0, 20), Polarity::Solid).unwrap();
    let mut inner = PolyTree::new(&square(5, 5, 5), Polarity::Solid).unwrap();

    let union = outer
        .boolean_operation(&mut inner, BooleanOp::Union)
        .unwrap()
        .unwrap();
    assert_eq!(union.area(), 400, "Union with a contained operand is the container");

    let difference = outer
        .boolean_operation(&mut inner, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(difference.area(), 375, "Subtracting a contained operand leaves a hole");

    let empty = inner
        .boolean_operation(&mut outer, BooleanOp::Subtraction)
        .unwrap();
    assert!(empty.is_none(), "Subtracting the container leaves nothing");

    let mut far = PolyTree::new(&square(100, 100, 5), Polarity::Solid).unwrap();
    let none = outer
        .boolean_operation(&mut far, BooleanOp::Intersection)
        .unwrap();
    assert!(none.is_none(), "Disjoint operands do not intersect");
}
