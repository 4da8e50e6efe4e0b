mod test_utils;

use geom2d::{
    core::math::Point,
    polytree::{BooleanOp, BooleanOptions, Polarity, PolyTree},
};
use test_utils::{
    contour_from, contours_debug_str, normalized_contour_set, overlapping_squares_with_holes,
    square, tree_debug_str,
};

fn contours(a: &mut PolyTree<i64>, b: &mut PolyTree<i64>, op: BooleanOp) -> Vec<Vec<Point<i64>>> {
    a.boolean_contours(b, op, &BooleanOptions::new()).unwrap()
}

fn all_contours(tree: &PolyTree<i64>) -> Vec<Vec<Point<i64>>> {
    tree.node_ids().into_iter().map(|id| tree.contour(id)).collect()
}

#[test]
fn union_of_squares_with_holes() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let result = contours(&mut a, &mut b, BooleanOp::Union);
    let expected = vec![
        contour_from(&[(20, 12), (20, 20), (12, 20), (12, 22), (22, 22), (22, 12)]),
        contour_from(&[
            (7, 20),
            (0, 20),
            (0, 0),
            (20, 0),
            (20, 7),
            (27, 7),
            (27, 27),
            (7, 27),
        ]),
        contour_from(&[(12, 15), (15, 15), (15, 12), (12, 12)]),
        contour_from(&[(15, 7), (15, 5), (5, 5), (5, 15), (7, 15), (7, 7)]),
    ];
    assert_eq!(result, expected, "\n{}", contours_debug_str(&result));

    let tree = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(tree.len(), 4, "\n{}", tree_debug_str(&tree));
    let root = tree.node(tree.root());
    assert_eq!(root.polarity(), Polarity::Solid);
    assert_eq!(root.children().len(), 3);
    assert!(root.siblings().is_empty());
    for &child in root.children() {
        assert_eq!(tree.node(child).polarity(), Polarity::Hole);
    }
    assert_eq!(tree.area(), 550);
}

#[test]
fn intersection_of_squares_with_holes() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let result = contours(&mut a, &mut b, BooleanOp::Intersection);
    let expected = vec![
        contour_from(&[(20, 7), (20, 12), (15, 12), (15, 7)]),
        contour_from(&[(12, 20), (7, 20), (7, 15), (12, 15)]),
    ];
    assert_eq!(result, expected, "\n{}", contours_debug_str(&result));

    let tree = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node(tree.root()).siblings().len(), 1);
    assert_eq!(tree.area(), 50);
}

#[test]
fn subtraction_of_squares_with_holes() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let a_minus_b = contours(&mut a, &mut b, BooleanOp::Subtraction);
    let expected = vec![
        contour_from(&[(20, 12), (20, 20), (12, 20), (12, 15), (15, 15), (15, 12)]),
        contour_from(&[
            (7, 20),
            (0, 20),
            (0, 0),
            (20, 0),
            (20, 7),
            (15, 7),
            (15, 5),
            (5, 5),
            (5, 15),
            (7, 15),
        ]),
    ];
    assert_eq!(a_minus_b, expected, "\n{}", contours_debug_str(&a_minus_b));

    let b_minus_a = contours(&mut b, &mut a, BooleanOp::Subtraction);
    let expected = vec![
        contour_from(&[
            (20, 7),
            (27, 7),
            (27, 27),
            (7, 27),
            (7, 20),
            (12, 20),
            (12, 22),
            (22, 22),
            (22, 12),
            (20, 12),
        ]),
        contour_from(&[(7, 15), (7, 7), (15, 7), (15, 12), (12, 12), (12, 15)]),
    ];
    assert_eq!(b_minus_a, expected, "\n{}", contours_debug_str(&b_minus_a));
    assert_ne!(
        normalized_contour_set(&a_minus_b),
        normalized_contour_set(&b_minus_a)
    );

    let tree = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(tree.area(), 250);
}

#[test]
fn floating_point_coordinates_match_integer_results() {
    let (mut a, mut b) = overlapping_squares_with_holes::<f64>();
    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(union.area(), 550.0);
    let intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(intersection.area(), 50.0);
    let difference = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(difference.area(), 250.0);
}

#[test]
fn area_conservation() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    let intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(a.area() + b.area(), union.area() + intersection.area());

    let mut c = PolyTree::new(&square(0, 0, 10), Polarity::Solid).unwrap();
    let mut d = PolyTree::new(&square(3, -4, 10), Polarity::Solid).unwrap();
    let union = c.boolean_operation(&mut d, BooleanOp::Union).unwrap().unwrap();
    let intersection = c
        .boolean_operation(&mut d, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(union.area(), 158);
    assert_eq!(intersection.area(), 42);
    assert_eq!(c.area() + d.area(), union.area() + intersection.area());
}

#[test]
fn union_and_intersection_commute() {
    for op in [BooleanOp::Union, BooleanOp::Intersection] {
        let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
        let ab = contours(&mut a, &mut b, op);
        let ba = contours(&mut b, &mut a, op);
        assert_eq!(
            normalized_contour_set(&ab),
            normalized_contour_set(&ba),
            "op: {:?}\nab:\n{}\nba:\n{}",
            op,
            contours_debug_str(&ab),
            contours_debug_str(&ba)
        );
    }
}

#[test]
fn subtraction_and_intersection_cover_first_operand() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let difference = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    let mut intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(difference.area() + intersection.area(), a.area());

    // difference and intersection only share boundaries
    let mut difference = difference;
    let overlap = difference
        .boolean_operation(&mut intersection, BooleanOp::Intersection)
        .unwrap();
    assert!(overlap.map_or(0, |t| t.area()) == 0);
}

#[test]
fn contained_operand() {
    let mut a = PolyTree::new(&square(0, 0, 20), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&square(5, 5, 5), Polarity::Solid).unwrap();

    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(all_contours(&union), vec![square(0, 0, 20)]);

    let intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(all_contours(&intersection), vec![square(5, 5, 5)]);

    // B lies strictly inside A, so subtracting it keeps A and adds B as a hole
    let difference = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(difference.contour(difference.root()), square(0, 0, 20));
    assert_eq!(difference.len(), 2);
    let hole = difference.node(difference.root()).children()[0];
    assert_eq!(difference.node(hole).polarity(), Polarity::Hole);
    assert_eq!(difference.area(), 375);

    // nothing is left when subtracting the container
    assert!(b
        .boolean_operation(&mut a, BooleanOp::Subtraction)
        .unwrap()
        .is_none());
}

/// Areas of union, intersection, A - B and B - A.
fn operation_areas(a: &[Point<i64>], b: &[Point<i64>]) -> [i64; 4] {
    let mut a = PolyTree::new(a, Polarity::Solid).unwrap();
    let mut b = PolyTree::new(b, Polarity::Solid).unwrap();
    let area = |t: Option<PolyTree<i64>>| t.map_or(0, |t| t.area());
    [
        area(a.boolean_operation(&mut b, BooleanOp::Union).unwrap()),
        area(a.boolean_operation(&mut b, BooleanOp::Intersection).unwrap()),
        area(a.boolean_operation(&mut b, BooleanOp::Subtraction).unwrap()),
        area(b.boolean_operation(&mut a, BooleanOp::Subtraction).unwrap()),
    ]
}

#[test]
fn crossing_at_vertices_lying_on_edges() {
    // diamond vertices (20, 6) and (6, 20) lie on the square edges
    let diamond = contour_from(&[(20, 6), (34, 20), (20, 34), (6, 20)]);
    assert_eq!(operation_areas(&square(0, 0, 20), &diamond), [694, 98, 302, 294]);

    let mut a = PolyTree::new(&square(0, 0, 20), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&diamond, Polarity::Solid).unwrap();
    let result = contours(&mut a, &mut b, BooleanOp::Intersection);
    assert_eq!(
        result,
        vec![contour_from(&[(20, 6), (20, 20), (6, 20)])],
        "\n{}",
        contours_debug_str(&result)
    );

    // only the dipping vertex (20, 10) touches the square edge before the top edge crosses it
    let pentagon = contour_from(&[(10, 8), (20, 10), (30, 8), (30, 16), (10, 16)]);
    assert_eq!(operation_areas(&square(0, 0, 20), &pentagon), [470, 70, 330, 70]);
}

#[test]
fn crossing_through_a_corner() {
    let triangle = contour_from(&[(10, 10), (30, 30), (10, 30)]);
    assert_eq!(operation_areas(&square(0, 0, 20), &triangle), [550, 50, 350, 150]);

    let mut a = PolyTree::new(&square(0, 0, 20), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&triangle, Polarity::Solid).unwrap();
    let union = contours(&mut a, &mut b, BooleanOp::Union);
    let expected = vec![contour_from(&[
        (10, 20),
        (0, 20),
        (0, 0),
        (20, 0),
        (20, 20),
        (30, 30),
        (10, 30),
    ])];
    assert_eq!(union, expected, "\n{}", contours_debug_str(&union));
}

#[test]
fn operands_sharing_boundary_runs() {
    // overlap along the bottom and top edges
    let shifted = square(5, 0, 10);
    assert_eq!(operation_areas(&square(0, 0, 10), &shifted), [150, 50, 50, 50]);

    let mut a = PolyTree::new(&square(0, 0, 10), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&shifted, Polarity::Solid).unwrap();
    let difference = contours(&mut a, &mut b, BooleanOp::Subtraction);
    assert_eq!(
        normalized_contour_set(&difference),
        normalized_contour_set(&[contour_from(&[(0, 0), (5, 0), (5, 10), (0, 10)])]),
        "\n{}",
        contours_debug_str(&difference)
    );

    // squares sharing a whole edge stay separate siblings in the union
    let mut b = PolyTree::new(&square(10, 0, 10), Polarity::Solid).unwrap();
    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(union.len(), 2);
    assert_eq!(union.area(), 200);
    assert!(a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .is_none());
}

#[test]
fn disjoint_operands() {
    let mut a = PolyTree::new(&square(0, 0, 10), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(&square(20, 0, 10), Polarity::Solid).unwrap();

    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(union.len(), 2);
    assert_eq!(
        normalized_contour_set(&all_contours(&union)),
        normalized_contour_set(&[square(0, 0, 10), square(20, 0, 10)])
    );
    let root = union.node(union.root());
    assert_eq!(root.siblings().len(), 1);
    assert_eq!(union.node(root.siblings()[0]).polarity(), Polarity::Solid);
    assert_eq!(union.area(), a.area() + b.area());

    assert!(a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .is_none());

    let difference = a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .unwrap();
    assert_eq!(all_contours(&difference), vec![square(0, 0, 10)]);
}

#[test]
fn identical_operands() {
    let mut a = PolyTree::new(&square(0, 0, 10), Polarity::Solid).unwrap();
    let mut b = a.clone();
    let union = a.boolean_operation(&mut b, BooleanOp::Union).unwrap().unwrap();
    assert_eq!(all_contours(&union), vec![square(0, 0, 10)]);
    let intersection = a
        .boolean_operation(&mut b, BooleanOp::Intersection)
        .unwrap()
        .unwrap();
    assert_eq!(all_contours(&intersection), vec![square(0, 0, 10)]);
    assert!(a
        .boolean_operation(&mut b, BooleanOp::Subtraction)
        .unwrap()
        .is_none());
}

#[test]
fn reset_is_idempotent_and_restores_input() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    let original = a.clone();
    a.boolean_operation(&mut b, BooleanOp::Union).unwrap();
    assert_ne!(a, original);

    a.reset_intersection_metadata_and_reorder();
    let once = a.clone();
    a.reset_intersection_metadata_and_reorder();
    assert_eq!(a, once);
    assert_eq!(a, original);
}

#[test]
fn trees_are_reusable_across_operations() {
    let (mut a, mut b) = overlapping_squares_with_holes::<i64>();
    for _ in 0..3 {
        for op in [BooleanOp::Union, BooleanOp::Intersection, BooleanOp::Subtraction] {
            let first = contours(&mut a, &mut b, op);
            let second = contours(&mut a, &mut b, op);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn snapping_with_epsilon() {
    let mut a = PolyTree::new(&square(0.0, 0.0, 10.0), Polarity::Solid).unwrap();
    let mut b = PolyTree::new(
        &[
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0000000001),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ],
        Polarity::Solid,
    )
    .unwrap();
    let options = BooleanOptions { epsilon: 1e-6 };
    let result = a
        .boolean_contours(&mut b, BooleanOp::Intersection, &options)
        .unwrap();
    assert_eq!(result.len(), 1);
    assert!(result[0].contains(&Point::new(10.0, 5.0)));
}
