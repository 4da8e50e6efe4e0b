use geom2d::{
    core::{math::Point, traits::FuzzyEq},
    points,
    polytree::{nest_contours, ConstructionError, Polarity, PolyTree, PolyTreeOptions},
};

fn main() {
    construction();
    nesting();
    invalid_input();
}

fn construction() {
    println!("Building a square with a hole...");

    let hole = PolyTree::new(
        &points![(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)],
        Polarity::Hole,
    )
    .unwrap();

    let mut options = PolyTreeOptions::new();
    options.children.push(hole);
    // given clockwise, stored counter clockwise because the root is solid
    let tree = PolyTree::new_opt(
        &points![(0.0, 20.0), (20.0, 20.0), (20.0, 0.0), (0.0, 0.0)],
        Polarity::Solid,
        options,
    )
    .unwrap();

    assert_eq!(tree.len(), 2, "Tree should hold the outline and the hole");
    assert!(
        tree.area().fuzzy_eq(300.0),
        "Area should exclude the hole"
    );
    assert!(
        tree.perimeter().fuzzy_eq(120.0),
        "Perimeter should include the hole"
    );
    assert_eq!(
        tree.contour(tree.root())[0],
        Point::new(0.0, 0.0),
        "Contour should start at its lowest then leftmost vertex"
    );

    for id in tree.node_ids() {
        let node = tree.node(id);
        println!(
            "{:?} {:?}: {:?}",
            id,
            node.polarity(),
            tree.contour(id)
        );
    }

    let bb = tree.bounding_box();
    println!(
        "Bounding box: ({}, {}) - ({}, {})",
        bb.min_x, bb.min_y, bb.max_x, bb.max_y
    );
}

fn nesting() {
    println!("Nesting a flat list of contours...");

    let contours = vec![
        points![(4, 4), (6, 4), (6, 6), (4, 6)],
        points![(0, 0), (10, 0), (10, 10), (0, 10)],
        points![(2, 2), (8, 2), (8, 8), (2, 8)],
    ];
    let tree = nest_contours(contours, 0).unwrap();

    let root = tree.node(tree.root());
    let hole = tree.node(root.children()[0]);
    let island = tree.node(hole.children()[0]);
    assert_eq!(hole.polarity(), Polarity::Hole, "Second level should be a hole");
    assert_eq!(
        island.polarity(),
        Polarity::Solid,
        "Third level should be a solid island"
    );
    assert_eq!(tree.area(), 100 - 36 + 4, "Area should alternate by level");
    println!("Nested area: {}", tree.area());
}

fn invalid_input() {
    println!("Rejecting invalid contours...");

    let result = PolyTree::new(&points![(0, 0), (5, 5), (10, 10)], Polarity::Solid);
    assert_eq!(result, Err(ConstructionError::ZeroArea));
    if let Err(e) = result {
        println!("Collinear points: {}", e);
    }

    let result = PolyTree::new(&points![(0, 0), (5, 5), (5, 5)], Polarity::Solid);
    assert_eq!(result, Err(ConstructionError::TooFewPoints { count: 2 }));
    if let Err(e) = result {
        println!("Repeated points: {}", e);
    }
}
