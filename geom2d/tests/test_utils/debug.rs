use geom2d::{
    core::{math::Point, traits::Coord},
    polytree::PolyTree,
};

/// Helper function to create a readable string of contours to be used for debugging.
pub fn contours_debug_str<T>(contours: &[Vec<Point<T>>]) -> String
where
    T: Coord,
{
    contours
        .iter()
        .map(|c| {
            c.iter()
                .map(|p| format!("({:?}, {:?})", p.x, p.y))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helper function to create a readable string of every node in a tree.
pub fn tree_debug_str<T>(tree: &PolyTree<T>) -> String
where
    T: Coord,
{
    tree.node_ids()
        .into_iter()
        .map(|id| {
            let node = tree.node(id);
            format!(
                "{:?} {:?} parent: {:?} [{}]",
                id,
                node.polarity(),
                node.parent(),
                contours_debug_str(&[node.contour()])
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
