use geom2d::{
    core::{math::Point, traits::Coord},
    polytree::{Polarity, PolyTree, PolyTreeOptions},
};

pub fn square<T>(x0: T, y0: T, size: T) -> Vec<Point<T>>
where
    T: Coord,
{
    vec![
        Point::new(x0, y0),
        Point::new(x0 + size, y0),
        Point::new(x0 + size, y0 + size),
        Point::new(x0, y0 + size),
    ]
}

/// Solid square with a centered square hole.
pub fn square_with_hole<T>(x0: T, y0: T, size: T, hole_inset: T) -> PolyTree<T>
where
    T: Coord,
{
    let hole_size = size - hole_inset - hole_inset;
    let hole = PolyTree::new(
        &square(x0 + hole_inset, y0 + hole_inset, hole_size),
        Polarity::Hole,
    )
    .unwrap();

    let mut options = PolyTreeOptions::new();
    options.children.push(hole);
    PolyTree::new_opt(&square(x0, y0, size), Polarity::Solid, options).unwrap()
}

/// A: (0,0)-(20,20) with hole (5,5)-(15,15), B: (7,7)-(27,27) with hole (12,12)-(22,22).
pub fn overlapping_squares_with_holes<T>() -> (PolyTree<T>, PolyTree<T>)
where
    T: Coord,
{
    let n = |v: i32| T::from_f64(v as f64);
    (
        square_with_hole(n(0), n(0), n(20), n(5)),
        square_with_hole(n(7), n(7), n(20), n(5)),
    )
}

pub fn contour_from<T>(points: &[(i32, i32)]) -> Vec<Point<T>>
where
    T: Coord,
{
    points
        .iter()
        .map(|&(x, y)| Point::new(T::from_f64(x as f64), T::from_f64(y as f64)))
        .collect()
}
