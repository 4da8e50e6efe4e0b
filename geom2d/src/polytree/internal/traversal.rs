//! Walking labelled contours of two trees to produce the result contours.
use crate::core::{
    math::{Orientation, Point, orientation},
    traits::Coord,
};
use crate::polytree::{
    BooleanOp, ContourVertex, EntryExit, NodeId, OperationError, Polarity, PolyTree,
};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Position of a vertex in one of the two operand trees (`tree` is 0 for A, 1 for B).
#[derive(Debug, Clone, Copy)]
struct Cursor {
    tree: usize,
    node: NodeId,
    index: usize,
}

struct Walker<'a, T> {
    trees: [&'a mut PolyTree<T>; 2],
    op: BooleanOp,
}

impl<T> Walker<'_, T>
where
    T: Coord,
{
    #[inline]
    fn vertex(&self, c: Cursor) -> ContourVertex<T> {
        self.trees[c.tree].node(c.node).contour[c.index]
    }

    #[inline]
    fn polarity(&self, c: Cursor) -> Polarity {
        self.trees[c.tree].node(c.node).polarity
    }

    fn mark_visited(&mut self, c: Cursor) {
        let v = &mut self.trees[c.tree].node_mut(c.node).contour.vertices_mut()[c.index];
        v.visited = true;
        let partner = v.partner;
        if let Some(p) = partner {
            self.trees[1 - c.tree].node_mut(p.node).contour.vertices_mut()[p.index].visited = true;
        }
    }

    fn step(&self, c: Cursor, dir: Direction) -> Cursor {
        let contour = &self.trees[c.tree].node(c.node).contour;
        let index = match dir {
            Direction::Forward => contour.next_index(c.index),
            Direction::Backward => contour.prev_index(c.index),
        };
        Cursor { index, ..c }
    }

    /// First unvisited entry vertex, scanning A then B in tree order.
    fn find_start(&self) -> Option<Cursor> {
        for (tree, t) in self.trees.iter().enumerate() {
            for node in t.node_ids() {
                let start = t.node(node).contour.vertices().iter().position(|v| {
                    v.entry_exit == EntryExit::Entry && !v.visited
                });
                if let Some(index) = start {
                    return Some(Cursor { tree, node, index });
                }
            }
        }
        None
    }

    /// Returns true if the walk leaves the current tree at `c`.
    fn switches_at(&self, c: Cursor, dir: Direction) -> bool {
        match self.vertex(c).entry_exit {
            EntryExit::Exit => true,
            EntryExit::Entry if self.op == BooleanOp::Subtraction => {
                self.polarity(c) == Polarity::Hole || dir == Direction::Backward
            }
            _ => false,
        }
    }

    /// Walk from `start` until returning to it, collecting the doubled points of the walk.
    fn walk(&mut self, start: Cursor, max_steps: usize) -> Result<Vec<Point<T>>, OperationError> {
        // B labels for subtraction describe a backward walk, so a walk starting on B goes backward
        let mut dir = if self.op == BooleanOp::Subtraction && start.tree == 1 {
            Direction::Backward
        } else {
            Direction::Forward
        };

        let first = self.vertex(start).point;
        let mut output = Vec::new();
        let mut cursor = start;
        for _ in 0..max_steps {
            let v = self.vertex(cursor);
            if !v.is_contact() {
                output.push(v.point);
            }
            self.mark_visited(cursor);
            cursor = self.step(cursor, dir);

            let v = self.vertex(cursor);
            if v.point == first {
                return Ok(output);
            }

            if self.switches_at(cursor, dir) {
                let Some(partner) = v.partner else {
                    panic!("labelled vertex {:?} has no partner", v.point);
                };
                cursor = Cursor {
                    tree: 1 - cursor.tree,
                    node: partner.node,
                    index: partner.index,
                };
                if self.op == BooleanOp::Subtraction {
                    dir = dir.flipped();
                }
                trace!("switched to tree {} at {:?}", cursor.tree, v.point);
            }
        }

        let start = first.halved();
        Err(OperationError::UnclosedContour {
            start: (start.x.as_f64(), start.y.as_f64()),
        })
    }
}

/// Walk the labelled contours of `a` and `b` producing the result contours of `op` (actual
/// coordinates).
pub fn traverse<T>(
    a: &mut PolyTree<T>,
    b: &mut PolyTree<T>,
    op: BooleanOp,
) -> Result<Vec<Vec<Point<T>>>, OperationError>
where
    T: Coord,
{
    let max_steps = a.vertex_count() + b.vertex_count();
    let mut walker = Walker { trees: [a, b], op };
    let mut results = Vec::new();
    while let Some(start) = walker.find_start() {
        let contour = remove_spikes(walker.walk(start, max_steps)?);
        if contour.len() < 3 {
            trace!("dropped walk from {:?} with no area", start);
            continue;
        }
        results.push(contour.iter().map(|p| p.halved()).collect());
    }

    Ok(results)
}

/// Returns true if the contour doubles back on itself at `v` (prev -> v -> next).
fn is_spike<T>(prev: Point<T>, v: Point<T>, next: Point<T>) -> bool
where
    T: Coord,
{
    orientation(prev, v, next) == Orientation::Collinear && (v - prev).dot(next - v) < T::zero()
}

/// Drop repeated points and zero width spikes from a closed contour.
///
/// Spikes appear where a walk follows a boundary run shared by both operands and turns back.
fn remove_spikes<T>(points: Vec<Point<T>>) -> Vec<Point<T>>
where
    T: Coord,
{
    let mut out: Vec<Point<T>> = Vec::with_capacity(points.len());
    for p in points {
        loop {
            let n = out.len();
            if n > 0 && out[n - 1] == p {
                break;
            }
            if n > 1 && is_spike(out[n - 2], out[n - 1], p) {
                out.pop();
                continue;
            }
            out.push(p);
            break;
        }
    }

    // the closing edge joins the two ends
    loop {
        let n = out.len();
        if n < 3 {
            break;
        }
        if out[n - 1] == out[0] || is_spike(out[n - 2], out[n - 1], out[0]) {
            out.pop();
        } else if is_spike(out[n - 1], out[0], out[1]) {
            out.remove(0);
        } else {
            break;
        }
    }

    out
}
