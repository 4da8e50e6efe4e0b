//! Entry/exit labelling of intersection vertices.
use super::contains::point_location;
use crate::core::{
    math::{Point, midpoint},
    traits::Coord,
};
use crate::polytree::{
    BooleanOp, EntryExit, NodeId, Partner, PointLocation, PolyTree,
    EntryExit::{Entry, Exit},
};

type Labels = (EntryExit, EntryExit);

/// Labels for `(vertex on A, vertex on B)` indexed by
/// `[op][polarity of A node][polarity of B node][A heading into B contour]`.
///
/// A vertex is an entry if the contour part leaving it (in traversal direction) is part of the
/// result boundary. For subtraction the B label describes walking B backwards.
const ENTRY_EXIT_TABLE: [[[[Labels; 2]; 2]; 2]; 3] = [
    // union
    [
        [[(Entry, Exit), (Exit, Entry)], [(Exit, Entry), (Entry, Exit)]],
        [[(Entry, Exit), (Exit, Entry)], [(Exit, Entry), (Entry, Exit)]],
    ],
    // intersection
    [
        [[(Exit, Entry), (Entry, Exit)], [(Entry, Exit), (Exit, Entry)]],
        [[(Exit, Entry), (Entry, Exit)], [(Entry, Exit), (Exit, Entry)]],
    ],
    // subtraction
    [
        [[(Entry, Exit), (Exit, Entry)], [(Exit, Entry), (Entry, Exit)]],
        [[(Entry, Exit), (Exit, Entry)], [(Exit, Entry), (Entry, Exit)]],
    ],
];

/// Find the intersection vertex at `point` in `tree`, preferring one that is not labelled yet.
fn find_partner<T>(tree: &PolyTree<T>, point: Point<T>) -> Option<Partner>
where
    T: Coord,
{
    let mut labelled = None;
    for id in tree.node_ids() {
        for (index, v) in tree.node(id).contour.vertices().iter().enumerate() {
            if v.is_intersection() && v.point == point {
                if v.entry_exit == EntryExit::Unset {
                    return Some(Partner { node: id, index });
                }
                labelled.get_or_insert(Partner { node: id, index });
            }
        }
    }
    labelled
}

/// Label every intersection vertex of `a` and its matching vertex in `b` and link them as
/// partners.
///
/// # Panics
///
/// Panics if an intersection vertex has no match in the other tree or is labelled twice.
pub fn mark_entry_exit<T>(a: &mut PolyTree<T>, b: &mut PolyTree<T>, op: BooleanOp, epsilon: T)
where
    T: Coord,
{
    for id_a in a.node_ids() {
        for i in 0..a.node(id_a).contour.len() {
            let node_a = a.node(id_a);
            let va = node_a.contour[i];
            if !va.is_intersection() {
                continue;
            }

            let Some(Partner { node: id_b, index: j }) = find_partner(b, va.point) else {
                panic!("intersection vertex {:?} has no match in the other tree", va.point);
            };
            let node_b = b.node(id_b);
            let vb = node_b.contour[j];
            assert!(
                va.entry_exit == EntryExit::Unset && vb.entry_exit == EntryExit::Unset,
                "intersection vertex {:?} labelled twice",
                va.point
            );

            let next = node_a.contour[node_a.contour.next_index(i)].point;
            let heading_in =
                point_location(node_b, midpoint(va.point, next), epsilon) == PointLocation::Inside;
            let (label_a, label_b) = ENTRY_EXIT_TABLE[op.index()][node_a.polarity.index()]
                [node_b.polarity.index()][heading_in as usize];

            set_label(a, id_a, i, label_a, Partner { node: id_b, index: j });
            set_label(b, id_b, j, label_b, Partner { node: id_a, index: i });
        }
    }
}

fn set_label<T>(
    tree: &mut PolyTree<T>,
    id: NodeId,
    index: usize,
    label: EntryExit,
    partner: Partner,
) where
    T: Coord,
{
    let v = &mut tree.node_mut(id).contour.vertices_mut()[index];
    v.entry_exit = label;
    v.partner = Some(partner);
}
