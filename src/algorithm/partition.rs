//! Splitting the overlap graph along a cut and classifying its fragments

use crate::algorithm::dijkstra::{CutPath, shortest_paths};
use crate::algorithm::mask::CutType;
use crate::algorithm::seam::{NodeId, NodeSet, SeamGraph, node_coords, node_id};

/// Whether two consecutive cut nodes differ in both row and column
pub const fn is_diagonal_step(a: NodeId, b: NodeId, size: usize) -> bool {
    let (ra, ca) = node_coords(a, size);
    let (rb, cb) = node_coords(b, size);
    ra != rb && ca != cb
}

/// Copy of `graph` with the cut removed
///
/// Every cut node and every edge into it is deleted. For each diagonal step
/// between consecutive cut nodes `a = (ra, ca)` and `b = (rb, cb)`, the two
/// edges between `(ra, cb)` and `(rb, ca)` are deleted as well, so the
/// fragments either side of the step cannot reach each other diagonally.
pub fn remove_cut(graph: &SeamGraph, cut: &CutPath) -> SeamGraph {
    let size = graph.size();
    let mut remaining = graph.clone();

    for pair in cut.nodes().windows(2) {
        let &[a, b] = pair else {
            continue;
        };
        if !is_diagonal_step(a, b, size) {
            continue;
        }
        let (ra, ca) = node_coords(a, size);
        let (rb, cb) = node_coords(b, size);
        let first = node_id(ra, cb, size);
        let second = node_id(rb, ca, size);
        remaining.remove_edge(first, second);
        remaining.remove_edge(second, first);
    }

    for &node in cut.nodes() {
        remaining.remove_node(node);
    }

    remaining
}

/// Overlap pixels bordering the already-placed content, ascending
///
/// Horizontal overlaps border on column 0, vertical overlaps on row 0, and
/// L-shaped overlaps on both. Ids are returned whether or not they survive
/// the cut; classification skips absent ones.
pub fn border_candidates(cut_type: CutType, block_size: usize) -> Vec<NodeId> {
    let mut candidates = Vec::new();
    for row in 0..block_size {
        for col in 0..block_size {
            let on_border = match cut_type {
                CutType::None => false,
                CutType::Horizontal => col == 0,
                CutType::Vertical => row == 0,
                CutType::Both => row == 0 || col == 0,
            };
            if on_border {
                candidates.push(node_id(row, col, block_size));
            }
        }
    }
    candidates
}

/// Collect every node reachable from a surviving border candidate
///
/// Works through `candidates` in order: each candidate still in `remaining`
/// and not yet classified seeds a shortest-path run, and every finitely
/// reached node joins the original segment. This covers cuts that split the
/// overlap into more than two fragments.
pub fn classify_segments(remaining: &SeamGraph, candidates: &[NodeId]) -> NodeSet {
    let mut original = NodeSet::new(remaining.capacity());
    let mut pending: Vec<NodeId> = candidates
        .iter()
        .copied()
        .filter(|&node| remaining.contains(node))
        .collect();

    while let Some(&seed) = pending.first() {
        let reached = shortest_paths(remaining, seed);
        for node in reached.reached() {
            original.insert(node);
        }
        pending.retain(|&node| !original.contains(node));
    }

    original
}
