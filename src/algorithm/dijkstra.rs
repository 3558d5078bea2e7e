//! Single-source shortest paths over a seam graph and cut path recovery

use crate::algorithm::mask::CutType;
use crate::algorithm::seam::{NodeId, NodeSet, SeamGraph, node_id};
use crate::io::error::{QuiltError, Result};
use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Distance and predecessor recorded for one node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathEntry {
    /// Accumulated distance from the start, `None` when unreached
    pub distance: Option<u64>,
    /// Previous node on the shortest path, `None` for the start and unreached nodes
    pub predecessor: Option<NodeId>,
}

/// Solver output indexed by node id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    entries: Vec<PathEntry>,
}

impl ShortestPaths {
    /// Entry for `node`; unknown nodes report an unreached entry
    pub fn entry(&self, node: NodeId) -> PathEntry {
        self.entries.get(node).copied().unwrap_or_default()
    }

    /// Finite distance to `node`, if reached
    pub fn distance(&self, node: NodeId) -> Option<u64> {
        self.entry(node).distance
    }

    /// Predecessor of `node`, if any
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).predecessor
    }

    /// Reached node ids in ascending order
    pub fn reached(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(node, entry)| entry.distance.map(|_| node))
    }
}

/// Dijkstra's algorithm from `start`
///
/// The frontier always yields the smallest tentative distance, and among
/// equal distances the smallest node id, so seams are reproducible. Since
/// node ids are row-major this is lexicographic `(row, col)` order. A start
/// that is not in the graph leaves every node unreached.
pub fn shortest_paths(graph: &SeamGraph, start: NodeId) -> ShortestPaths {
    let mut entries = vec![PathEntry::default(); graph.capacity()];
    let mut visited = bitvec![0; graph.capacity()];

    if !graph.contains(start) {
        return ShortestPaths { entries };
    }

    if let Some(entry) = entries.get_mut(start) {
        entry.distance = Some(0);
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u64, start)));

    while let Some(Reverse((distance, node))) = frontier.pop() {
        if visited.get(node).as_deref() != Some(&false) {
            continue;
        }
        // Stale heap entries are skipped; the latest estimate wins
        if entries.get(node).and_then(|entry| entry.distance) != Some(distance) {
            continue;
        }
        visited.set(node, true);

        for edge in graph.edges(node) {
            if visited.get(edge.to).as_deref() != Some(&false) {
                continue;
            }
            let candidate = distance.saturating_add(edge.weight);
            if let Some(entry) = entries.get_mut(edge.to)
                && entry.distance.is_none_or(|current| candidate < current)
            {
                entry.distance = Some(candidate);
                entry.predecessor = Some(node);
                frontier.push(Reverse((candidate, edge.to)));
            }
        }
    }

    ShortestPaths { entries }
}

/// Ordered cut nodes from the seam end back to its start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutPath {
    nodes: Vec<NodeId>,
}

impl CutPath {
    /// Nodes in end-to-start order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes on the cut
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test if the cut holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the path, the seam end
    pub fn end(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path, the seam start
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Membership set over a frame of `capacity` node ids
    pub fn membership(&self, capacity: usize) -> NodeSet {
        let mut set = NodeSet::new(capacity);
        for &node in &self.nodes {
            set.insert(node);
        }
        set
    }
}

/// Walk predecessor links from `end` back to the start
///
/// The result lists `end` first and the start last, each exactly once; a
/// start equal to `end` yields a single node.
///
/// # Errors
///
/// Returns `UnreachableEnd` if `end` has no finite distance.
pub fn extract_path(end: NodeId, paths: &ShortestPaths) -> Result<CutPath> {
    if paths.distance(end).is_none() {
        return Err(QuiltError::UnreachableEnd { node: end, cell: None });
    }

    let mut nodes = vec![end];
    let mut current = end;
    // Predecessor chains from the solver are acyclic; the bound only guards misuse
    let limit = paths.entries.len();
    while let Some(previous) = paths.predecessor(current) {
        if nodes.len() > limit {
            return Err(QuiltError::UnreachableEnd { node: end, cell: None });
        }
        nodes.push(previous);
        current = previous;
    }

    Ok(CutPath { nodes })
}

/// Seam start and end nodes for a cut type, or `None` for [`CutType::None`]
///
/// With `middle = overlap / 2`, horizontal seams run down column `middle`,
/// vertical seams across row `middle`, and L-shaped seams from the bottom of
/// column `middle` to the right end of row `middle`.
pub const fn seam_endpoints(
    cut_type: CutType,
    block_size: usize,
    overlap: usize,
) -> Option<(NodeId, NodeId)> {
    let middle = overlap / 2;
    let last = block_size.saturating_sub(1);
    match cut_type {
        CutType::None => None,
        CutType::Horizontal => Some((
            node_id(0, middle, block_size),
            node_id(last, middle, block_size),
        )),
        CutType::Vertical => Some((
            node_id(middle, 0, block_size),
            node_id(middle, last, block_size),
        )),
        CutType::Both => Some((
            node_id(last, middle, block_size),
            node_id(middle, last, block_size),
        )),
    }
}
