//! Weighted neighbourhood graph over the overlap region of one cell
//!
//! Nodes are local pixel coordinates packed as `row * size + col`. The weight
//! of an edge is the intrinsic mismatch cost of its destination node, so
//! edges into the same node always carry the same weight regardless of
//! where they come from. A graph lives for exactly one cut computation.

use crate::algorithm::mask::OverlapMask;
use crate::spatial::surface::{Surface, squared_difference};
use crate::spatial::{Block, BlockOffset};
use bitvec::prelude::*;

/// Packed local coordinate, `row * size + col`
pub type NodeId = usize;

/// Pack `(row, col)` into a node id for a block of side `size`
pub const fn node_id(row: usize, col: usize, size: usize) -> NodeId {
    row * size + col
}

/// Unpack a node id into `(row, col)`
pub const fn node_coords(node: NodeId, size: usize) -> (usize, usize) {
    (node / size, node % size)
}

/// Set of node ids within one `size`×`size` frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSet {
    bits: BitVec,
}

impl NodeSet {
    /// Empty set able to hold ids below `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Add `node`; ids past the capacity are ignored
    pub fn insert(&mut self, node: NodeId) {
        if node < self.bits.len() {
            self.bits.set(node, true);
        }
    }

    /// Test membership
    pub fn contains(&self, node: NodeId) -> bool {
        self.bits.get(node).as_deref() == Some(&true)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if the set has no members
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.bits.iter_ones()
    }
}

/// Relative positions of the 8 grid neighbours
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Directed edge to a neighbouring node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Destination node
    pub to: NodeId,
    /// Intrinsic cost of the destination node
    pub weight: u64,
}

/// Adjacency lists indexed by node id
///
/// Slots for coordinates outside the overlap are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeamGraph {
    size: usize,
    adjacency: Vec<Option<Vec<Edge>>>,
}

impl SeamGraph {
    /// Graph with no nodes over a `size`×`size` frame
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            adjacency: vec![None; size * size],
        }
    }

    /// Side length of the local frame
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Upper bound on node ids, `size²`
    pub const fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Whether `node` exists
    pub fn contains(&self, node: NodeId) -> bool {
        matches!(self.adjacency.get(node), Some(Some(_)))
    }

    /// Outgoing edges of `node`, empty when the node is absent
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .and_then(Option::as_deref)
            .unwrap_or(&[])
    }

    /// Existing node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(|(node, slot)| slot.as_ref().map(|_| node))
    }

    /// Number of existing nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.iter().filter(|slot| slot.is_some()).count()
    }

    /// Insert `node` with no edges, keeping existing edges if present
    pub fn add_node(&mut self, node: NodeId) {
        if let Some(slot) = self.adjacency.get_mut(node)
            && slot.is_none()
        {
            *slot = Some(Vec::new());
        }
    }

    /// Add a directed edge; ignored unless both endpoints exist
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: u64) {
        if !self.contains(to) {
            return;
        }
        if let Some(Some(edges)) = self.adjacency.get_mut(from) {
            edges.push(Edge { to, weight });
        }
    }

    /// Delete `node` and every edge pointing at it
    pub fn remove_node(&mut self, node: NodeId) {
        let Some(slot) = self.adjacency.get_mut(node) else {
            return;
        };
        if slot.take().is_none() {
            return;
        }
        for edges in self.adjacency.iter_mut().flatten() {
            edges.retain(|edge| edge.to != node);
        }
    }

    /// Delete the directed edge `from -> to` if present
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(Some(edges)) = self.adjacency.get_mut(from) {
            edges.retain(|edge| edge.to != to);
        }
    }
}

/// Build the seam graph for a block about to be placed at `origin`
///
/// Every set mask pixel `(r, c)` becomes a node with intrinsic cost
/// `squared_difference(canvas(origin.x + c, origin.y + r), block(c, r))`.
/// Each node gets an edge to each of its 8 neighbours that is also a node,
/// weighted by the neighbour's cost.
pub fn build_graph<C, S>(
    canvas: &C,
    origin: BlockOffset,
    block: &Block<'_, S>,
    mask: &OverlapMask,
) -> SeamGraph
where
    C: Surface + ?Sized,
    S: Surface + ?Sized,
{
    let size = mask.size();
    let existing = Block::new(canvas, origin, block.size());
    let mut graph = SeamGraph::empty(size);
    let mut costs = vec![0u64; size * size];

    for (row, col) in mask.coordinates() {
        let node = node_id(row, col, size);
        let (x, y) = (col as u32, row as u32);
        if let Some(cost) = costs.get_mut(node) {
            *cost = squared_difference(existing.pixel(x, y), block.pixel(x, y));
        }
        graph.add_node(node);
    }

    for (row, col) in mask.coordinates() {
        let from = node_id(row, col, size);
        for (dr, dc) in NEIGHBOURS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if !mask.contains(nr, nc) {
                continue;
            }
            let to = node_id(nr, nc, size);
            let weight = costs.get(to).copied().unwrap_or(0);
            graph.add_edge(from, to, weight);
        }
    }

    graph
}
