use crate::graph::{EdgeId, NodeId};

/// Minimal search interface: node count and unweighted neighbor enumeration.
pub trait Pather {
    /// Number of nodes; valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>);
}

/// One outgoing edge as seen by a weighted search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub edge: EdgeId,
    pub to: NodeId,
    pub weight: f32,
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Append the outgoing edges of `node` into `buf`, in adjacency order.
    /// The caller clears `buf` before calling.
    fn edges(&self, node: NodeId, buf: &mut Vec<Step>);
}

/// Estimate of the remaining cost from a node to the goal.
///
/// A* returns minimum-cost paths only when the estimate never overestimates
/// and never decreases by more than an edge weight along an edge.
pub trait Heuristic {
    fn estimate(&self, from: NodeId, goal: NodeId) -> f32;
}

/// Zero for every node. Turns A* into Dijkstra and GBFS into an
/// insertion-order walk of the frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: NodeId, _goal: NodeId) -> f32 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(NodeId, NodeId) -> f32,
{
    #[inline]
    fn estimate(&self, from: NodeId, goal: NodeId) -> f32 {
        self(from, goal)
    }
}
