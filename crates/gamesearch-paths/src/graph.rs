//! Arena-backed graphs addressed by integer ids.
//!
//! [`Graph`] holds unweighted adjacency lists for [`bfs`](crate::bfs).
//! [`WeightedGraph`] owns an edge arena; each node keeps the ids of its
//! outgoing edges so that searches can record the edge they arrived by.

use std::fmt;

use gamesearch_core::{Range, SearchError, SearchResult};

use crate::traits::{Pather, Step, WeightedPather};

/// Index of a node in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of an edge in a [`WeightedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

/// Return an error unless `node` is a valid id for a graph of `len` nodes.
pub(crate) fn check_node(node: NodeId, len: usize) -> SearchResult<()> {
    if node.0 < len {
        Ok(())
    } else {
        Err(SearchError::NodeOutOfRange { node: node.0, len })
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An unweighted directed graph stored as adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacent: Vec<Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacent: Vec::with_capacity(nodes),
        }
    }

    /// Add a node with no neighbors and return its id.
    pub fn add_node(&mut self) -> NodeId {
        self.adjacent.push(Vec::new());
        NodeId(self.adjacent.len() - 1)
    }

    /// Add a directed link `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> SearchResult<()> {
        check_node(from, self.adjacent.len())?;
        check_node(to, self.adjacent.len())?;
        self.adjacent[from.0].push(to);
        Ok(())
    }

    /// Add links in both directions.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> SearchResult<()> {
        self.add_edge(a, b)?;
        self.add_edge(b, a)
    }

    pub fn len(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Neighbors of `node` in insertion order.
    pub fn adjacent(&self, node: NodeId) -> &[NodeId] {
        self.adjacent.get(node.0).map_or(&[], Vec::as_slice)
    }

    /// A `rows × cols` lattice where every cell links to its 4 neighbors.
    /// Node ids are row-major.
    pub fn lattice(rows: usize, cols: usize) -> Self {
        let mut g = Self::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            g.add_node();
        }
        for (from, to) in lattice_links(rows, cols) {
            g.adjacent[from.0].push(to);
        }
        g
    }
}

impl Pather for Graph {
    fn node_count(&self) -> usize {
        self.adjacent.len()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend_from_slice(self.adjacent(node));
    }
}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A directed edge with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f32,
}

/// A directed graph whose edges live in an arena owned by the graph.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    out: Vec<Vec<EdgeId>>,
    edges: Vec<WeightedEdge>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            out: Vec::with_capacity(nodes),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self) -> NodeId {
        self.out.push(Vec::new());
        NodeId(self.out.len() - 1)
    }

    /// Add a directed edge and return its id.
    ///
    /// Negative, NaN and infinite weights are rejected.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f32) -> SearchResult<EdgeId> {
        check_node(from, self.out.len())?;
        check_node(to, self.out.len())?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(SearchError::NegativeWeight(weight));
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(WeightedEdge { from, to, weight });
        self.out[from.0].push(id);
        Ok(id)
    }

    /// Add a pair of opposite edges with the same weight.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f32) -> SearchResult<(EdgeId, EdgeId)> {
        let ab = self.add_edge(a, b, weight)?;
        let ba = self.add_edge(b, a, weight)?;
        Ok((ab, ba))
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&WeightedEdge> {
        self.edges.get(id.0)
    }

    /// Outgoing edge ids of `node` in insertion order.
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        self.out.get(node.0).map_or(&[], Vec::as_slice)
    }

    /// A `rows × cols` lattice with 4-neighbor edges of the given weight in
    /// both directions. Node ids are row-major; each node lists its edges
    /// up, down, left, right.
    pub fn lattice(rows: usize, cols: usize, weight: f32) -> SearchResult<Self> {
        let mut g = Self::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            g.add_node();
        }
        for (from, to) in lattice_links(rows, cols) {
            g.add_edge(from, to, weight)?;
        }
        Ok(g)
    }
}

/// Directed 4-neighbor links of a row-major lattice, grouped by source node
/// and ordered up, down, left, right.
fn lattice_links(rows: usize, cols: usize) -> impl Iterator<Item = (NodeId, NodeId)> {
    let rng = Range::grid(rows as i32, cols as i32);
    rng.iter().enumerate().flat_map(move |(i, p)| {
        p.neighbors_4()
            .into_iter()
            .filter_map(move |q| rng.index_of(q))
            .map(move |j| (NodeId(i), NodeId(j)))
    })
}

impl Pather for WeightedGraph {
    fn node_count(&self) -> usize {
        self.out.len()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend(self.out_edges(node).iter().map(|e| self.edges[e.0].to));
    }
}

impl WeightedPather for WeightedGraph {
    fn edges(&self, node: NodeId, buf: &mut Vec<Step>) {
        buf.extend(self.out_edges(node).iter().map(|&id| {
            let e = &self.edges[id.0];
            Step {
                edge: id,
                to: e.to,
                weight: e.weight,
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_is_symmetric() {
        let g = Graph::lattice(4, 5);
        assert_eq!(g.len(), 20);
        for a in 0..g.len() {
            for &b in g.adjacent(NodeId(a)) {
                assert!(g.adjacent(b).contains(&NodeId(a)), "{a} -> {b} not mirrored");
            }
        }
        // corner, edge, interior
        assert_eq!(g.adjacent(NodeId(0)).len(), 2);
        assert_eq!(g.adjacent(NodeId(2)).len(), 3);
        assert_eq!(g.adjacent(NodeId(6)).len(), 4);
    }

    #[test]
    fn add_edge_rejects_unknown_nodes() {
        let mut g = Graph::new();
        let a = g.add_node();
        let err = g.add_edge(a, NodeId(3)).unwrap_err();
        assert_eq!(err, SearchError::NodeOutOfRange { node: 3, len: 1 });
    }

    #[test]
    fn weighted_edges_are_recorded() {
        let mut g = WeightedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let (ab, ba) = g.connect(a, b, 2.5).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge(ab).unwrap().to, b);
        assert_eq!(g.edge(ba).unwrap().to, a);
        assert_eq!(g.out_edges(a), &[ab]);

        let mut buf = Vec::new();
        g.edges(a, &mut buf);
        assert_eq!(
            buf,
            vec![Step {
                edge: ab,
                to: b,
                weight: 2.5
            }]
        );
    }

    #[test]
    fn negative_and_nan_weights_rejected() {
        let mut g = WeightedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        assert_eq!(
            g.add_edge(a, b, -1.0).unwrap_err(),
            SearchError::NegativeWeight(-1.0)
        );
        assert!(g.add_edge(a, b, f32::NAN).is_err());
        assert!(g.add_edge(a, b, f32::INFINITY).is_err());
        assert!(g.add_edge(a, b, 0.0).is_ok());
    }

    #[test]
    fn weighted_lattice_matches_unweighted() {
        let w = WeightedGraph::lattice(5, 5, 1.0).unwrap();
        let u = Graph::lattice(5, 5);
        let mut buf = Vec::new();
        for n in 0..25 {
            buf.clear();
            w.neighbors(NodeId(n), &mut buf);
            assert_eq!(buf.as_slice(), u.adjacent(NodeId(n)));
        }
    }
}
