//! Per-search bookkeeping kept in a side table indexed by [`NodeId`].
//!
//! A [`Scratch`] is owned by the caller and reused across searches. Each
//! search bumps a generation counter; records from an older generation read
//! as unseen, so starting a search never walks the whole table.

use crate::graph::{EdgeId, NodeId};

/// Where a node stands in the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Scratch record for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Edge the node was reached by. `None` for the start node.
    pub parent_edge: Option<EdgeId>,
    /// Node at the other end of `parent_edge`.
    pub parent: Option<NodeId>,
    /// Heuristic to the goal, computed once on first discovery.
    pub h: f32,
    /// Accumulated cost from the start. Left at zero by greedy search.
    pub g: f32,
    /// `g + h`.
    pub f: f32,
    pub membership: Membership,
    /// Order in which the node entered the open set.
    pub(crate) seq: u64,
    generation: u32,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            parent_edge: None,
            parent: None,
            h: 0.0,
            g: 0.0,
            f: 0.0,
            membership: Membership::Unseen,
            seq: 0,
            generation: 0,
        }
    }
}

impl Record {
    pub fn in_open_set(&self) -> bool {
        self.membership == Membership::Open
    }

    pub fn in_closed_set(&self) -> bool {
        self.membership == Membership::Closed
    }
}

/// Side table of [`Record`]s for greedy best-first and A* searches.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    records: Vec<Record>,
    generation: u32,
}

/// Scratch used by [`gbfs`](crate::gbfs). Same layout as A*'s; `g` stays zero.
pub type GbfsScratch = Scratch;
/// Scratch used by [`astar`](crate::astar).
pub type AstarScratch = Scratch;

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scratch pre-sized for a graph of `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            records: vec![Record::default(); len],
            generation: 0,
        }
    }

    /// Start a new search over `len` nodes, invalidating every record.
    pub(crate) fn begin(&mut self, len: usize) {
        if self.records.len() < len {
            self.records.resize(len, Record::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old records could alias the new generation.
            for r in self.records.iter_mut() {
                *r = Record::default();
            }
            self.generation = 1;
        }
    }

    /// Record for `node`, reset first if it belongs to an older search.
    pub(crate) fn entry(&mut self, node: NodeId) -> &mut Record {
        let cur = self.generation;
        let r = &mut self.records[node.0];
        if r.generation != cur {
            *r = Record {
                generation: cur,
                ..Record::default()
            };
        }
        r
    }

    /// Record for `node` from the most recent search, or `None` if that
    /// search never reached it.
    pub fn get(&self, node: NodeId) -> Option<&Record> {
        self.records
            .get(node.0)
            .filter(|r| r.generation == self.generation && self.generation != 0)
    }

    /// Parent of `node` in the most recent search.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|r| r.parent)
    }

    /// Accumulated cost of `node` in the most recent A* search.
    pub fn cost(&self, node: NodeId) -> Option<f32> {
        self.get(node)
            .filter(|r| r.membership != Membership::Unseen)
            .map(|r| r.g)
    }

    /// Walk parent links back from `goal` and return the nodes start→goal.
    ///
    /// Returns `None` if `goal` was not reached.
    pub fn path_to(&self, goal: NodeId) -> Option<Vec<NodeId>> {
        let rec = self.get(goal)?;
        if rec.membership == Membership::Unseen {
            return None;
        }
        let mut path = vec![goal];
        let mut cur = goal;
        while let Some(p) = self.parent(cur) {
            path.push(p);
            cur = p;
            if path.len() > self.records.len() {
                // Parent links never form a cycle; bail out rather than spin.
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}
