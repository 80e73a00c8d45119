use std::collections::{HashMap, VecDeque};

use crate::graph::{NodeId, check_node};
use crate::traits::Pather;
use gamesearch_core::SearchResult;

/// Caller-owned record of which node discovered which, filled by [`bfs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentMap(HashMap<NodeId, NodeId>);

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    /// Node that first discovered `node`.
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.0.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Nodes from `start` to `goal` following recorded parents, or `None`
    /// if `goal` was never discovered.
    pub fn path_to(&self, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![goal];
        let mut cur = goal;
        while cur != start {
            cur = self.get(cur)?;
            path.push(cur);
            if path.len() > self.0.len() + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search from `start` to `goal`.
///
/// `parents` is cleared, then every node gets an entry the first time it is
/// discovered and is never re-parented, so the recorded chain from `goal`
/// back to `start` has the fewest possible hops. `start` never gets an entry.
/// Returns `Ok(true)` when `goal` is dequeued and `Ok(false)` when the queue
/// runs dry.
pub fn bfs<P: Pather>(
    pather: &P,
    start: NodeId,
    goal: NodeId,
    parents: &mut ParentMap,
) -> SearchResult<bool> {
    let len = pather.node_count();
    check_node(start, len)?;
    check_node(goal, len)?;

    parents.clear();
    let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(len);
    queue.push_back(start);

    let mut nbuf = Vec::with_capacity(4);
    let mut dequeued = 0usize;

    let found = loop {
        let Some(current) = queue.pop_front() else {
            break false;
        };
        dequeued += 1;
        if current == goal {
            break true;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            if n == start || parents.contains(n) {
                continue;
            }
            parents.0.insert(n, current);
            queue.push_back(n);
        }
    };

    log::debug!("bfs {start} -> {goal}: found={found}, dequeued {dequeued} nodes");
    Ok(found)
}
