//! Open set for greedy best-first and A* searches.
//!
//! Entries are kept in a min-heap keyed by `(key, seq)`: lower keys pop
//! first and equal keys pop in the order their nodes first entered the open
//! set. When A* lowers a node's `f` the node is pushed again with its
//! first `seq`; the outdated entry is skipped when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;
use crate::scratch::{Membership, Scratch};

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: f32,
    seq: u64,
    node: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key, then the
        // earliest seq.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl OpenSet {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    /// Sequence number for a node entering the open set for the first time.
    pub(crate) fn next_seq(&mut self) -> u64 {
        let s = self.next_seq;
        self.next_seq += 1;
        s
    }

    pub(crate) fn push(&mut self, node: NodeId, key: f32, seq: u64) {
        self.heap.push(Entry { key, seq, node });
    }

    /// Pop the open node with the lowest key, skipping entries that no
    /// longer describe an open node. A live entry's key equals the node's
    /// current `f`.
    pub(crate) fn pop(&mut self, scratch: &Scratch) -> Option<NodeId> {
        while let Some(e) = self.heap.pop() {
            let Some(rec) = scratch.get(e.node) else {
                continue;
            };
            if rec.membership != Membership::Open {
                continue;
            }
            if rec.f.total_cmp(&e.key) != Ordering::Equal {
                continue;
            }
            return Some(e.node);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(scratch: &mut Scratch, node: usize, h: f32, seq: u64) {
        let r = scratch.entry(NodeId(node));
        r.h = h;
        r.f = h;
        r.seq = seq;
        r.membership = Membership::Open;
    }

    #[test]
    fn pops_lowest_key_first() {
        let mut scratch = Scratch::new();
        scratch.begin(3);
        let mut set = OpenSet::default();
        for (n, h) in [(0, 3.0), (1, 1.0), (2, 2.0)] {
            let seq = set.next_seq();
            open(&mut scratch, n, h, seq);
            set.push(NodeId(n), h, seq);
        }
        assert_eq!(set.pop(&scratch), Some(NodeId(1)));
        scratch.entry(NodeId(1)).membership = Membership::Closed;
        assert_eq!(set.pop(&scratch), Some(NodeId(2)));
        scratch.entry(NodeId(2)).membership = Membership::Closed;
        assert_eq!(set.pop(&scratch), Some(NodeId(0)));
        scratch.entry(NodeId(0)).membership = Membership::Closed;
        assert_eq!(set.pop(&scratch), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut scratch = Scratch::new();
        scratch.begin(3);
        let mut set = OpenSet::default();
        for n in [2, 0, 1] {
            let seq = set.next_seq();
            open(&mut scratch, n, 5.0, seq);
            set.push(NodeId(n), 5.0, seq);
        }
        let mut order = Vec::new();
        while let Some(n) = set.pop(&scratch) {
            scratch.entry(n).membership = Membership::Closed;
            order.push(n.0);
        }
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut scratch = Scratch::new();
        scratch.begin(2);
        let mut set = OpenSet::default();
        let seq = set.next_seq();
        open(&mut scratch, 0, 9.0, seq);
        set.push(NodeId(0), 9.0, seq);
        // Key lowered after the first push.
        scratch.entry(NodeId(0)).f = 4.0;
        set.push(NodeId(0), 4.0, seq);

        assert_eq!(set.pop(&scratch), Some(NodeId(0)));
        scratch.entry(NodeId(0)).membership = Membership::Closed;
        assert_eq!(set.pop(&scratch), None);
    }
}
