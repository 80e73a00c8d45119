use gamesearch_core::SearchResult;

use crate::frontier::OpenSet;
use crate::graph::{NodeId, check_node};
use crate::scratch::{GbfsScratch, Membership};
use crate::traits::{Heuristic, WeightedPather};

/// Greedy best-first search from `start` to `goal`.
///
/// Always expands the open node with the smallest heuristic, ignoring the
/// cost already travelled, so the path it finds is not necessarily the
/// cheapest. A node's heuristic is computed once when it is first
/// discovered. Rediscovering a node that is still open only moves its
/// parent edge to the current node.
///
/// Results are left in `scratch`; use [`Scratch::path_to`](crate::Scratch::path_to)
/// to read the path.
pub fn gbfs<P, H>(
    pather: &P,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
    scratch: &mut GbfsScratch,
) -> SearchResult<bool>
where
    P: WeightedPather,
    H: Heuristic + ?Sized,
{
    let len = pather.node_count();
    check_node(start, len)?;
    check_node(goal, len)?;

    scratch.begin(len);
    scratch.entry(start).membership = Membership::Closed;

    let mut open = OpenSet::with_capacity(len);
    let mut ebuf = Vec::with_capacity(4);
    let mut current = start;
    let mut expanded = 0usize;

    while current != goal {
        expanded += 1;
        ebuf.clear();
        pather.edges(current, &mut ebuf);

        for step in ebuf.iter() {
            let data = scratch.entry(step.to);
            if data.membership == Membership::Closed {
                continue;
            }
            data.parent_edge = Some(step.edge);
            data.parent = Some(current);
            if data.membership == Membership::Unseen {
                let h = heuristic.estimate(step.to, goal);
                data.h = h;
                data.f = h;
                data.membership = Membership::Open;
                data.seq = open.next_seq();
                open.push(step.to, h, data.seq);
            }
        }

        let Some(lowest) = open.pop(scratch) else {
            break;
        };
        let data = scratch.entry(lowest);
        data.membership = Membership::Closed;
        log::trace!("gbfs: closing {lowest} (h = {})", data.h);
        current = lowest;
    }

    let found = current == goal;
    log::debug!("gbfs {start} -> {goal}: found={found}, expanded {expanded} nodes");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::graph::WeightedGraph;
    use crate::scratch::Scratch;
    use crate::traits::ZeroHeuristic;

    fn path_cost(g: &WeightedGraph, s: &Scratch, goal: NodeId) -> f32 {
        let path = s.path_to(goal).unwrap();
        path.windows(2)
            .map(|w| {
                g.out_edges(w[0])
                    .iter()
                    .filter_map(|&e| g.edge(e))
                    .find(|e| e.to == w[1])
                    .unwrap()
                    .weight
            })
            .sum()
    }

    #[test]
    fn finds_path_on_lattice() {
        let g = WeightedGraph::lattice(5, 5, 1.0).unwrap();
        let mut s = GbfsScratch::with_len(g.len());
        assert!(gbfs(&g, NodeId(0), NodeId(9), &ZeroHeuristic, &mut s).unwrap());
        let path = s.path_to(NodeId(9)).unwrap();
        assert_eq!(path[0], NodeId(0));
        assert_eq!(*path.last().unwrap(), NodeId(9));
    }

    #[test]
    fn start_equals_goal() {
        let g = WeightedGraph::lattice(2, 2, 1.0).unwrap();
        let mut s = GbfsScratch::new();
        assert!(gbfs(&g, NodeId(3), NodeId(3), &ZeroHeuristic, &mut s).unwrap());
        assert_eq!(s.path_to(NodeId(3)), Some(vec![NodeId(3)]));
    }

    #[test]
    fn exhausts_disconnected_graph() {
        let mut g = WeightedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.connect(a, b, 1.0).unwrap();
        let mut s = GbfsScratch::new();
        assert!(!gbfs(&g, a, c, &ZeroHeuristic, &mut s).unwrap());
        assert!(s.get(b).unwrap().in_closed_set());
        assert!(s.path_to(c).is_none());
    }

    #[test]
    fn heuristic_is_fixed_at_first_discovery() {
        // 0 -> 1, 0 -> 2, 2 -> 1, 1 -> 3
        let mut g = WeightedGraph::new();
        for _ in 0..4 {
            g.add_node();
        }
        g.add_edge(NodeId(0), NodeId(1), 1.0).unwrap();
        g.add_edge(NodeId(0), NodeId(2), 1.0).unwrap();
        g.add_edge(NodeId(2), NodeId(1), 1.0).unwrap();
        g.add_edge(NodeId(1), NodeId(3), 1.0).unwrap();

        let calls = std::cell::Cell::new(0);
        let h = |n: NodeId, _goal: NodeId| {
            calls.set(calls.get() + 1);
            match n.0 {
                1 => 5.0,
                2 => 1.0,
                _ => 0.0,
            }
        };
        let mut s = GbfsScratch::new();
        assert!(gbfs(&g, NodeId(0), NodeId(3), &h, &mut s).unwrap());
        // 1 and 2 from the start, 3 from node 1; node 1 rediscovered via 2 reuses h.
        assert_eq!(calls.get(), 3);
        assert_eq!(s.get(NodeId(1)).unwrap().h, 5.0);
        // Rediscovery moved the parent of 1 to 2.
        assert_eq!(s.parent(NodeId(1)), Some(NodeId(2)));
        assert_eq!(
            s.path_to(NodeId(3)),
            Some(vec![NodeId(0), NodeId(2), NodeId(1), NodeId(3)])
        );
    }

    /// Greedy search follows the misleading heuristic down the expensive
    /// branch; A* with the same heuristic does not.
    #[test]
    fn not_cost_optimal() {
        //        1 (h=0) --10--> 3
        //  0 --1/
        //    \--1-- 2 (h=4) --1--> 3
        let mut g = WeightedGraph::new();
        for _ in 0..4 {
            g.add_node();
        }
        g.add_edge(NodeId(0), NodeId(1), 1.0).unwrap();
        g.add_edge(NodeId(0), NodeId(2), 1.0).unwrap();
        g.add_edge(NodeId(1), NodeId(3), 10.0).unwrap();
        g.add_edge(NodeId(2), NodeId(3), 1.0).unwrap();
        let h = |n: NodeId, _goal: NodeId| match n.0 {
            1 => 0.0,
            2 => 1.0,
            _ => 0.0,
        };

        let mut greedy = GbfsScratch::new();
        assert!(gbfs(&g, NodeId(0), NodeId(3), &h, &mut greedy).unwrap());
        let mut optimal = Scratch::new();
        assert!(astar(&g, NodeId(0), NodeId(3), &h, &mut optimal).unwrap());

        let greedy_cost = path_cost(&g, &greedy, NodeId(3));
        let optimal_cost = path_cost(&g, &optimal, NodeId(3));
        assert_eq!(greedy_cost, 11.0);
        assert_eq!(optimal_cost, 2.0);
        assert!(greedy_cost >= optimal_cost);
        assert_eq!(
            greedy.path_to(NodeId(3)),
            Some(vec![NodeId(0), NodeId(1), NodeId(3)])
        );
    }

    #[test]
    fn ties_expand_in_discovery_order() {
        // Star: 0 links to 1, 2, 3 in that order, goal 3 hangs off nothing else.
        let mut g = WeightedGraph::new();
        for _ in 0..4 {
            g.add_node();
        }
        for n in 1..4 {
            g.add_edge(NodeId(0), NodeId(n), 1.0).unwrap();
        }
        let mut s = GbfsScratch::new();
        assert!(gbfs(&g, NodeId(0), NodeId(3), &ZeroHeuristic, &mut s).unwrap());
        // 1 and 2 were closed before 3 was reached.
        assert!(s.get(NodeId(1)).unwrap().in_closed_set());
        assert!(s.get(NodeId(2)).unwrap().in_closed_set());
    }
}
