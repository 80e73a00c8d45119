use gamesearch_core::SearchResult;

use crate::frontier::OpenSet;
use crate::graph::{NodeId, check_node};
use crate::scratch::{AstarScratch, Membership};
use crate::traits::{Heuristic, WeightedPather};

/// A* search from `start` to `goal`.
///
/// Every record keeps `f = g + h`. A node's `h` is computed once on first
/// discovery. An open node adopts the current node as parent when that
/// gives it a strictly smaller `g`; closed nodes are never reopened, so the
/// result is a minimum-cost path when weights are non-negative and the
/// heuristic is consistent.
///
/// The open node with the smallest `f` is expanded next. Equal `f` values
/// are expanded in the order the nodes entered the open set. That fixes
/// *which* of several equally cheap paths is returned; any of them would be
/// a correct answer.
///
/// [`ZeroHeuristic`](crate::ZeroHeuristic) is allowed and makes this
/// Dijkstra's algorithm.
pub fn astar<P, H>(
    pather: &P,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
    scratch: &mut AstarScratch,
) -> SearchResult<bool>
where
    P: WeightedPather,
    H: Heuristic + ?Sized,
{
    let len = pather.node_count();
    check_node(start, len)?;
    check_node(goal, len)?;

    scratch.begin(len);
    {
        let s = scratch.entry(start);
        s.h = heuristic.estimate(start, goal);
        s.f = s.h;
        s.membership = Membership::Closed;
    }

    let mut open = OpenSet::with_capacity(len);
    let mut ebuf = Vec::with_capacity(4);
    let mut current = start;
    let mut expanded = 0usize;

    while current != goal {
        expanded += 1;
        let current_g = scratch.entry(current).g;
        ebuf.clear();
        pather.edges(current, &mut ebuf);

        for step in ebuf.iter() {
            let new_g = current_g + step.weight;
            let data = scratch.entry(step.to);
            match data.membership {
                Membership::Closed => {}
                Membership::Unseen => {
                    data.parent_edge = Some(step.edge);
                    data.parent = Some(current);
                    data.h = heuristic.estimate(step.to, goal);
                    data.g = new_g;
                    data.f = data.g + data.h;
                    data.membership = Membership::Open;
                    data.seq = open.next_seq();
                    open.push(step.to, data.f, data.seq);
                }
                Membership::Open => {
                    if new_g < data.g {
                        data.parent_edge = Some(step.edge);
                        data.parent = Some(current);
                        data.g = new_g;
                        data.f = data.g + data.h;
                        open.push(step.to, data.f, data.seq);
                    }
                }
            }
        }

        let Some(lowest) = open.pop(scratch) else {
            break;
        };
        let data = scratch.entry(lowest);
        data.membership = Membership::Closed;
        log::trace!("astar: closing {lowest} (g = {}, f = {})", data.g, data.f);
        current = lowest;
    }

    let found = current == goal;
    log::debug!("astar {start} -> {goal}: found={found}, expanded {expanded} nodes");
    Ok(found)
}
