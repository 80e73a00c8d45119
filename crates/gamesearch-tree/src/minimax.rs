//! Exhaustive Minimax over a generated [`TreeNode`].
//!
//! X maximizes, O minimizes. Every node of the tree is visited.

use crate::stats::SearchStats;
use crate::tree::TreeNode;

/// Value of `node` with the maximizer to move.
pub fn max_player(node: &TreeNode) -> f64 {
    max_counted(node, &mut SearchStats::default())
}

/// Value of `node` with the minimizer to move.
pub fn min_player(node: &TreeNode) -> f64 {
    min_counted(node, &mut SearchStats::default())
}

fn max_counted(node: &TreeNode, stats: &mut SearchStats) -> f64 {
    stats.visited += 1;
    if node.is_leaf() {
        stats.leaves += 1;
        return node.state.score();
    }
    node.children
        .iter()
        .fold(f64::NEG_INFINITY, |best, child| best.max(min_counted(child, stats)))
}

fn min_counted(node: &TreeNode, stats: &mut SearchStats) -> f64 {
    stats.visited += 1;
    if node.is_leaf() {
        stats.leaves += 1;
        return node.state.score();
    }
    node.children
        .iter()
        .fold(f64::INFINITY, |best, child| best.min(max_counted(child, stats)))
}

/// Child of `root` with the best value for the maximizer. The earliest
/// child wins ties. `None` when `root` is a leaf.
pub fn minimax_decide(root: &TreeNode) -> Option<&TreeNode> {
    minimax_decide_with_stats(root).0
}

/// [`minimax_decide`] that also reports how much of the tree was visited.
pub fn minimax_decide_with_stats(root: &TreeNode) -> (Option<&TreeNode>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut choice = None;
    let mut best = f64::NEG_INFINITY;
    for child in &root.children {
        let v = min_counted(child, &mut stats);
        if v > best {
            best = v;
            choice = Some(child);
        }
    }
    stats.value = choice.map(|_| best);
    log::debug!("minimax: value {best}, visited {} nodes", stats.visited);
    (choice, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameState, Square};

    #[test]
    fn leaf_value_is_score() {
        let won: GameState = "XXX/OO./...".parse().unwrap();
        let leaf = TreeNode::new(won);
        assert_eq!(max_player(&leaf), 1.0);
        assert_eq!(min_player(&leaf), 1.0);
        assert!(minimax_decide(&leaf).is_none());
    }

    #[test]
    fn picks_immediate_win() {
        // X to move with the middle row open: X completes it.
        let s: GameState = "OXO/XX./OXO".parse().unwrap();
        let root = TreeNode::generate(s, true);
        let choice = minimax_decide(&root).unwrap();
        assert_eq!(choice.state.get(1, 2), Square::X);
        assert_eq!(choice.state.score(), 1.0);
    }

    #[test]
    fn first_child_kept_on_ties() {
        // Both moves lead to a draw.
        let s: GameState = "XXO/OOX/X..".parse().unwrap();
        let root = TreeNode::generate(s, true);
        let (choice, stats) = minimax_decide_with_stats(&root);
        assert!(std::ptr::eq(choice.unwrap(), &root.children[0]));
        assert_eq!(stats.value, Some(0.0));
    }

    #[test]
    fn visits_whole_tree() {
        let s: GameState = "X../.O./...".parse().unwrap();
        let root = TreeNode::generate(s, true);
        let (_, stats) = minimax_decide_with_stats(&root);
        assert_eq!(stats.visited, root.size() - 1);
        assert_eq!(stats.leaves, root.leaf_count());
    }
}
