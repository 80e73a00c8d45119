//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value the maximizer can already guarantee and `beta` the
//! value the minimizer can. A subtree whose running value crosses the
//! other player's bound cannot change the result and is skipped.

use crate::stats::SearchStats;
use crate::tree::TreeNode;

/// Pruned value of `node` with the maximizer to move.
pub fn alpha_beta_max(node: &TreeNode, alpha: f64, beta: f64) -> f64 {
    max_counted(node, alpha, beta, &mut SearchStats::default())
}

/// Pruned value of `node` with the minimizer to move.
pub fn alpha_beta_min(node: &TreeNode, alpha: f64, beta: f64) -> f64 {
    min_counted(node, alpha, beta, &mut SearchStats::default())
}

fn max_counted(node: &TreeNode, mut alpha: f64, beta: f64, stats: &mut SearchStats) -> f64 {
    stats.visited += 1;
    if node.is_leaf() {
        stats.leaves += 1;
        return node.state.score();
    }
    let mut best = f64::NEG_INFINITY;
    for child in &node.children {
        best = best.max(min_counted(child, alpha, beta, stats));
        alpha = alpha.max(best);
        if best >= beta {
            break;
        }
    }
    best
}

fn min_counted(node: &TreeNode, alpha: f64, mut beta: f64, stats: &mut SearchStats) -> f64 {
    stats.visited += 1;
    if node.is_leaf() {
        stats.leaves += 1;
        return node.state.score();
    }
    let mut best = f64::INFINITY;
    for child in &node.children {
        best = best.min(max_counted(child, alpha, beta, stats));
        beta = beta.min(best);
        if best <= alpha {
            break;
        }
    }
    best
}

/// Child of `root` with the best value for the maximizer, or `None` when
/// `root` is a leaf.
///
/// Each child is searched with a fresh `(-inf, +inf)` window, so every
/// child value is exact and the choice (earliest child on ties) is the
/// same one [`minimax_decide`](crate::minimax_decide) makes.
pub fn alpha_beta_decide(root: &TreeNode) -> Option<&TreeNode> {
    alpha_beta_decide_with_stats(root).0
}

/// [`alpha_beta_decide`] that also reports how much of the tree was visited.
pub fn alpha_beta_decide_with_stats(root: &TreeNode) -> (Option<&TreeNode>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut choice = None;
    let mut best = f64::NEG_INFINITY;
    for child in &root.children {
        let v = min_counted(child, f64::NEG_INFINITY, f64::INFINITY, &mut stats);
        if v > best {
            best = v;
            choice = Some(child);
        }
    }
    stats.value = choice.map(|_| best);
    log::debug!("alpha-beta: value {best}, visited {} nodes", stats.visited);
    (choice, stats)
}
