//! Tic-tac-toe game trees and adversarial decisions.
//!
//! [`TreeNode::generate`] builds every continuation of a [`GameState`] down
//! to full boards. [`minimax_decide`] evaluates the whole tree;
//! [`alpha_beta_decide`] skips subtrees that cannot change the result and
//! always picks the same child. X is the maximizing player and scores are
//! `+1` / `-1` / `0`.
//!
//! ```
//! use gamesearch_tree::{GameState, Square, Strategy, best_move};
//!
//! let s: GameState = "O.X/XOO/X..".parse().unwrap();
//! let next = best_move(s, true, Strategy::AlphaBeta).unwrap();
//! assert_eq!(next.get(2, 2), Square::X);
//! ```

mod alphabeta;
mod decide;
mod minimax;
mod state;
mod stats;
mod tree;

pub use alphabeta::{
    alpha_beta_decide, alpha_beta_decide_with_stats, alpha_beta_max, alpha_beta_min,
};
pub use decide::{Strategy, best_move, decide};
pub use minimax::{max_player, min_player, minimax_decide, minimax_decide_with_stats};
pub use state::{GameState, Square};
pub use stats::SearchStats;
pub use tree::TreeNode;
