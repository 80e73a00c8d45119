use std::fmt;
use std::str::FromStr;

use gamesearch_core::{SearchError, SearchResult};

use crate::alphabeta::alpha_beta_decide;
use crate::minimax::minimax_decide;
use crate::state::GameState;
use crate::tree::TreeNode;

/// Tree evaluator used to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Strategy::AlphaBeta),
            other => Err(SearchError::InvalidInput(format!("unknown strategy {other:?}"))),
        }
    }
}

/// Child of `root` chosen by `strategy`. Fails with
/// [`SearchError::EmptyTree`] when `root` has no children.
pub fn decide(root: &TreeNode, strategy: Strategy) -> SearchResult<&TreeNode> {
    let choice = match strategy {
        Strategy::Minimax => minimax_decide(root),
        Strategy::AlphaBeta => alpha_beta_decide(root),
    };
    choice.ok_or(SearchError::EmptyTree)
}

/// Generate the full tree below `state` and return the position after the
/// chosen move.
///
/// The evaluators maximize for X. When O is to move the board is searched
/// with the marks exchanged and the result exchanged back.
pub fn best_move(state: GameState, x_next: bool, strategy: Strategy) -> SearchResult<GameState> {
    let view = if x_next { state } else { state.swapped() };
    let root = TreeNode::generate(view, true);
    log::debug!("{strategy}: tree of {} nodes", root.size());
    let chosen = decide(&root, strategy)?.state;
    Ok(if x_next { chosen } else { chosen.swapped() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::max_player;
    use crate::state::Square;

    #[test]
    fn strategies_parse_and_display() {
        for s in [Strategy::Minimax, Strategy::AlphaBeta] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
        assert_eq!("Alpha-Beta".parse::<Strategy>().unwrap(), Strategy::AlphaBeta);
        assert!("negamax".parse::<Strategy>().is_err());
    }

    #[test]
    fn decide_on_leaf_is_an_error() {
        let root = TreeNode::new("XOX/XOO/OXX".parse().unwrap());
        assert_eq!(decide(&root, Strategy::Minimax), Err(SearchError::EmptyTree));
        assert_eq!(decide(&root, Strategy::AlphaBeta), Err(SearchError::EmptyTree));
    }

    #[test]
    fn best_move_blocks_the_diagonal() {
        let s: GameState = "O.X/XOO/X..".parse().unwrap();
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let next = best_move(s, true, strategy).unwrap();
            assert_eq!(next, s.with(2, 2, Square::X));
        }
    }

    #[test]
    fn o_plays_for_a_forced_win() {
        // O to move threatens the middle column.
        let s: GameState = "XOX/.O./X..".parse().unwrap();
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let next = best_move(s, false, strategy).unwrap();
            assert_eq!(next.empty_squares().count(), 3);
            let o_count = next.board.iter().flatten().filter(|&&q| q == Square::O).count();
            assert_eq!(o_count, 3);
            assert_eq!(max_player(&TreeNode::generate(next, true)), -1.0);
        }
    }

    #[test]
    fn best_move_on_full_board_fails() {
        let s: GameState = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(best_move(s, true, Strategy::Minimax), Err(SearchError::EmptyTree));
    }
}
