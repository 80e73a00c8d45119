//! Exhaustive game-tree generation.
//!
//! The tree holds every continuation of a position down to full boards.
//! Generation does not stop at a won position; evaluators only score
//! leaves. For 3×3 boards the full tree from an empty board has 549 946
//! nodes; there is no depth limit, so larger boards would not finish.

use crate::state::{GameState, Square};

/// A position and all positions reachable from it in one move.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub state: GameState,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A leaf holding `state`.
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            children: Vec::new(),
        }
    }

    /// Build the complete tree below `state`.
    pub fn generate(state: GameState, x_next: bool) -> Self {
        let mut root = Self::new(state);
        root.gen_state(x_next);
        root
    }

    /// Add one child per empty square, filled with X when `x_next` and O
    /// otherwise, then expand every child with the other player to move.
    /// Children are ordered row-major by the square that was filled.
    pub fn gen_state(&mut self, x_next: bool) {
        let sq = if x_next { Square::X } else { Square::O };
        let state = self.state;
        self.children = state
            .empty_squares()
            .map(|(r, c)| {
                let mut child = TreeNode::new(state.with(r, c, sq));
                child.gen_state(!x_next);
                child
            })
            .collect();
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the tree, this one included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }
}
