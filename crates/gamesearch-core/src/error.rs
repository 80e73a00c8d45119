//! Error type shared by the pathfinding and game-tree crates.
//!
//! "No path" and "no move" are ordinary results (`Ok(false)`, `Ok(None)`).
//! A [`SearchError`] always means the caller broke a precondition.

use std::fmt;

/// Precondition violations reported by search and decision functions.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A node id does not belong to the graph it was used with.
    NodeOutOfRange { node: usize, len: usize },
    /// A tile coordinate lies outside the grid.
    TileOutOfRange { row: i32, col: i32 },
    /// An edge weight was negative or not a finite number.
    NegativeWeight(f32),
    /// A decision was requested on a tree with no moves.
    EmptyTree,
    /// Any other malformed argument.
    InvalidInput(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, len } => {
                write!(f, "node {node} out of range for graph of {len} nodes")
            }
            Self::TileOutOfRange { row, col } => {
                write!(f, "tile ({row}, {col}) is outside the grid")
            }
            Self::NegativeWeight(w) => write!(f, "edge weight {w} must be finite and >= 0"),
            Self::EmptyTree => write!(f, "game tree has no moves to decide between"),
            Self::InvalidInput(s) => write!(f, "invalid input: {s}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Result alias used throughout the gamesearch crates.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SearchError::NodeOutOfRange { node: 7, len: 3 };
        assert_eq!(e.to_string(), "node 7 out of range for graph of 3 nodes");
        let e = SearchError::TileOutOfRange { row: -1, col: 4 };
        assert_eq!(e.to_string(), "tile (-1, 4) is outside the grid");
        assert_eq!(
            SearchError::EmptyTree.to_string(),
            "game tree has no moves to decide between"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(SearchError::NegativeWeight(-1.0));
        assert!(boxed.to_string().contains("-1"));
    }
}
