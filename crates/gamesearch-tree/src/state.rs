//! Tic-tac-toe board state and scoring.

use std::fmt;
use std::str::FromStr;

use gamesearch_core::SearchError;

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Square {
    #[default]
    Empty,
    X,
    O,
}

impl Square {
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::X => 'X',
            Square::O => 'O',
        }
    }

    /// The other player's mark; `Empty` stays empty.
    pub fn opponent(self) -> Square {
        match self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' | ' ' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::X),
            'O' | 'o' => Some(Square::O),
            _ => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Every row, column and diagonal as `(row, col)` triples, in the order
/// they are scored: rows top to bottom, columns left to right, then the
/// two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// A 3×3 board snapshot. X is the maximizing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: [[Square; 3]; 3],
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Square {
        self.board[row][col]
    }

    /// Copy of this state with `sq` at `row`, `col`.
    pub fn with(mut self, row: usize, col: usize, sq: Square) -> Self {
        self.board[row][col] = sq;
        self
    }

    /// Coordinates of empty squares, row-major.
    pub fn empty_squares(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| self.board[r][c] == Square::Empty)
    }

    /// This board with X and O exchanged. Scores flip sign.
    pub fn swapped(mut self) -> Self {
        for sq in self.board.iter_mut().flatten() {
            *sq = sq.opponent();
        }
        self
    }

    pub fn is_full(&self) -> bool {
        self.empty_squares().next().is_none()
    }

    /// Owner of the first completed line, scanning rows, then columns,
    /// then diagonals. Lines of empty squares do not count.
    pub fn winner(&self) -> Option<Square> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, c)| self.board[r][c]);
            (a != Square::Empty && a == b && b == c).then_some(a)
        })
    }

    /// +1 if X completed a line, −1 if O did, 0 otherwise.
    ///
    /// Defined for every state. A draw and an unfinished game both score
    /// 0; the tree evaluators only read this at full boards.
    pub fn score(&self) -> f64 {
        match self.winner() {
            Some(Square::X) => 1.0,
            Some(Square::O) => -1.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.board.iter().enumerate() {
            writeln!(f, "{}|{}|{}", row[0], row[1], row[2])?;
            if i < 2 {
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

impl FromStr for GameState {
    type Err = SearchError;

    /// Parse nine squares in row-major order. `.`, `_` and `' '` are empty
    /// squares; `/`, `|`, `-`, `+`, tabs and newlines are skipped, so
    /// `"O.X/XOO/X.."`, `"O.XXOOX.."` and the [`Display`](fmt::Display)
    /// drawing all parse to the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r' | '\t' | '-' | '+'))
            .map(|c| {
                Square::from_char(c)
                    .ok_or_else(|| SearchError::InvalidInput(format!("unexpected square {c:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if squares.len() != 9 {
            return Err(SearchError::InvalidInput(format!(
                "expected 9 squares, got {}",
                squares.len()
            )));
        }
        let mut state = GameState::new();
        for (i, sq) in squares.into_iter().enumerate() {
            state.board[i / 3][i % 3] = sq;
        }
        Ok(state)
    }
}
