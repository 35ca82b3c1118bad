//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
///
/// `X` always moves first and is the minimizing side of the search;
/// `O` is the maximizing side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Whether this mark is the maximizing side of the search.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Mark::O)
    }

    /// The mark placed by the side with the given search role.
    pub fn for_role(maximizing: bool) -> Self {
        if maximizing { Mark::O } else { Mark::X }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn from_char(c: char) -> Result<Self, BoardError> {
        match c {
            'X' | 'x' => Ok(Square::Occupied(Mark::X)),
            'O' | 'o' => Ok(Square::Occupied(Mark::O)),
            '.' | '-' | '_' | ' ' => Ok(Square::Empty),
            other => Err(BoardError::UnrecognizedMark(other)),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copies handed to the engine are independent of the
/// caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from exactly nine squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: &[Square]) -> Result<Self, BoardError> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::WrongCellCount(squares.len()))?;
        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index (0-8).
    pub fn get_index(&self, index: usize) -> Result<Square, BoardError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(BoardError::PositionOutOfBounds(index))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with(mut self, pos: Position, mark: Mark) -> Self {
        self.set(pos, Square::Occupied(mark));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// The mark whose turn it is, derived from the number of filled squares.
    pub fn to_move(&self) -> Mark {
        if self.filled() % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Whether the mark counts could arise from alternating play with X first.
    ///
    /// Evaluation and search never check this.
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = BoardError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Self::from_squares(&squares)
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares.to_vec()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells such as `"XO./.X./..O"`.
    ///
    /// `|`, `/`, `,` and line breaks are separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | ',' | '\n' | '\r'))
            .map(Square::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_squares(&squares)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            match square {
                Square::Empty => write!(f, ".")?,
                Square::Occupied(mark) => write!(f, "{}", mark)?,
            }
        }
        Ok(())
    }
}
