//! Board construction errors.

use derive_more::{Display, Error};

/// Error raised when a board value cannot be constructed.
///
/// Boards are rejected at construction so a malformed snapshot never
/// reaches the evaluator or the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The input did not describe exactly nine squares.
    #[display("Board must have 9 squares, got {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Unrecognized mark {:?}", _0)]
    UnrecognizedMark(#[error(not(source))] char),

    /// A square index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    PositionOutOfBounds(#[error(not(source))] usize),
}
