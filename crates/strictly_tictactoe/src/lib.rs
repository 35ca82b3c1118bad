//! Pure tic-tac-toe logic: board values, outcome evaluation and
//! exhaustive minimax search.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Outcome, Position, evaluate, search};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! // X to move (minimizing) completes the top row.
//! let result = search(board, false);
//! assert_eq!(result.best_move, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::BoardError;
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use search::{SearchResult, SearchStats, search, search_for, search_with_stats};
pub use types::{Board, Mark, Square};
