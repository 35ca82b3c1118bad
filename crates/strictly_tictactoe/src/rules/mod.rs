//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the evaluator and the search share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, LINES, check_winner, winning_line};
