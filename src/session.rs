//! Human-vs-engine game session.
//!
//! The session owns the persisted board and derives whose turn it is from
//! the board itself. The engine only ever sees copies.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, Mark, Outcome, Position, SearchStats, Square, evaluate, search_with_stats,
};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human. X always moves first.
pub const HUMAN: Mark = Mark::X;

/// Mark played by the engine, the maximizing side of the search.
pub const ENGINE: Mark = Mark::O;

/// Finished games counted from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games the human won.
    wins: u32,
    /// Games that ended in a tie.
    ties: u32,
    /// Games the engine won.
    losses: u32,
}

impl Tally {
    /// Counts a finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) if mark == HUMAN => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Zeroes every count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of finished games.
    pub fn games(&self) -> u32 {
        self.wins + self.ties + self.losses
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Ties: {}  Losses: {}",
            self.wins, self.ties, self.losses
        )
    }
}

/// Reasons a session refuses a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error)]
pub enum SessionError {
    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The other side is to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Mark),

    /// The engine returned no move for a board still in progress.
    #[display("Engine found no move to play")]
    NoMoveAvailable,
}

/// A move played by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMove {
    /// Where the engine placed its mark.
    pub position: Position,
    /// Minimax score of the board before the move.
    pub score: i32,
    /// Size of the search that chose the move.
    pub stats: SearchStats,
    /// Board outcome after the move.
    pub outcome: Outcome,
}

/// A single board plus the running tally across games.
#[derive(Debug, Clone, Default, Getters)]
pub struct GameSession {
    /// The persisted board.
    board: Board,
    /// Results of finished games.
    tally: Tally,
}

impl GameSession {
    /// Creates a session with an empty board and zero tally.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// The mark to move, or `None` when the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        if self.outcome().is_terminal() {
            None
        } else {
            Some(self.board.to_move())
        }
    }

    /// Whether the human should move next.
    pub fn is_human_turn(&self) -> bool {
        self.to_move() == Some(HUMAN)
    }

    /// Places the human's mark.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, pos: Position) -> Result<Outcome, SessionError> {
        self.check_turn(HUMAN)?;
        if !self.board.is_empty(pos) {
            return Err(SessionError::SquareOccupied(pos));
        }
        Ok(self.apply(pos, HUMAN))
    }

    /// Asks the engine for a move and plays it.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<EngineMove, SessionError> {
        self.check_turn(ENGINE)?;
        let (result, stats) = search_with_stats(self.board, ENGINE.is_maximizing());
        let position = result.best_move.ok_or_else(|| {
            warn!(board = %self.board, "Search returned no move");
            SessionError::NoMoveAvailable
        })?;
        debug!(%position, score = result.score, "Engine chose move");
        let outcome = self.apply(position, ENGINE);
        Ok(EngineMove {
            position,
            score: result.score,
            stats,
            outcome,
        })
    }

    /// Clears the board for another game, keeping the tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(tally = %self.tally, "Starting new game");
        self.board = Board::new();
    }

    /// Zeroes the tally, leaving the board as it is.
    #[instrument(skip(self))]
    pub fn reset_tally(&mut self) {
        info!(tally = %self.tally, "Resetting score");
        self.tally.reset();
    }

    fn check_turn(&self, mark: Mark) -> Result<(), SessionError> {
        match self.to_move() {
            None => Err(SessionError::GameOver),
            Some(to_move) if to_move != mark => Err(SessionError::NotYourTurn(mark)),
            Some(_) => Ok(()),
        }
    }

    fn apply(&mut self, pos: Position, mark: Mark) -> Outcome {
        self.board.set(pos, Square::Occupied(mark));
        if !self.board.is_consistent() {
            warn!(
                board = %self.board,
                x_count = self.board.count(Mark::X),
                o_count = self.board.count(Mark::O),
                "Board mark counts are unreachable"
            );
        }

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game finished");
            self.tally.record(outcome);
        }
        outcome
    }
}
