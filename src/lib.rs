//! Strictly Minimax library - terminal caller for the tic-tac-toe engine
//!
//! The engine itself lives in [`strictly_tictactoe`]; this crate holds the
//! pieces a front end needs around it.
//!
//! # Architecture
//!
//! - **Session**: persisted board, derived turn order, win/tie/loss tally
//! - **Config**: TOML play settings
//! - **CLI**: clap command definitions
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{GameSession, HUMAN};
//! use strictly_tictactoe::Position;
//!
//! # fn example() -> Result<(), strictly_minimax::SessionError> {
//! let mut session = GameSession::new();
//! session.human_move(Position::Center)?;
//! let reply = session.engine_move()?;
//! assert_ne!(reply.position, Position::Center);
//! assert_eq!(session.to_move(), Some(HUMAN));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Session
pub use session::{ENGINE, EngineMove, GameSession, HUMAN, SessionError, Tally};
