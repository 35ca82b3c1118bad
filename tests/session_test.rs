//! Tests for the human-vs-engine session.

use strictly_minimax::{ENGINE, GameSession, HUMAN, SessionError};
use strictly_tictactoe::{Mark, Outcome, Position, Square};

#[test]
fn test_occupied_square_rejected() {
    let mut session = GameSession::new();
    session.human_move(Position::Center).unwrap();
    let reply = session.engine_move().unwrap();

    let result = session.human_move(reply.position);
    assert_eq!(result, Err(SessionError::SquareOccupied(reply.position)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_engine_waits_for_human() {
    let mut session = GameSession::new();
    assert_eq!(
        session.engine_move().unwrap_err(),
        SessionError::NotYourTurn(ENGINE)
    );
}

#[test]
fn test_engine_blocks_human_threat() {
    let mut session = GameSession::new();
    session.human_move(Position::TopLeft).unwrap();

    // Against a corner opening the center is the only reply that holds.
    let first = session.engine_move().unwrap();
    assert_eq!(first.position, Position::Center);
    assert_eq!(first.score, 0);
    assert_eq!(first.outcome, Outcome::InProgress);

    session.human_move(Position::TopCenter).unwrap();
    let block = session.engine_move().unwrap();
    assert_eq!(block.position, Position::TopRight);
}

#[test]
fn test_full_game_is_tallied_once() {
    let mut session = GameSession::new();
    while session.to_move().is_some() {
        if session.is_human_turn() {
            let pos = Position::ALL
                .into_iter()
                .find(|p| session.board().is_empty(*p))
                .unwrap();
            session.human_move(pos).unwrap();
        } else {
            session.engine_move().unwrap();
        }
    }

    // Filling squares in order never beats perfect play.
    assert_ne!(session.outcome(), Outcome::Win(HUMAN));
    assert_eq!(session.tally().games(), 1);
    assert_eq!(
        session.human_move(Position::Center).unwrap_err(),
        SessionError::GameOver
    );
    assert_eq!(session.engine_move().unwrap_err(), SessionError::GameOver);
    assert_eq!(session.tally().games(), 1);
}

#[test]
fn test_reset_keeps_tally() {
    let mut session = GameSession::new();
    while session.to_move().is_some() {
        if session.is_human_turn() {
            let pos = Position::ALL
                .into_iter()
                .rev()
                .find(|p| session.board().is_empty(*p))
                .unwrap();
            session.human_move(pos).unwrap();
        } else {
            session.engine_move().unwrap();
        }
    }
    let tally = *session.tally();

    session.reset();
    assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(session.to_move(), Some(Mark::X));
    assert_eq!(*session.tally(), tally);
}

#[test]
fn test_reset_tally_keeps_board() {
    let mut session = GameSession::new();
    while session.to_move().is_some() {
        if session.is_human_turn() {
            let pos = Position::ALL
                .into_iter()
                .find(|p| session.board().is_empty(*p))
                .unwrap();
            session.human_move(pos).unwrap();
        } else {
            session.engine_move().unwrap();
        }
    }
    assert_eq!(session.tally().games(), 1);
    let board = *session.board();

    session.reset_tally();
    assert_eq!(session.tally().games(), 0);
    assert_eq!(*session.board(), board);
    assert!(session.outcome().is_terminal());

    // The next finished game counts from zero.
    session.reset();
    while session.to_move().is_some() {
        if session.is_human_turn() {
            let pos = Position::ALL
                .into_iter()
                .find(|p| session.board().is_empty(*p))
                .unwrap();
            session.human_move(pos).unwrap();
        } else {
            session.engine_move().unwrap();
        }
    }
    assert_eq!(session.tally().games(), 1);
}
