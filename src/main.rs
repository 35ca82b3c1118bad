//! Strictly Minimax - Unified CLI
//!
//! Evaluates boards, asks the engine for moves, and runs a terminal game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use strictly_minimax::{Cli, Command, GameSession, PlayConfig};
use strictly_tictactoe::{Board, Outcome, Position, evaluate, rules, search_with_stats};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate { board } => {
            init_tracing("warn");
            run_evaluate(board)
        }
        Command::Search {
            board,
            minimizing,
            json,
        } => {
            init_tracing("warn");
            run_search(board, !minimizing, json)
        }
        Command::Play { config } => run_play(config),
    }
}

/// Installs the global subscriber, preferring `RUST_LOG` over the fallback.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the outcome of a board and the line that decided it.
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: Board) -> Result<()> {
    let outcome = evaluate(&board);
    println!("{}\n", board.display());
    println!("{}", outcome);
    if let Some((line, _)) = rules::winning_line(&board) {
        println!("Line: {}", line);
    }
    Ok(())
}

/// Prints the engine's score and move for one side.
#[instrument(skip(board), fields(board = %board))]
fn run_search(board: Board, maximizing: bool, json: bool) -> Result<()> {
    let (result, stats) = search_with_stats(board, maximizing);
    info!(nodes = stats.nodes, "Search finished");

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to encode result")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Score: {}", result.score);
    match result.best_move {
        Some(pos) => println!("Move: {} ({})", pos.to_index(), pos),
        None => println!("Move: none ({})", evaluate(&board)),
    }
    Ok(())
}

/// Runs human-vs-engine games until the player declines a rematch.
fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = PlayConfig::load(config_path.as_deref())?;
    init_tracing(config.log_filter());
    info!(?config, "Starting interactive play");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = GameSession::new();

    println!("You are X and move first. Enter a square number (1-9) or a name like \"center\".");

    loop {
        match session.outcome() {
            Outcome::InProgress if session.is_human_turn() => {
                println!("\n{}\n", session.board().display());
                print!("Your move: ");
                std::io::stdout().flush()?;

                let Some(line) = lines.next().transpose()? else {
                    debug!("Input closed");
                    break;
                };
                let Some(pos) = Position::from_label_or_number(&line) else {
                    println!("Unknown square {:?}", line.trim());
                    continue;
                };
                if let Err(e) = session.human_move(pos) {
                    println!("{}", e);
                }
            }
            Outcome::InProgress => {
                let played = session.engine_move()?;
                println!("Engine plays {} ({})", played.position.to_index() + 1, played.position);
                if *config.show_engine_score() {
                    println!("Engine score: {}", played.score);
                }
                if *config.show_search_stats() {
                    println!(
                        "Searched {} nodes, {} plies deep",
                        played.stats.nodes, played.stats.max_depth
                    );
                }
            }
            outcome => {
                println!("\n{}\n", session.board().display());
                match outcome.winner() {
                    Some(mark) if mark == strictly_minimax::HUMAN => println!("You win!"),
                    Some(_) => println!("The engine wins."),
                    None => println!("It's a tie."),
                }
                println!("{}", session.tally());

                print!("Play again? [y/N, r = reset score and play] ");
                std::io::stdout().flush()?;
                let answer = lines.next().transpose()?.unwrap_or_default();
                match answer.trim().to_ascii_lowercase().as_str() {
                    "y" => {}
                    "r" => {
                        session.reset_tally();
                        println!("{}", session.tally());
                    }
                    _ => break,
                }
                session.reset();
            }
        }
    }

    if session.tally().games() == 0 {
        warn!("Session ended before any game finished");
    }
    println!("Final {}", session.tally());
    Ok(())
}
