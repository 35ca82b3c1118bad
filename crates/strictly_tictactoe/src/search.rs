//! Exhaustive minimax search.
//!
//! Scores are from O's point of view: O is the maximizing side and X the
//! minimizing side, whichever mark the caller controls. Terminal scores do
//! not depend on depth, so a slow win scores the same as a fast one.

use super::outcome::{Outcome, evaluate};
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best score reachable from a board and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value of the board.
    pub score: i32,
    /// First move achieving `score`, absent on terminal or full boards.
    pub best_move: Option<Position>,
}

impl SearchResult {
    /// Score of a board X has won.
    pub const SCORE_X_WINS: i32 = -10;
    /// Score of a board O has won.
    pub const SCORE_O_WINS: i32 = 10;
    /// Score of a tied board.
    pub const SCORE_TIE: i32 = 0;

    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    /// Starting point for a side before any move has been tried.
    fn sentinel(maximizing: bool) -> Self {
        Self::terminal(if maximizing { i32::MIN } else { i32::MAX })
    }
}

/// Node counts gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Deepest ply reached below the root.
    pub max_depth: usize,
}

impl SearchStats {
    fn visit(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// A mark placed on the search's scratch board for the span of one ply.
///
/// Dropping the placement empties the square again, so every way out of
/// a ply leaves the scratch board as it found it.
struct Placement<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(pos));
        board.set(pos, Square::Occupied(mark));
        Self { board, pos }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

/// Finds the best score and move for the side to play.
///
/// `maximizing` selects O (true) or X (false) as the mover. The board is
/// taken by value; the caller's copy is never touched.
///
/// Calling this on a terminal board returns the terminal score and no
/// move. Calling it on a full board with no outcome is a precondition
/// violation and returns the side's sentinel (`i32::MIN` when maximizing,
/// `i32::MAX` otherwise) with no move; [`evaluate`] reports every full board
/// as won or tied, so that case never arises here. Callers must check for an
/// absent move before applying it.
pub fn search(board: Board, maximizing: bool) -> SearchResult {
    search_with_stats(board, maximizing).0
}

/// Searches for `mark`, maximizing when it is O.
pub fn search_for(board: Board, mark: Mark) -> SearchResult {
    search(board, mark.is_maximizing())
}

/// Like [`search`], also returning how much of the tree was explored.
#[instrument(skip(board), fields(board = %board))]
pub fn search_with_stats(board: Board, maximizing: bool) -> (SearchResult, SearchStats) {
    let mut scratch = board;
    let mut stats = SearchStats::default();
    let result = minimax(&mut scratch, 0, maximizing, &mut stats);
    debug_assert_eq!(scratch, board, "search left marks on its scratch board");
    debug!(
        score = result.score,
        best_move = ?result.best_move,
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "Search complete"
    );
    (result, stats)
}

fn minimax(board: &mut Board, depth: usize, maximizing: bool, stats: &mut SearchStats) -> SearchResult {
    stats.visit(depth);

    match evaluate(board) {
        Outcome::Win(Mark::X) => return SearchResult::terminal(SearchResult::SCORE_X_WINS),
        Outcome::Win(Mark::O) => return SearchResult::terminal(SearchResult::SCORE_O_WINS),
        Outcome::Tie => return SearchResult::terminal(SearchResult::SCORE_TIE),
        Outcome::InProgress => {}
    }

    let mark = Mark::for_role(maximizing);
    let mut best = SearchResult::sentinel(maximizing);

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let score = {
            let mut placed = Placement::new(board, pos, mark);
            minimax(placed.board(), depth + 1, !maximizing, stats).score
        };

        // Strict comparison keeps the lowest index among equal scores.
        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                score,
                best_move: Some(pos),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            search(won, true),
            SearchResult {
                score: SearchResult::SCORE_X_WINS,
                best_move: None
            }
        );

        let tied: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(search(tied, false).best_move, None);
        assert_eq!(search(tied, false).score, SearchResult::SCORE_TIE);
    }

    #[test]
    fn test_sentinels_before_any_move() {
        assert_eq!(
            SearchResult::sentinel(true),
            SearchResult {
                score: i32::MIN,
                best_move: None
            }
        );
        assert_eq!(SearchResult::sentinel(false).score, i32::MAX);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // X X . / O O . / X . .  -- O completes the middle row.
        let board: Board = "XX.OO.X..".parse().unwrap();
        let result = search(board, true);
        assert_eq!(result.score, SearchResult::SCORE_O_WINS);
        assert_eq!(result.best_move, Some(Position::MiddleRight));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let result = search(board, false);
        assert_eq!(result.score, SearchResult::SCORE_X_WINS);
        assert_eq!(result.best_move, Some(Position::TopRight));
    }

    #[test]
    fn test_equal_scores_keep_lowest_index() {
        // O wins by completing the middle row, but blocking at TopRight also
        // forks and wins later. Depth does not count, so the lower index wins.
        let board: Board = "XX.OO....".parse().unwrap();
        let result = search(board, true);
        assert_eq!(result.score, SearchResult::SCORE_O_WINS);
        assert_eq!(result.best_move, Some(Position::TopRight));
    }

    #[test]
    fn test_o_blocks_threat() {
        // X . . / . X . / O . .  -- O must take BottomRight.
        let board: Board = "X...X.O..".parse().unwrap();
        let result = search(board, true);
        assert_eq!(result.best_move, Some(Position::BottomRight));
    }

    #[test]
    fn test_last_square() {
        let board: Board = "XOXOXOOX.".parse().unwrap();
        let result = search(board, false);
        assert_eq!(result.best_move, Some(Position::BottomRight));
        assert_eq!(result.score, SearchResult::SCORE_X_WINS);
    }

    #[test]
    fn test_search_for_matches_role() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(search_for(board, Mark::X), search(board, false));
        assert_eq!(search_for(board, Mark::O), search(board, true));
    }

    #[test]
    fn test_stats_count_nodes() {
        let board: Board = "XOXOXOOX.".parse().unwrap();
        let (_, stats) = search_with_stats(board, false);
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.max_depth, 1);

        let (_, stats) = search_with_stats("XXXOO....".parse().unwrap(), true);
        assert_eq!(stats, SearchStats { nodes: 1, max_depth: 0 });
    }

    #[test]
    fn test_placement_restores_square() {
        let mut board: Board = "X...O....".parse().unwrap();
        let before = board;
        {
            let mut placed = Placement::new(&mut board, Position::TopRight, Mark::X);
            assert_eq!(
                placed.board().get(Position::TopRight),
                Square::Occupied(Mark::X)
            );
        }
        assert_eq!(board, before);
    }
}
