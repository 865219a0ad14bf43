//! Exhaustive minimax search for the computer player (O).
//!
//! Every line of play is explored to a terminal position. There is no
//! pruning, no randomness and no depth limit, so the chosen move is a pure
//! function of the board. Depth only shifts terminal scores so that faster
//! wins and slower losses are preferred.

use super::outcome::Outcome;
use super::rules::{self, has_won, is_full};
use super::types::{Board, CELLS, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Base value of a won position before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Score of a single candidate cell for O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Cell index (0-8).
    pub index: usize,
    /// Minimax value of placing O there.
    pub score: i32,
}

/// Full result of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen cell: highest score, lowest index on ties.
    pub best: usize,
    /// Score of the chosen cell.
    pub score: i32,
    /// Every empty cell with its score, in ascending index order.
    pub candidates: Vec<CandidateScore>,
    /// Positions scored during the search.
    pub nodes: u64,
}

/// Scratch board owned by a single search.
///
/// Each recursive step marks a cell, recurses, then empties the same cell
/// before looking at the next one, so the board is back to its starting
/// position whenever a call returns.
struct Search {
    board: Board,
    nodes: u64,
}

impl Search {
    fn new(board: &Board) -> Self {
        Self {
            board: board.clone(),
            nodes: 0,
        }
    }

    fn score(&mut self, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if has_won(&self.board, Player::O) {
            return WIN_SCORE - depth;
        }
        if has_won(&self.board, Player::X) {
            return depth - WIN_SCORE;
        }
        if is_full(&self.board) {
            return 0;
        }

        let (mark, mut best) = if maximizing {
            (Player::O, i32::MIN)
        } else {
            (Player::X, i32::MAX)
        };

        for index in 0..CELLS {
            if !self.board.is_empty(index) {
                continue;
            }
            self.board.place(index, mark);
            let score = self.score(depth + 1, !maximizing);
            self.board.clear(index);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Minimax value of `board` from O's point of view.
///
/// `maximizing` is true when O is to move. Terminal checks run in a fixed
/// order: O won, X won, board full.
pub fn score(board: &Board, depth: i32, maximizing: bool) -> i32 {
    Search::new(board).score(depth, maximizing)
}

/// Scores every empty cell for O and picks the best one.
///
/// # Panics
///
/// Panics if the board is already won or full. Callers must only ask for
/// a move while the game is in progress.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> SearchReport {
    let outcome = rules::evaluate_outcome(board);
    assert!(
        outcome == Outcome::InProgress,
        "search requires a game in progress, got {outcome:?} on {board}"
    );

    let mut search = Search::new(board);
    let mut candidates = Vec::new();
    let mut best: Option<CandidateScore> = None;

    for index in 0..CELLS {
        if !search.board.is_empty(index) {
            continue;
        }
        search.board.place(index, Player::O);
        let score = search.score(0, false);
        search.board.clear(index);

        let candidate = CandidateScore { index, score };
        candidates.push(candidate);
        // Strictly greater: equal scores keep the earlier cell.
        if best.is_none_or(|b| score > b.score) {
            best = Some(candidate);
        }
    }

    // An in-progress board always has an empty cell.
    let Some(best) = best else {
        unreachable!("in-progress board {board} has no empty cell")
    };

    debug!(
        best = best.index,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );

    SearchReport {
        best: best.index,
        score: best.score,
        candidates,
        nodes: search.nodes,
    }
}

/// Returns the cell O should play.
///
/// # Panics
///
/// See [`analyze`].
pub fn choose_move(board: &Board) -> usize {
    analyze(board).best
}

/// Pure query used by the presentation layer; never changes any state.
pub fn get_computer_move(board: &Board) -> usize {
    choose_move(board)
}
