//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Player, Square};

/// The eight winning index triples: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` holds all three cells of any line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let squares = board.squares();
    let mark = Square::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == mark))
}

/// Returns the winning player, checking X before O.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}
