//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; they hold no state and never mutate
//! the board, so the search engine can call them on its scratch copy.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner, has_won};

use super::outcome::Outcome;
use super::types::{Board, Player};

/// Classifies a board.
///
/// X is checked before O. Under legal play both can never hold at once,
/// but the order is fixed so the result is well defined on any board.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if has_won(board, Player::X) {
        Outcome::Won(Player::X)
    } else if has_won(board, Player::O) {
        Outcome::Won(Player::O)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
