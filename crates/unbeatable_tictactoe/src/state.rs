//! Board state: the grid plus whose turn it is and whether the game ended.

use super::action::{InvalidMove, Move};
use super::outcome::Outcome;
use super::rules;
use super::types::{Board, CELLS, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state.
///
/// The board is only mutated through [`GameState::apply_move`]; turn and
/// outcome are settled separately so the caller decides when a move is
/// final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the last settled outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once a win or draw has been settled.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `mark` at `index`.
    ///
    /// Rejected when the game is over, the index is not 0-8, the square is
    /// occupied, or `mark` is not the player to move. On success the turn
    /// and outcome are left as they were until [`GameState::settle`].
    #[instrument(skip(self), fields(current = ?self.current_player))]
    pub fn apply_move(&mut self, index: usize, mark: Player) -> Result<(), InvalidMove> {
        let rejection = if self.is_over() {
            Some(InvalidMove::GameOver)
        } else if index >= CELLS {
            Some(InvalidMove::OutOfRange(index))
        } else if !self.board.is_empty(index) {
            Some(InvalidMove::Occupied(index))
        } else if mark != self.current_player {
            Some(InvalidMove::NotYourTurn(mark))
        } else {
            None
        };

        if let Some(err) = rejection {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        self.board.place(index, mark);
        self.history.push(Move::new(mark, index));
        debug!(moves = self.history.len(), "Move applied");
        Ok(())
    }

    /// Evaluates the board without changing anything.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate_outcome(&self.board)
    }

    /// Settles the turn after a move: records a finished outcome, or hands
    /// the turn to the opponent.
    #[instrument(skip(self))]
    pub fn settle(&mut self) -> Outcome {
        let outcome = self.evaluate_outcome();
        if outcome.is_over() {
            debug!(%outcome, "Game over");
            self.outcome = outcome;
        } else {
            self.current_player = self.current_player.opponent();
        }
        outcome
    }

    /// Returns true iff no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Clears the board, gives X the move and forgets the outcome.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear_all();
        self.current_player = Player::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_cell_only() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X).unwrap();
        assert!(!state.board().is_empty(4));
        // Turn is unresolved until settled.
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.settle(), Outcome::InProgress);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(9, Player::X), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_rejects_occupied() {
        let mut state = GameState::new();
        state.apply_move(0, Player::X).unwrap();
        state.settle();
        let before = state.clone();
        assert_eq!(state.apply_move(0, Player::O), Err(InvalidMove::Occupied(0)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejects_wrong_player() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_move(0, Player::O),
            Err(InvalidMove::NotYourTurn(Player::O))
        );
    }

    #[test]
    fn test_rejects_after_game_over() {
        let mut state = GameState::new();
        for (index, mark) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ] {
            state.apply_move(index, mark).unwrap();
            state.settle();
        }
        assert_eq!(state.outcome(), Outcome::Won(Player::X));
        assert_eq!(state.apply_move(8, Player::O), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X).unwrap();
        state.settle();
        state.reset();
        assert_eq!(state, GameState::new());
        assert!(!state.is_over());
        assert!(!state.is_full());
    }
}
