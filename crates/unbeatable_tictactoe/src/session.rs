//! A single human-vs-computer game.

use super::action::{InvalidMove, Move};
use super::outcome::{Outcome, OutcomeEvent};
use super::search;
use super::state::GameState;
use super::types::{Board, Player};
use tracing::{debug, info, instrument};

/// Mark played by the human.
pub const HUMAN: Player = Player::X;

/// Mark played by the computer.
pub const COMPUTER: Player = Player::O;

/// One game between the human (X) and the search engine (O).
///
/// The session owns its state outright; independent sessions share
/// nothing and may live on different threads.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    last_computer_move: Option<usize>,
}

impl Session {
    /// Creates a fresh session with X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self::default()
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the settled outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns true once the game has been decided.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Cell the computer played in the most recent exchange, if any.
    pub fn last_computer_move(&self) -> Option<usize> {
        self.last_computer_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Plays X at `index`, then lets the computer answer if the game goes on.
    ///
    /// On rejection nothing changes and the error is returned. Otherwise the
    /// returned event describes the position after both moves: a win, a draw,
    /// or `Continue` with X to move again.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<OutcomeEvent, InvalidMove> {
        let before = self.clone();
        let result = self.exchange(index);
        if result.is_err() {
            *self = before;
        }
        result
    }

    fn exchange(&mut self, index: usize) -> Result<OutcomeEvent, InvalidMove> {
        self.state.apply_move(index, HUMAN)?;
        self.last_computer_move = None;

        let outcome = self.state.settle();
        if outcome.is_over() {
            info!(position = index, %outcome, "Human move ended the game");
            return Ok(OutcomeEvent::from_outcome(outcome, self.current_player()));
        }

        let reply = self.answer()?;

        let outcome = self.state.settle();
        let event = OutcomeEvent::from_outcome(outcome, self.current_player());
        debug!(position = index, reply, %event, "Exchange complete");
        if outcome.is_over() {
            info!(%outcome, "Computer move ended the game");
        }
        Ok(event)
    }

    /// Plays the computer's choice. Fails if O is not the player to move.
    fn answer(&mut self) -> Result<usize, InvalidMove> {
        let reply = search::choose_move(self.state.board());
        self.state.apply_move(reply, COMPUTER)?;
        self.last_computer_move = Some(reply);
        Ok(reply)
    }

    /// Computer's choice for the current board without playing it.
    pub fn get_computer_move(&self) -> usize {
        search::get_computer_move(self.state.board())
    }

    /// Clears the board and gives X the first move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.state.reset();
        self.last_computer_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_plays_both_moves() {
        let mut session = Session::new();
        let event = session.apply_human_move(4).unwrap();
        assert_eq!(event, OutcomeEvent::Continue { next_player: Player::X });
        assert_eq!(session.last_computer_move(), Some(0));
        assert_eq!(session.board().to_string(), "O...X....");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = Session::new();
        session.apply_human_move(4).unwrap();
        let board = session.board().clone();

        assert_eq!(session.apply_human_move(0), Err(InvalidMove::Occupied(0)));
        assert_eq!(session.apply_human_move(42), Err(InvalidMove::OutOfRange(42)));
        assert_eq!(session.board(), &board);
        assert_eq!(session.last_computer_move(), Some(0));
    }

    #[test]
    fn test_reset_session() {
        let mut session = Session::new();
        session.apply_human_move(0).unwrap();
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_player(), Player::X);
        assert!(!session.is_over());
        assert_eq!(session.last_computer_move(), None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_computer_wins_when_human_blunders() {
        let mut session = Session::new();
        // O answers 0 with 4, then X ignores the threats.
        assert_eq!(session.last_computer_move(), None);
        session.apply_human_move(0).unwrap();
        assert_eq!(session.last_computer_move(), Some(4));
        session.apply_human_move(1).unwrap();
        assert_eq!(session.last_computer_move(), Some(2));
        let event = session.apply_human_move(8).unwrap();
        assert_eq!(event, OutcomeEvent::Win { winner: Player::O });
        assert!(session.is_over());
        assert_eq!(session.apply_human_move(3), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_computer_answer_out_of_turn_is_rejected() {
        let mut session = Session::new();
        session.apply_human_move(4).unwrap();
        let before = session.clone();

        // X is to move again, so O may not play.
        assert_eq!(session.answer(), Err(InvalidMove::NotYourTurn(COMPUTER)));
        assert_eq!(session.state(), before.state());
        assert_eq!(session.last_computer_move(), Some(0));
    }
}
