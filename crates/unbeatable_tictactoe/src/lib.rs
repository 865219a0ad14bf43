//! Unbeatable tic-tac-toe - pure game logic.
//!
//! The human plays X and moves first; the computer plays O and answers
//! every move with an exhaustive minimax search, so it never loses.
//!
//! # Architecture
//!
//! - **Board state**: the grid, whose turn it is, and the settled outcome
//! - **Rules**: win-line and full-board detection
//! - **Search**: full-depth minimax choosing O's move
//! - **Session**: one human-vs-computer game gluing the above together
//!
//! Nothing here performs I/O; presentation lives in a separate crate.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{OutcomeEvent, Player, Session};
//!
//! let mut session = Session::new();
//! let event = session.apply_human_move(4).unwrap();
//! assert_eq!(event, OutcomeEvent::Continue { next_player: Player::X });
//! assert_eq!(session.last_computer_move(), Some(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod session;
mod state;
mod types;

pub use action::{InvalidMove, Move};
pub use outcome::{Outcome, OutcomeEvent};
pub use position::Position;
pub use rules::evaluate_outcome;
pub use search::{CandidateScore, SearchReport, analyze, choose_move, get_computer_move};
pub use session::{COMPUTER, HUMAN, Session};
pub use state::GameState;
pub use types::{Board, BoardParseError, CELLS, Player, Square};
