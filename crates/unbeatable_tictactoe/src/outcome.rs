//! Game outcomes and the events surfaced to the presentation layer.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(winner) => {
                std::fmt::Display::fmt(&OutcomeEvent::Win { winner: *winner }, f)
            }
            Outcome::Draw => std::fmt::Display::fmt(&OutcomeEvent::Draw, f),
        }
    }
}

/// What the presentation layer should show after a move exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum OutcomeEvent {
    /// The game goes on; `next_player` is to move.
    Continue {
        /// Mark whose turn it is now.
        next_player: Player,
    },
    /// The game ended with a winner.
    Win {
        /// The winning mark.
        winner: Player,
    },
    /// The game ended in a draw.
    Draw,
}

impl OutcomeEvent {
    /// Builds the event for a settled outcome and the mark to move next.
    pub fn from_outcome(outcome: Outcome, next_player: Player) -> Self {
        match outcome {
            Outcome::InProgress => OutcomeEvent::Continue { next_player },
            Outcome::Won(winner) => OutcomeEvent::Win { winner },
            Outcome::Draw => OutcomeEvent::Draw,
        }
    }

    /// Returns true if this event ends the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OutcomeEvent::Continue { .. })
    }
}

impl std::fmt::Display for OutcomeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeEvent::Continue { next_player } => write!(f, "Player {}'s turn", next_player),
            OutcomeEvent::Win { winner } => write!(f, "Player {} wins!", winner),
            OutcomeEvent::Draw => write!(f, "It's a tie!"),
        }
    }
}
