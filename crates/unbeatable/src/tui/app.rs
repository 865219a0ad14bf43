//! Application state and logic.

use super::input::{self, Action};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use unbeatable_tictactoe::{
    Board, COMPUTER, OutcomeEvent, Position, Session, Square, choose_move,
};

/// Computer move that has been played but not yet shown.
#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    cell: usize,
    event: OutcomeEvent,
    at: Instant,
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    status: String,
    reveal_delay: Duration,
    pending: Option<PendingReveal>,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(reveal_delay: Duration, show_hints: bool) -> Self {
        let mut app = Self {
            session: Session::new(),
            cursor: Position::Center,
            status: String::new(),
            reveal_delay,
            pending: None,
            show_hints,
            should_quit: false,
        };
        app.status = app.turn_status(OutcomeEvent::Continue {
            next_player: app.session.current_player(),
        });
        app
    }

    /// Board as the player should see it: a pending computer move stays hidden.
    pub fn visible_board(&self) -> Board {
        let board = self.session.board();
        match self.pending {
            Some(pending) => {
                let mut squares = *board.squares();
                squares[pending.cell] = Square::Empty;
                Board::from_squares(squares)
            }
            None => board.clone(),
        }
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true when the game is decided and nothing is left to reveal.
    pub fn can_restart(&self) -> bool {
        self.session.is_over() && self.pending.is_none()
    }

    /// Reveals the computer's move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending
            && now >= pending.at
        {
            debug!(cell = pending.cell, "Revealing computer move");
            self.pending = None;
            self.status = self.turn_status(pending.event);
        }
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::Play(position) => {
                self.cursor = position;
                self.play(position, now);
            }
            Action::PlayCursor => self.play(self.cursor, now),
            Action::Ignore => {}
        }
    }

    fn play(&mut self, position: Position, now: Instant) {
        if self.pending.is_some() {
            debug!("Ignoring input while the computer's move is pending");
            return;
        }

        match self.session.apply_human_move(position.to_index()) {
            Ok(event) => {
                info!(position = %position, %event, "Human move played");
                match self.session.last_computer_move() {
                    Some(cell) if !self.reveal_delay.is_zero() => {
                        self.pending = Some(PendingReveal {
                            cell,
                            event,
                            at: now + self.reveal_delay,
                        });
                        self.status = OutcomeEvent::Continue {
                            next_player: COMPUTER,
                        }
                        .to_string();
                    }
                    _ => self.status = self.turn_status(event),
                }
            }
            Err(e) => {
                warn!(position = %position, error = %e, "Move rejected");
                self.status = e.to_string();
            }
        }
    }

    fn restart(&mut self) {
        if !self.can_restart() {
            self.status = "Restart is available once the game is over.".to_string();
            return;
        }
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.status = self.turn_status(OutcomeEvent::Continue {
            next_player: self.session.current_player(),
        });
    }

    fn turn_status(&self, event: OutcomeEvent) -> String {
        match event {
            OutcomeEvent::Continue { .. } if self.show_hints => {
                let hint = choose_move(&self.session.board().swapped());
                let label = Position::from_index(hint).map_or("?", |p| p.label());
                format!("{event} (hint: {label})")
            }
            OutcomeEvent::Continue { .. } => event.to_string(),
            _ => format!("{event} Press 'r' to restart or 'q' to quit."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use unbeatable_tictactoe::Player;

    fn start() -> (App, Instant) {
        (App::new(Duration::from_millis(500), false), Instant::now())
    }

    #[test]
    fn test_initial_status() {
        let (app, _) = start();
        assert_eq!(app.status(), "Player X's turn");
        assert_eq!(app.visible_board(), Board::new());
    }

    #[test]
    fn test_computer_move_hidden_until_delay() {
        let (mut app, now) = start();
        app.handle(Action::Play(Position::Center), now);

        assert_eq!(app.status(), "Player O's turn");
        assert_eq!(app.visible_board().to_string(), "....X....");

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.visible_board().to_string(), "....X....");

        app.tick(now + Duration::from_millis(500));
        assert_eq!(app.visible_board().to_string(), "O...X....");
        assert_eq!(app.status(), "Player X's turn");
    }

    #[test]
    fn test_input_ignored_while_pending() {
        let (mut app, now) = start();
        app.handle(Action::Play(Position::Center), now);
        app.handle(Action::Play(Position::BottomRight), now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.visible_board().to_string(), "O...X....");
    }

    #[test]
    fn test_rejected_move_is_shown() {
        let (mut app, now) = start();
        app.handle(Action::Play(Position::Center), now);
        app.tick(now + Duration::from_secs(1));
        app.handle(Action::Play(Position::TopLeft), now);
        assert_eq!(app.status(), "Square 0 is already occupied");
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut app = App::new(Duration::ZERO, false);
        let now = Instant::now();
        app.handle(Action::Play(Position::TopLeft), now);
        app.handle(Action::Restart, now);
        assert!(app.status().starts_with("Restart is available"));
        assert_ne!(app.visible_board(), Board::new());

        // O answers 0 with 4, 1 with 2, then wins on 2-4-6.
        app.handle(Action::Play(Position::TopCenter), now);
        app.handle(Action::Play(Position::BottomRight), now);
        assert!(app.can_restart());
        assert!(app.status().starts_with("Player O wins!"));

        app.handle(Action::Restart, now);
        assert_eq!(app.visible_board(), Board::new());
        assert_eq!(app.status(), "Player X's turn");
    }

    #[test]
    fn test_hints_suggest_a_move_for_x() {
        let app = App::new(Duration::ZERO, true);
        assert_eq!(app.status(), "Player X's turn (hint: Top-left)");
    }

    #[test]
    fn test_cursor_and_quit() {
        let (mut app, now) = start();
        app.handle(input::action_for(KeyCode::Up), now);
        assert_eq!(app.cursor(), Position::TopCenter);
        app.handle(input::action_for(KeyCode::Enter), now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(
            app.visible_board().get(1),
            Some(Square::Occupied(Player::X))
        );
        app.handle(Action::Quit, now);
        assert!(app.should_quit());
    }
}
