//! Keyboard mapping.

use crossterm::event::KeyCode;
use unbeatable_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play X at a specific cell.
    Play(Position),
    /// Play X at the cursor.
    PlayCursor,
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Start a new game.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action. Digits 1-9 address cells row by row.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::MoveCursor(key),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}
