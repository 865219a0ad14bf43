//! Terminal UI: renders the board and forwards key presses to the session.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::config::PlayConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub async fn run_tui(config: PlayConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.reveal_delay(), *config.show_hints());
    let res = run_app(&mut terminal, &mut app).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle(action_for(key.code), Instant::now());
        }

        // Frame pacing; the reveal timer is checked on the next tick.
        sleep(Duration::from_millis(16)).await;
    }
}

/// Runs its cleanup once when dropped, including on early `?` returns.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    info!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_restores_after_failed_setup() {
        let restored = Cell::new(0);
        let setup = || -> io::Result<()> {
            let _restore = RestoreGuard::new(|| restored.set(restored.get() + 1));
            Err::<(), _>(io::Error::other("no alternate screen"))?;
            Ok(())
        };

        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_normal_exit() {
        let restored = Cell::new(false);
        {
            let _restore = RestoreGuard::new(|| restored.set(true));
            assert!(!restored.get());
        }
        assert!(restored.get());
    }
}
