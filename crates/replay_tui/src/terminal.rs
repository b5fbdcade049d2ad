//! Interactive terminal session.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs a restore action on drop. Covers early `?` returns and unwinding.
pub(crate) struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub(crate) fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves raw mode and the alternate screen, shows the cursor.
///
/// Every step runs even if an earlier one fails; safe to call twice.
fn restore_terminal() {
    debug!("Restoring terminal");
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error or panic message is printed.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting interactive session");
    install_panic_hook();

    enable_raw_mode()?;
    let _guard = RestoreGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        plies = app.game().history().len() - 1,
        "Interactive session ended"
    );
    res
}

/// Draws, then blocks on the next key; one event is fully handled before
/// the next is read.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn setup_fails(restored: &Cell<usize>) -> Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        anyhow::bail!("no alternate screen")
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let restored = Cell::new(0);
        assert!(setup_fails(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let restored = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_success() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        }
        assert_eq!(restored.get(), 1);
    }
}
