//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use replay_core::{Action, Coord, Dispatch, Game, GameView, MoveOutcome};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move over the cells.
    #[default]
    Board,
    /// Arrow keys move over the move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game and the purely visual bits around it: the board cursor,
/// the highlighted move list entry and the focused pane.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Coord,
    focus: Focus,
    list_step: usize,
    show_headers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::with_order(*config.order()),
            cursor: Coord::CENTER,
            focus: Focus::Board,
            list_step: 0,
            show_headers: *config.show_headers(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Builds the view for this frame.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn list_step(&self) -> usize {
        self.list_step
    }

    /// Whether to draw row and column numbers.
    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char(c) = key
            && let Some(index) = digit_to_index(c)
        {
            self.apply(Action::ActivateCell(index));
            return;
        }
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('o') => self.apply(Action::ToggleOrder),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.list_step = self.game.history().cursor();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Action::ActivateCell(self.cursor.index()));
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down => {
                let view = self.game.view();
                let Some(row) = view.moves.iter().position(|m| m.step == self.list_step) else {
                    return;
                };
                let row = if key == KeyCode::Up {
                    row.saturating_sub(1)
                } else {
                    (row + 1).min(view.moves.len() - 1)
                };
                self.list_step = view.moves[row].step;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(Action::JumpTo(self.list_step)),
            _ => {}
        }
    }

    fn apply(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Ok(Dispatch::Move(MoveOutcome::Applied { step, coord, mark })) => {
                debug!(step, %coord, %mark, "Move applied to UI state");
                self.cursor = coord;
                self.list_step = step;
            }
            Ok(Dispatch::Move(MoveOutcome::Rejected(reason))) => {
                debug!(%reason, "Move ignored");
            }
            Ok(Dispatch::Jumped(step)) => self.list_step = step,
            Ok(Dispatch::Reordered) => {}
            Err(e) => warn!(error = %e, "Action rejected by game"),
        }
    }
}
