//! Game state container and reducer.

use super::action::{Action, Dispatch, MoveOutcome};
use super::error::GameError;
use super::history::History;
use super::types::Coord;
use super::view::{GameView, HistoryOrder, render};
use tracing::{info, instrument};

/// Owner of all game state: the snapshot history plus presentation order.
///
/// The rendering collaborator reads [`Game::view`] and feeds interactions
/// back through [`Game::dispatch`] or [`Game::on_cell_activated`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
    order: HistoryOrder,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the move list in `order`.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: History::new(),
            order,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the move list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Applies a single interaction.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] for a cell index or step the game never exposes.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatch, GameError> {
        match action {
            Action::ActivateCell(index) => self.on_cell_activated(index).map(Dispatch::Move),
            Action::JumpTo(step) => {
                self.jump_to(step)?;
                Ok(Dispatch::Jumped(step))
            }
            Action::ToggleOrder => {
                self.toggle_order();
                Ok(Dispatch::Reordered)
            }
        }
    }

    /// Callback for a clicked board cell (flat index 0-8).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `index` is past 8.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let coord = Coord::from_index(index).ok_or(GameError::CellOutOfRange { index })?;
        let outcome = self.history.apply_move(coord);
        if outcome.is_applied()
            && let Some(line) = self.history.win_line()
        {
            info!(winner = %line.mark, "Line completed");
        }
        Ok(outcome)
    }

    /// Moves the cursor to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] past the last snapshot.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        self.history.jump_to(step)
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Builds the description of what should be on screen.
    pub fn view(&self) -> GameView {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Rejection;
    use crate::types::Mark;

    #[test]
    fn test_dispatch_routes_actions() {
        let mut game = Game::new();
        let result = game.dispatch(Action::ActivateCell(4)).unwrap();
        assert_eq!(
            result,
            Dispatch::Move(MoveOutcome::Applied {
                step: 1,
                coord: Coord::from_index(4).unwrap(),
                mark: Mark::X,
            })
        );
        assert_eq!(game.dispatch(Action::JumpTo(0)).unwrap(), Dispatch::Jumped(0));
        assert_eq!(game.dispatch(Action::ToggleOrder).unwrap(), Dispatch::Reordered);
        assert_eq!(game.order(), HistoryOrder::Descending);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_rejected_move_is_not_an_error() {
        let mut game = Game::new();
        game.on_cell_activated(0).unwrap();
        assert_eq!(
            game.on_cell_activated(0).unwrap(),
            MoveOutcome::Rejected(Rejection::Occupied(Coord::from_index(0).unwrap()))
        );
    }

    #[test]
    fn test_contract_errors() {
        let mut game = Game::new();
        assert_eq!(
            game.dispatch(Action::ActivateCell(9)),
            Err(GameError::CellOutOfRange { index: 9 })
        );
        assert_eq!(
            game.dispatch(Action::JumpTo(1)),
            Err(GameError::StepOutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_toggle_order_leaves_history() {
        let mut game = Game::new();
        game.on_cell_activated(0).unwrap();
        let before = game.history().clone();
        game.toggle_order();
        game.toggle_order();
        assert_eq!(game.history(), &before);
        assert_eq!(game.order(), HistoryOrder::Ascending);
    }
}
