//! First-class actions and their outcomes.
//!
//! Every user interaction is expressed as an [`Action`] and routed through
//! [`Game::dispatch`](crate::Game::dispatch).

use super::types::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// A discrete user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A board cell was clicked (flat index 0-8).
    ActivateCell(usize),
    /// A move-list entry was clicked.
    JumpTo(usize),
    /// The move-list order button was clicked.
    ToggleOrder,
}

/// Why a move left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The displayed snapshot already has a winning line.
    #[display("Game is already won")]
    GameOver,
    /// The target cell holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Coord),
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Applied {
        /// Index of the new snapshot (also the new cursor).
        step: usize,
        /// Cell that was filled.
        coord: Coord,
        /// Mark that was placed.
        mark: Mark,
    },
    /// State unchanged.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if a snapshot was appended.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dispatch {
    /// A move was attempted.
    Move(MoveOutcome),
    /// The cursor moved to this step.
    Jumped(usize),
    /// The move list order changed.
    Reordered,
}
