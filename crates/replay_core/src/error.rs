//! Contract errors for the game container.

use derive_more::{Display, Error};

/// Caller passed a value the game never hands out.
///
/// The rendering collaborator only ever forwards indices and steps it got
/// from the view, so these indicate a bug on the calling side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Flat cell index outside 0-8.
    #[display("Cell index {index} is off the board (must be 0-8)")]
    CellOutOfRange {
        /// Offending index.
        index: usize,
    },
    /// History step past the last snapshot.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
