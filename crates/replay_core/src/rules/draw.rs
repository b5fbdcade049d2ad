//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::board::Snapshot;
use crate::types::CELL_COUNT;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Snapshot) -> bool {
    board.filled() == CELL_COUNT
}

/// A full board with no complete line.
#[instrument(skip(board))]
pub fn is_draw(board: &Snapshot) -> bool {
    is_full(board) && winning_line(board).is_none()
}
