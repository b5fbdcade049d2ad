//! Win detection logic for tic-tac-toe.

use crate::board::Snapshot;
use crate::types::{Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in evaluation order.
pub const WIN_LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Three cells holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// Cells of the line, in table order.
    pub cells: [Coord; 3],
    /// Owner of the line.
    pub mark: Mark,
}

impl WinLine {
    /// Checks whether `coord` is part of this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Returns the first complete line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Snapshot) -> Option<WinLine> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(WinLine {
            cells: [a, b, c],
            mark,
        })
    })
}
