//! Immutable board snapshots.

use super::types::{CELL_COUNT, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One full board state at a given ply.
///
/// Snapshots are never mutated once built. A new one is produced from its
/// predecessor with [`Snapshot::with_mark`], which also records the cell that
/// was filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    cells: [Option<Mark>; CELL_COUNT],
    /// Cell filled to produce this snapshot, `None` for the empty board.
    placed: Option<Coord>,
}

impl Snapshot {
    /// The all-empty starting board.
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            placed: None,
        }
    }

    /// Returns the mark at `coord`, if any.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.index()]
    }

    /// Checks whether `coord` already holds a mark.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Cell that was filled to produce this snapshot.
    pub fn placed(&self) -> Option<Coord> {
        self.placed
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copies this snapshot and assigns `mark` to `coord`.
    ///
    /// Returns `None` if the cell is already occupied; cells are set at most
    /// once.
    #[instrument(skip(self))]
    pub fn with_mark(&self, coord: Coord, mark: Mark) -> Option<Self> {
        if self.is_occupied(coord) {
            return None;
        }
        let mut cells = self.cells;
        cells[coord.index()] = Some(mark);
        Some(Self {
            cells,
            placed: Some(coord),
        })
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_copies() {
        let empty = Snapshot::empty();
        let center = Coord::new(1, 1).unwrap();
        let next = empty.with_mark(center, Mark::X).unwrap();

        assert_eq!(empty.get(center), None);
        assert_eq!(next.get(center), Some(Mark::X));
        assert_eq!(next.placed(), Some(center));
        assert_eq!(next.filled(), 1);
    }

    #[test]
    fn test_with_mark_refuses_occupied() {
        let center = Coord::new(1, 1).unwrap();
        let board = Snapshot::empty().with_mark(center, Mark::X).unwrap();
        assert!(board.with_mark(center, Mark::O).is_none());
    }
}
