//! Linear snapshot history with a cursor.

use super::action::{MoveOutcome, Rejection};
use super::board::Snapshot;
use super::error::GameError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{WinLine, is_draw, winning_line};
use super::types::{Coord, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Outcome shown for the snapshot under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Play continues.
    InProgress,
    /// A line is complete.
    Won(WinLine),
    /// Every cell is filled with no line.
    Draw,
}

/// All snapshots played so far and the one currently displayed.
///
/// Snapshot 0 is the empty board. Each later snapshot adds exactly one mark
/// to its predecessor. Making a move with the cursor rewound discards the
/// snapshots after it before appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
            cursor: 0,
        }
    }

    /// Number of snapshots, always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Mark that moves next from the cursor.
    pub fn turn(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    /// Winning line on the displayed snapshot, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        winning_line(self.current())
    }

    /// Evaluates the displayed snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn outcome(&self) -> Outcome {
        let board = self.current();
        if let Some(line) = winning_line(board) {
            Outcome::Won(line)
        } else if is_draw(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Places the current turn's mark at `coord`.
    ///
    /// Leaves the history untouched if the displayed snapshot is already won
    /// or the cell is taken. Otherwise drops every snapshot after the cursor,
    /// appends the new one and moves the cursor onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.len()))]
    pub fn apply_move(&mut self, coord: Coord) -> MoveOutcome {
        let current = self.current();
        if winning_line(current).is_some() {
            debug!("Move ignored, game already won");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        let mark = self.turn();
        let Some(next) = current.with_mark(coord, mark) else {
            debug!("Move ignored, cell occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(coord));
        };

        let discarded = self.len() - (self.cursor + 1);
        if discarded > 0 {
            info!(discarded, "Branching history, dropping later snapshots");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );

        debug!(step = self.cursor, %mark, "Move applied");
        MoveOutcome::Applied {
            step: self.cursor,
            coord,
            mark,
        }
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is past the last
    /// snapshot.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.len(),
            });
        }
        self.cursor = step;
        debug!(turn = %self.turn(), "Cursor moved");
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(index: usize) -> Coord {
        Coord::from_index(index).unwrap()
    }

    fn play(indices: &[usize]) -> History {
        let mut history = History::new();
        for &i in indices {
            assert!(history.apply_move(coord(i)).is_applied(), "move {i}");
        }
        history
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.turn(), Mark::X);
        assert_eq!(history.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_moves_alternate() {
        let history = play(&[4, 0]);
        assert_eq!(history.current().get(coord(4)), Some(Mark::X));
        assert_eq!(history.current().get(coord(0)), Some(Mark::O));
        assert_eq!(history.turn(), Mark::X);
    }

    #[test]
    fn test_occupied_leaves_state_unchanged() {
        let mut history = play(&[4]);
        let before = history.clone();
        assert_eq!(
            history.apply_move(coord(4)),
            MoveOutcome::Rejected(Rejection::Occupied(coord(4)))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_after_win_leaves_state_unchanged() {
        let mut history = play(&[0, 4, 1, 3, 2]);
        let before = history.clone();
        assert_eq!(
            history.apply_move(coord(8)),
            MoveOutcome::Rejected(Rejection::GameOver)
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_win_checked_before_occupancy() {
        let mut history = play(&[0, 4, 1, 3, 2]);
        assert_eq!(
            history.apply_move(coord(0)),
            MoveOutcome::Rejected(Rejection::GameOver)
        );
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = play(&[0, 4, 8]);
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.turn(), Mark::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = play(&[0]);
        assert_eq!(
            history.jump_to(2),
            Err(GameError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut history = play(&[0, 4, 8]);
        history.jump_to(1).unwrap();
        let outcome = history.apply_move(coord(2));
        assert_eq!(
            outcome,
            MoveOutcome::Applied {
                step: 2,
                coord: coord(2),
                mark: Mark::O,
            }
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().get(coord(4)), None);
    }

    #[test]
    fn test_rewind_past_win_allows_play() {
        let mut history = play(&[0, 4, 1, 3, 2]);
        history.jump_to(4).unwrap();
        assert!(history.apply_move(coord(5)).is_applied());
        assert_eq!(history.outcome(), Outcome::InProgress);
    }
}
