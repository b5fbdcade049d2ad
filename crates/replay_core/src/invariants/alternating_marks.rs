//! Alternating marks invariant: X fills odd steps, O fills even ones.

use super::Invariant;
use crate::history::History;
use crate::types::Mark;

/// Invariant: the cell placed at step n holds the mark that was to move at
/// step n-1.
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot.placed().and_then(|c| snapshot.get(c)) == Some(Mark::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Snapshot};

    #[test]
    fn test_played_history_holds() {
        let mut history = History::new();
        for i in [0, 1, 2, 3] {
            history.apply_move(Coord::from_index(i).unwrap());
        }
        assert!(AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let mut history = History::new();
        let center = Coord::from_index(4).unwrap();
        history
            .snapshots
            .push(Snapshot::empty().with_mark(center, Mark::O).unwrap());
        assert!(!AlternatingMarksInvariant::holds(&history));
    }
}
