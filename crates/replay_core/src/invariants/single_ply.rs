//! Single-ply invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::board::Snapshot;
use crate::history::History;

/// Invariant: snapshot 0 is empty and snapshot n differs from n-1 by exactly
/// one newly filled cell, which it records as `placed`.
///
/// This also rules out overwriting: a cell that changes must have been empty.
pub struct SinglePlyDeltaInvariant;

impl Invariant<History> for SinglePlyDeltaInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        let Some(first) = snapshots.first() else {
            return false;
        };
        if *first != Snapshot::empty() {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (prev, next) = (pair[0].cells(), pair[1].cells());
            let mut changed = prev
                .iter()
                .zip(next.iter())
                .enumerate()
                .filter(|(_, (before, after))| before != after);

            match (changed.next(), changed.next()) {
                (Some((index, (None, Some(_)))), None) => {
                    pair[1].placed().map(|c| c.index()) == Some(index)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}
