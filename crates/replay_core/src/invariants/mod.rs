//! First-class invariants over the snapshot history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are asserted in debug builds and can be tested independently.

use crate::history::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_new::new)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_bounds;
pub mod single_ply;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_bounds::CursorInBoundsInvariant;
pub use single_ply::SinglePlyDeltaInvariant;

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    SinglePlyDeltaInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Mark, Snapshot};

    fn coord(index: usize) -> Coord {
        Coord::from_index(index).unwrap()
    }

    #[test]
    fn test_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_set_holds_after_branching() {
        let mut history = History::new();
        for i in [0, 4, 8, 2] {
            history.apply_move(coord(i));
        }
        history.jump_to(2).unwrap();
        history.apply_move(coord(6));
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_set_reports_each_violation() {
        let mut history = History::new();
        history.apply_move(coord(4));
        // Swap the mark and push the cursor past the end
        history.snapshots[1] = Snapshot::empty().with_mark(coord(4), Mark::O).unwrap();
        history.cursor = 5;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].to_string().starts_with("Invariant violated"));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SinglePlyDeltaInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }
}
