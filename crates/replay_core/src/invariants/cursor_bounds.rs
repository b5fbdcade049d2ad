//! Cursor bounds invariant.

use super::Invariant;
use crate::history::History;

/// Invariant: the cursor points at an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
