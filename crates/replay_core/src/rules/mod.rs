//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Snapshot`](crate::Snapshot). Rules are kept
//! apart from history bookkeeping so they can be reused by the view model and
//! the invariant checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, winning_line};
