//! Replay core - tic-tac-toe with a rewindable snapshot history
//!
//! Pure game logic with no I/O. Every ply produces a new immutable board
//! snapshot; a cursor selects the one on display. Jumping back and playing
//! again discards the snapshots after the cursor.
//!
//! # Architecture
//!
//! - **Types**: marks and cell coordinates
//! - **Rules**: win line evaluation and draw detection
//! - **History**: snapshot list, cursor, move application
//! - **Game**: state container and reducer over [`Action`]s
//! - **View**: pure `render(state) -> GameView` for front ends
//!
//! # Example
//!
//! ```
//! use replay_core::{Action, Game, Mark, Status};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.dispatch(Action::ActivateCell(index)).unwrap();
//! }
//! assert_eq!(game.view().status, Status::Winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod history;
pub mod invariants;
pub mod rules;
mod types;
mod view;

pub use action::{Action, Dispatch, MoveOutcome, Rejection};
pub use board::Snapshot;
pub use error::GameError;
pub use game::Game;
pub use history::{History, Outcome};
pub use rules::{WinLine, winning_line};
pub use types::{BOARD_SIZE, CELL_COUNT, Coord, Mark};
pub use view::{CellView, GameView, HistoryEntry, HistoryOrder, Status, render};
