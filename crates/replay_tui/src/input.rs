//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use replay_core::{BOARD_SIZE, Coord};

/// Moves the board cursor one cell for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to flat cell indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        d @ 1..=9 => Some(d as usize - 1),
        _ => None,
    }
}
