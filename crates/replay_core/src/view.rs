//! View model: what the rendering collaborator paints.
//!
//! [`render`] is a pure function of the game. Front ends never inspect the
//! history directly; they draw a [`GameView`] and send [`Action`]s back.
//!
//! [`Action`]: crate::Action

use super::game::Game;
use super::history::Outcome;
use super::rules::WinLine;
use super::types::{BOARD_SIZE, Coord, Mark};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::instrument;

/// Order of the move list. Presentation only.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown on the order toggle.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "↓",
            Self::Descending => "↑",
        }
    }
}

/// Status line for the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// Board full, no line.
    #[display("Draw!")]
    Draw,
    /// Play continues.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

impl Status {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One board cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellView {
    /// Position of the cell.
    pub coord: Coord,
    /// Mark in the cell, if any.
    pub mark: Option<Mark>,
    /// Part of the winning line.
    pub in_win_line: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct HistoryEntry {
    /// Snapshot this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Entry is under the cursor.
    pub selected: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Winning line, if any.
    pub win_line: Option<WinLine>,
    /// Status line.
    pub status: Status,
    /// Move list, already in `order`.
    pub moves: Vec<HistoryEntry>,
    /// Current move list order.
    pub order: HistoryOrder,
    /// Step under the cursor.
    pub cursor: usize,
}

/// Builds the view for the snapshot under the cursor.
#[instrument(skip(game), fields(cursor = game.history().cursor()))]
pub fn render(game: &Game) -> GameView {
    let history = game.history();
    let current = history.current();
    let win_line = history.win_line();

    let cells = Coord::all()
        .map(|coord| CellView {
            coord,
            mark: current.get(coord),
            in_win_line: win_line.is_some_and(|line| line.contains(coord)),
        })
        .collect();

    let status = match history.outcome() {
        Outcome::Won(line) => Status::Winner(line.mark),
        Outcome::Draw => Status::Draw,
        Outcome::InProgress => Status::NextPlayer(history.turn()),
    };

    let mut moves: Vec<HistoryEntry> = history
        .snapshots()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            let label = match snapshot.placed() {
                Some(coord) if step > 0 => format!("Go to move #{step} {coord}"),
                _ => "Go to start".to_string(),
            };
            HistoryEntry::new(step, label, step == history.cursor())
        })
        .collect();
    if game.order() == HistoryOrder::Descending {
        moves.reverse();
    }

    GameView {
        cells,
        win_line,
        status,
        moves,
        order: game.order(),
        cursor: history.cursor(),
    }
}

impl GameView {
    /// Plain-text board, status and move list.
    ///
    /// Winning cells are bracketed, empty cells shown as `.`.
    pub fn to_text(&self, headers: bool) -> String {
        let mut out = String::new();
        if headers {
            out.push_str("# ");
            for col in 0..BOARD_SIZE {
                let _ = write!(out, " {col} ");
            }
            out.push('\n');
        }
        for row in self.cells.chunks(BOARD_SIZE) {
            if headers {
                let _ = write!(out, "{} ", row[0].coord.row());
            }
            for cell in row {
                let mark = cell.mark.map_or_else(|| ".".to_string(), |m| m.to_string());
                if cell.in_win_line {
                    let _ = write!(out, "[{mark}]");
                } else {
                    let _ = write!(out, " {mark} ");
                }
            }
            out.push('\n');
        }
        let _ = writeln!(out, "\n{}", self.status);
        let _ = writeln!(out, "\nMoves {}", self.order.glyph());
        for entry in &self.moves {
            let marker = if entry.selected { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {}", entry.label);
        }
        out
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text(true))
    }
}
