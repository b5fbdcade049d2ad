//! Non-interactive rendering: apply moves, print the view.

use crate::cli::OutputFormat;
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use replay_core::{Action, Dispatch, Game, MoveOutcome};
use tracing::{debug, info, instrument};

/// Replays `moves` through the reducer and renders the final view.
///
/// Moves the game ignores (occupied cell, game already won) are skipped just
/// as they would be in interactive play.
///
/// # Errors
///
/// Fails on a cell index past 8, a jump past the last step, or a JSON
/// encoding failure.
#[instrument(skip(config))]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    format: OutputFormat,
    config: &TuiConfig,
) -> Result<String> {
    let mut game = Game::with_order(*config.order());

    for (ply, &index) in moves.iter().enumerate() {
        let result = game
            .dispatch(Action::ActivateCell(index))
            .with_context(|| format!("Move {} (cell {}) is invalid", ply + 1, index))?;
        if let Dispatch::Move(MoveOutcome::Rejected(reason)) = result {
            debug!(ply = ply + 1, index, %reason, "Move skipped");
        }
    }

    if let Some(step) = jump {
        game.dispatch(Action::JumpTo(step))
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    let view = game.view();
    info!(status = %view.status, cursor = view.cursor, "Replay finished");

    match format {
        OutputFormat::Text => Ok(view.to_text(*config.show_headers())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&view)
                .map(|json| json + "\n")
                .context("Failed to encode view as JSON")
        }
    }
}
