//! Replay TUI - terminal front end for replay_core
//!
//! Paints [`replay_core::GameView`] with ratatui and turns key presses into
//! [`replay_core::Action`]s. Also provides a headless `replay` renderer for
//! scripted use.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod headless;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, TuiConfig};
