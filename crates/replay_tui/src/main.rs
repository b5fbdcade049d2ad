//! Replay Tic-Tac-Toe - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use replay_tui::{Cli, Command, TuiConfig, headless, logging, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play { order: None }) {
        Command::Play { order } => {
            let config = config.with_order(order);
            logging::init_file_logging(&config)?;
            terminal::run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            format,
            order,
            no_headers,
        } => {
            let mut config = config.with_order(order);
            if no_headers {
                config = config.without_headers();
            }
            logging::init_stderr_logging(&config);
            let output = headless::replay(&moves, jump, format, &config)?;
            print!("{output}");
            Ok(())
        }
    }
}
