//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use replay_core::HistoryOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Presentation and logging settings.
///
/// Board size and marks are fixed; only how the game is shown is
/// configurable. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Initial move list order.
    order: HistoryOrder,

    /// Log file for interactive mode (the terminal is busy drawing).
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Draw row and column numbers around the board.
    show_headers: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            order: HistoryOrder::default(),
            log_file: PathBuf::from("replay_tictactoe.log"),
            log_filter: "info".to_string(),
            show_headers: true,
        }
    }
}

impl TuiConfig {
    /// Environment variable naming a config file.
    pub const ENV_VAR: &'static str = "REPLAY_TICTACTOE_CONFIG";

    /// Config file picked up from the working directory.
    pub const DEFAULT_FILE: &'static str = "replay_tictactoe.toml";

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(order = %config.order, "Config loaded successfully");
        Ok(config)
    }

    /// Finds the config to use.
    ///
    /// An explicit path wins, then [`Self::ENV_VAR`], then
    /// [`Self::DEFAULT_FILE`] if it exists; otherwise defaults.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(Self::ENV_VAR).map(PathBuf::from);
        Self::resolve_in(explicit, from_env.as_deref(), Path::new("."))
    }

    /// Same lookup as [`Self::resolve`] with the environment value and the
    /// directory searched for [`Self::DEFAULT_FILE`] passed in.
    #[instrument]
    pub fn resolve_in(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        dir: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            return Self::from_file(path);
        }
        let fallback = dir.join(Self::DEFAULT_FILE);
        if fallback.exists() {
            return Self::from_file(fallback);
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Replaces the initial order when the command line names one.
    pub fn with_order(mut self, order: Option<HistoryOrder>) -> Self {
        if let Some(order) = order {
            self.order = order;
        }
        self
    }

    /// Turns off row and column numbers.
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
