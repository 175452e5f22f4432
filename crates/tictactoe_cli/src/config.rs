//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal driver, loadable from TOML.
///
/// ```toml
/// audit_log = "audit.jsonl"
/// trace_audit = true
/// show_cell_labels = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Append audit entries as JSON lines to this file.
    audit_log: Option<PathBuf>,

    /// Emit audit entries as tracing events.
    trace_audit: bool,

    /// Print the accessible label of every cell under the board.
    show_cell_labels: bool,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides. Flags only ever switch features on.
    pub fn with_overrides(
        mut self,
        audit_log: Option<PathBuf>,
        trace_audit: bool,
        show_cell_labels: bool,
    ) -> Self {
        if audit_log.is_some() {
            self.audit_log = audit_log;
        }
        self.trace_audit |= trace_audit;
        self.show_cell_labels |= show_cell_labels;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
