//! Terminal driver for `tictactoe_core`.
//!
//! The binary wires a [`tictactoe_core::GameSession`] to stdin/stdout. The
//! pieces live in this library so they can be tested without a terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError};
pub use driver::{Driver, Flow, Input};

use anyhow::{Context, Result, bail};
use std::fs::OpenOptions;
use tictactoe_core::{AuditSink, GameSession, JsonLinesAudit, TracingAudit};
use tracing::{info, instrument};

/// Audit sink assembled from configuration.
pub type ConfiguredAudit = Vec<Box<dyn AuditSink>>;

/// Builds the audit sinks the configuration asks for.
///
/// An empty list is a valid sink that records nothing.
#[instrument(skip(config))]
pub fn build_audit(config: &CliConfig) -> Result<ConfiguredAudit> {
    let mut sinks: ConfiguredAudit = Vec::new();

    if let Some(path) = config.audit_log() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open audit log {}", path.display()))?;
        info!(path = %path.display(), "Writing audit log");
        sinks.push(Box::new(JsonLinesAudit::new(file)));
    }

    if *config.trace_audit() {
        sinks.push(Box::new(TracingAudit));
    }

    Ok(sinks)
}

/// Plays `cells` on a fresh session.
///
/// Every entry must be an index or a position name; moves the rules refuse
/// are skipped the same way an interactive player's would be.
#[instrument]
pub fn replay(cells: &[String]) -> Result<GameSession> {
    let mut session = GameSession::new();
    for cell in cells {
        match Input::parse(cell) {
            Input::Cell(index) => {
                session.select_cell(index);
            }
            _ => bail!("Not a cell: {:?}", cell),
        }
    }
    Ok(session)
}
