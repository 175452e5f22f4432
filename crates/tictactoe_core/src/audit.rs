//! Audit trail for session transitions.
//!
//! A session reports every applied move and every restart to an
//! [`AuditSink`] injected at construction. Sinks are fire-and-forget: the
//! transition is already committed when the sink runs, and a sink error is
//! logged and dropped.

use crate::error::AuditError;
use crate::{Board, GameState, Player};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, instrument};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A mark was placed.
    Move {
        /// Cell index (0-8).
        index: usize,
        /// Player who moved.
        player: Player,
    },
    /// The session was reset to a fresh game.
    Restart,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Move { .. } => write!(f, "MOVE"),
            AuditAction::Restart => write!(f, "RESTART"),
        }
    }
}

/// The observable part of a session at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the time of the snapshot.
    board: Board,
    /// Current player at the time of the snapshot.
    current_player: Player,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            current_player: state.current_player(),
        }
    }
}

/// One audit record: an action with before and after snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the transition happened.
    timestamp: DateTime<Utc>,
    /// The action taken.
    #[serde(flatten)]
    action: AuditAction,
    /// Session before the action.
    before: Snapshot,
    /// Session after the action.
    after: Snapshot,
    /// Free-form annotation; sessions leave it empty.
    reason: Option<String>,
}

impl AuditEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(action: AuditAction, before: Snapshot, after: Snapshot) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            before,
            after,
            reason: None,
        }
    }

    /// Attaches an annotation.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Receiver for audit entries.
pub trait AuditSink {
    /// Records one entry.
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// Sink that discards everything. The default for sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAudit;

impl AuditSink for NoAudit {
    fn record(&mut self, _entry: &AuditEntry) -> Result<(), AuditError> {
        Ok(())
    }
}

/// Sink that emits one `info` event per entry on the `audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        info!(
            target: "audit",
            ts = %entry.timestamp.to_rfc3339(),
            action = %entry.action,
            before = %entry.before.board.to_compact(),
            before_player = %entry.before.current_player,
            after = %entry.after.board.to_compact(),
            after_player = %entry.after.current_player,
            "[AUDIT]"
        );
        Ok(())
    }
}

/// Sink that keeps entries in memory.
#[derive(Debug, Clone, Default, Getters)]
pub struct MemoryAudit {
    /// Entries in the order they were recorded.
    entries: Vec<AuditEntry>,
}

impl MemoryAudit {
    /// Creates an empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the log, returning its entries.
    pub fn into_entries(self) -> Vec<AuditEntry> {
        self.entries
    }
}

impl AuditSink for MemoryAudit {
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

/// Sink that writes each entry as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesAudit<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesAudit<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AuditSink for JsonLinesAudit<W> {
    #[instrument(skip_all, fields(action = %entry.action))]
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Box<S> {
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        (**self).record(entry)
    }
}

impl<S: AuditSink + ?Sized> AuditSink for &mut S {
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        (**self).record(entry)
    }
}

/// Fans out to every sink. All sinks are tried; the first error is returned.
impl<S: AuditSink> AuditSink for Vec<S> {
    fn record(&mut self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut first_err = None;
        for sink in self.iter_mut() {
            if let Err(e) = sink.record(entry) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
