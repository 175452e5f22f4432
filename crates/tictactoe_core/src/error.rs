//! Error types for the tic-tac-toe core.
//!
//! Invalid moves are not errors (they are silent no-ops, see
//! [`crate::MoveRejection`] for the diagnostic reason). The errors here cover
//! the two places where something outside the game can genuinely fail:
//! parsing a board from text and delivering an audit entry.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure to parse a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure of an audit sink to record an entry.
///
/// Sinks report these to the session, which logs and drops them; a failing
/// sink never blocks a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Audit error: {} at {}:{}", message, file, line)]
pub struct AuditError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AuditError {
    /// Creates a new audit error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for AuditError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for AuditError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}
