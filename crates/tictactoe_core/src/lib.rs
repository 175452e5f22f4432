//! Tic-tac-toe core: pure board logic and a single-session controller.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over an immutable [`Board`] value (move
//!   validation, win and draw detection, move application).
//! - **Session**: [`GameSession`] holds the board, the current player and the
//!   derived status, and exposes the two player actions.
//! - **Audit**: an injectable [`AuditSink`] sees every applied transition.
//! - **View**: status and accessibility strings for front ends.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     session.select_cell(cell);
//! }
//! assert_eq!(session.winner(), Some(Player::X));
//!
//! session.restart();
//! assert!(!session.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audit;
mod error;
mod position;
mod rules;
mod session;
mod state;
mod types;
mod view;

pub use audit::{
    AuditAction, AuditEntry, AuditSink, JsonLinesAudit, MemoryAudit, NoAudit, Snapshot,
    TracingAudit,
};
pub use error::{AuditError, BoardParseError};
pub use position::Position;
pub use rules::{
    MoveRejection, WIN_LINES, apply_move, apply_token, get_winner, is_draw, is_full,
    is_valid_move, validate_move,
};
pub use session::GameSession;
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};
pub use view::{BOARD_LABEL, BoardView, CellView, status_message};
