//! Game session controller.
//!
//! A [`GameSession`] owns one [`GameState`] and mediates the two player
//! actions, selecting a cell and restarting. Both actions are synchronous
//! and never fail: anything the rules refuse is a silent no-op.

use crate::audit::{AuditAction, AuditEntry, AuditSink, NoAudit, Snapshot};
use crate::rules::apply_move;
use crate::{Board, GameState, GameStatus, Player};
use std::borrow::Cow;
use tracing::{debug, info, instrument, warn};

/// A single tic-tac-toe session with an optional audit sink.
///
/// States are `InProgress`, `Won` and `Draw` (see [`GameStatus`]). Won and
/// Draw are terminal: only [`GameSession::restart`] leaves them.
#[derive(Debug)]
pub struct GameSession<S: AuditSink = NoAudit> {
    state: GameState,
    audit: S,
}

impl GameSession<NoAudit> {
    /// Creates a session with no audit trail.
    #[instrument]
    pub fn new() -> Self {
        Self::with_audit(NoAudit)
    }
}

impl Default for GameSession<NoAudit> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AuditSink> GameSession<S> {
    /// Creates a session reporting its transitions to `audit`.
    ///
    /// The sink lives exactly as long as the session.
    #[instrument(skip(audit))]
    pub fn with_audit(audit: S) -> Self {
        info!("Creating new game session");
        Self {
            state: GameState::new(),
            audit,
        }
    }

    /// Plays the current player's mark at `index`.
    ///
    /// No-op once the game is over, for an out-of-range index, or for an
    /// occupied cell. Returns whether the board changed.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn select_cell(&mut self, index: usize) -> bool {
        let status = self.state.status();
        if status.is_terminal() {
            debug!(?status, "Game over, ignoring selection");
            return false;
        }

        let player = self.state.current_player();
        let next = match apply_move(self.state.board(), index, player, false) {
            Cow::Borrowed(_) => {
                debug!("Selection rejected, session unchanged");
                return false;
            }
            Cow::Owned(next) => next,
        };

        let before = Snapshot::from(&self.state);
        self.state.advance(next, player);

        info!(
            index,
            status = ?self.state.status(),
            next_player = %self.state.current_player(),
            "Move applied"
        );

        self.emit(AuditAction::Move { index, player }, before);
        true
    }

    /// Discards the current game and starts a fresh one with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let before = Snapshot::from(&self.state);
        self.state = GameState::new();
        info!("Session restarted");
        self.emit(AuditAction::Restart, before);
    }

    fn emit(&mut self, action: AuditAction, before: Snapshot) {
        let entry = AuditEntry::new(action, before, Snapshot::from(&self.state));
        if let Err(e) = self.audit.record(&entry) {
            warn!(error = %e, %action, "Audit sink failed, transition kept");
        }
    }

    /// Returns the board.
    pub fn current_board(&self) -> &Board {
        self.state.board()
    }

    /// Player to move while in progress; the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.state.status().winner()
    }

    /// True if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.state.status().is_draw()
    }

    /// True once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the whole game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the audit sink.
    pub fn audit(&self) -> &S {
        &self.audit
    }

    /// Ends the session, handing back its audit sink.
    pub fn into_audit(self) -> S {
        self.audit
    }
}
