//! Session state values.

use crate::rules::{get_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Always derived from a board with [`GameStatus::of`]. Holding the winner
/// and the draw flag in one enum means they can never both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Evaluates a board.
    pub fn of(board: &Board) -> Self {
        match get_winner(board) {
            Some(player) => GameStatus::Won(player),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True for a drawn game.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete state of one game.
///
/// Restarting replaces this value wholesale with [`GameState::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move while in progress; the last mover once terminal.
    current_player: Player,
    /// Game status, derived from `board`.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Adopts a board produced by a successful move by `mover`.
    ///
    /// Status is recomputed from the board. The turn passes to the opponent
    /// only while the game is still in progress; on a win or draw
    /// `current_player` keeps recording who moved last.
    pub(crate) fn advance(&mut self, board: Board, mover: Player) {
        self.status = GameStatus::of(&board);
        self.board = board;
        self.current_player = if self.status.is_terminal() {
            mover
        } else {
            mover.opponent()
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
