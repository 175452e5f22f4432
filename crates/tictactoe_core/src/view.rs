//! Presentation view-model.
//!
//! Text and flags a front end needs to draw the game and describe it to
//! assistive technology. Nothing here renders; every front end reads the
//! same strings so status and cell labels stay consistent.

use crate::{GameState, GameStatus, Square};
use derive_getters::Getters;
use serde::Serialize;

/// Accessible label for the board as a whole.
pub const BOARD_LABEL: &str = "Tic Tac Toe board";

/// Status line: the winner, a draw, or whose turn it is.
pub fn status_message(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::Draw => "Draw game".to_string(),
        GameStatus::InProgress => format!("Current player: {}", state.current_player()),
    }
}

/// One cell as a front end sees it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Cell index (0-8).
    index: usize,
    /// Contents of the cell.
    square: Square,
    /// Accessible label, e.g. `"Cell 5 contains X"`.
    label: String,
    /// Whether the cell can be activated.
    disabled: bool,
}

/// The board as a front end sees it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct BoardView {
    /// Cells in index order.
    cells: Vec<CellView>,
    /// True once the game is over.
    disabled: bool,
    /// Status line.
    status: String,
}

impl BoardView {
    /// Builds the view for a game state.
    pub fn of(state: &GameState) -> Self {
        let game_over = state.status().is_terminal();
        let cells = state
            .board()
            .squares()
            .iter()
            .enumerate()
            .map(|(index, &square)| CellView {
                index,
                square,
                label: cell_label(index, square),
                disabled: game_over || square != Square::Empty,
            })
            .collect();

        Self {
            cells,
            disabled: game_over,
            status: status_message(state),
        }
    }

    /// Accessible label for the board.
    pub fn label(&self) -> &'static str {
        BOARD_LABEL
    }
}

/// Cell labels count from one, the way players read the board.
fn cell_label(index: usize, square: Square) -> String {
    match square.player() {
        None => format!("Cell {} empty", index + 1),
        Some(player) => format!("Cell {} contains {}", index + 1, player),
    }
}
