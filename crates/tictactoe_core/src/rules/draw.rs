//! Draw detection logic for tic-tac-toe.

use super::win::get_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winner.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn is_draw(board: &Board) -> bool {
    get_winner(board).is_none() && is_full(board)
}
