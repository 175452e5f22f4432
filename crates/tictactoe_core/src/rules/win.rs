//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines, scanned in this order: rows top to bottom,
/// columns left to right, then the diagonal and the anti-diagonal.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the player holding the first line in [`WIN_LINES`] whose three
/// squares carry the same mark. Boards with two completed lines cannot arise
/// from legal play, but they still resolve to the first match.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn get_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    WIN_LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}
