//! Move validation and immutable move application.

use crate::{Board, Player};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Why a move was refused.
///
/// This is a diagnostic, not a failure: the session treats every rejected
/// move as a silent no-op and only logs the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game has already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The player token is neither `X` nor `O`.
    #[display("Invalid player token")]
    InvalidPlayer,
}

impl std::error::Error for MoveRejection {}

/// Checks whether `index` may be played on `board`.
///
/// Checks run in a fixed order: game over, bounds, then occupancy.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, index: usize, game_over: bool) -> Result<(), MoveRejection> {
    if game_over {
        return Err(MoveRejection::GameOver);
    }
    if index >= Board::CELLS {
        return Err(MoveRejection::OutOfBounds(index));
    }
    if !board.is_empty(index) {
        return Err(MoveRejection::Occupied(index));
    }
    Ok(())
}

/// Returns true if `index` is an empty, in-range cell and the game is not over.
pub fn is_valid_move(board: &Board, index: usize, game_over: bool) -> bool {
    validate_move(board, index, game_over).is_ok()
}

/// Places `player` at `index`, returning the resulting board.
///
/// An accepted move yields `Cow::Owned` with a fresh board; the input is
/// never touched. A rejected move yields `Cow::Borrowed` of the exact
/// reference passed in, so callers can detect a no-op with
/// `matches!(result, Cow::Borrowed(_))` or `std::ptr::eq`.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player, game_over: bool) -> Cow<'_, Board> {
    match validate_move(board, index, game_over) {
        Ok(()) => Cow::Owned(board.with_mark(index, player)),
        Err(reason) => {
            debug!(%reason, "Move rejected, board unchanged");
            Cow::Borrowed(board)
        }
    }
}

/// Like [`apply_move`], but takes a raw player token such as `"X"`.
///
/// An unrecognized token is treated like any other invalid move: the
/// original reference comes back unchanged.
#[instrument(skip(board))]
pub fn apply_token<'a>(
    board: &'a Board,
    index: usize,
    token: &str,
    game_over: bool,
) -> Cow<'a, Board> {
    match token.parse::<Player>() {
        Ok(player) => apply_move(board, index, player, game_over),
        Err(_) => {
            debug!(reason = %MoveRejection::InvalidPlayer, "Move rejected, board unchanged");
            Cow::Borrowed(board)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_valid_move_on_empty_board() {
        let board = Board::new();
        assert!(is_valid_move(&board, 0, false));
        assert!(is_valid_move(&board, 8, false));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let board = Board::new();
        assert_eq!(validate_move(&board, 9, false), Err(MoveRejection::OutOfBounds(9)));
        assert!(!is_valid_move(&board, 100, false));
        assert!(!is_valid_move(&board, usize::MAX, false));
    }

    #[test]
    fn test_rejects_occupied() {
        let board: Board = "X........".parse().expect("valid board");
        assert_eq!(validate_move(&board, 0, false), Err(MoveRejection::Occupied(0)));
    }

    #[test]
    fn test_game_over_checked_first() {
        let board: Board = "X........".parse().expect("valid board");
        assert_eq!(validate_move(&board, 0, true), Err(MoveRejection::GameOver));
        assert_eq!(validate_move(&board, 42, true), Err(MoveRejection::GameOver));
        assert!(!is_valid_move(&Board::new(), 1, true));
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::new();
        let next = apply_move(&board, 4, Player::X, false);
        assert!(matches!(next, Cow::Owned(_)));
        assert!(!std::ptr::eq(&*next, &board));
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_apply_move_occupied_returns_same_reference() {
        let board = Board::new();
        let mid = apply_move(&board, 4, Player::X, false).into_owned();
        let attempt = apply_move(&mid, 4, Player::O, false);
        assert!(std::ptr::eq(&*attempt, &mid));
        assert_eq!(mid.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_apply_move_game_over_returns_same_reference() {
        let board = Board::new();
        let blocked = apply_move(&board, 0, Player::X, true);
        assert!(matches!(blocked, Cow::Borrowed(b) if std::ptr::eq(b, &board)));
        assert!(board.is_empty(0));
    }

    #[test]
    fn test_apply_token_valid() {
        let board = Board::new();
        let next = apply_token(&board, 2, "o", false);
        assert_eq!(next.get(2), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_apply_token_invalid_returns_same_reference() {
        let board = Board::new();
        let result = apply_token(&board, 0, "Z", false);
        assert!(std::ptr::eq(&*result, &board));
        assert_eq!(*result, board);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::Occupied(3).to_string(), "Square 3 is already occupied");
        assert_eq!(MoveRejection::GameOver.to_string(), "Game is already over");
    }
}
