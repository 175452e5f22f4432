//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value. Nothing here mutates
//! its input or keeps state between calls; the session controller composes
//! these into turns.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{MoveRejection, apply_move, apply_token, is_valid_move, validate_move};
pub use win::{WIN_LINES, get_winner};
