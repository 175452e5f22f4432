//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player in the game.
///
/// Parses from the tokens `"X"` and `"O"` (case-insensitive); any other token
/// is rejected, which is how malformed player input is detected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The single-character mark drawn on the board.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn compact(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is an immutable value: there is no way to change a square in
/// place. Transitions go through [`crate::apply_move`], which hands back
/// either the same board or a new one.
///
/// Serializes to its compact form, nine characters in row-major order with
/// `.` for an empty square, e.g. `"X.O.X...."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; Board::CELLS],
}

impl Board {
    /// Number of cells on a board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::CELLS],
        }
    }

    /// Builds a board from an arbitrary slice of squares.
    ///
    /// A slice that is not exactly nine squares long is a programming error;
    /// it is normalized to an empty board rather than surfaced as a failure.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: &[Square]) -> Self {
        match <[Square; Self::CELLS]>::try_from(squares) {
            Ok(squares) => Self { squares },
            Err(_) => {
                warn!(
                    len = squares.len(),
                    "Board must have exactly 9 cells, normalizing to empty board"
                );
                Self::new()
            }
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; Board::CELLS] {
        &self.squares
    }

    /// Number of empty squares left.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    ///
    /// Callers validate `pos` first; an out-of-range `pos` yields an
    /// unchanged copy.
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> Self {
        let mut next = self.clone();
        if let Some(square) = next.squares.get_mut(pos) {
            *square = Square::Occupied(player);
        }
        next
    }

    /// Compact nine-character form, `.` for empty squares.
    pub fn to_compact(&self) -> String {
        self.squares.iter().map(|s| s.compact()).collect()
    }
}

/// Renders the board as a 3x3 grid. Empty squares show their index so a
/// terminal user can see what to type.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(player) => write!(f, "{}", player.mark())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact form. Whitespace is ignored; `.`, `-` and `_` mark
/// empty squares; `X` and `O` are case-insensitive.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(Self::CELLS);
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let square = match c {
                '.' | '-' | '_' => Square::Empty,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character {:?}",
                        other
                    )));
                }
            };
            squares.push(square);
        }

        let len = squares.len();
        <[Square; Self::CELLS]>::try_from(squares)
            .map(|squares| Self { squares })
            .map_err(|_| BoardParseError::new(format!("Expected 9 cells, found {}", len)))
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_compact()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
