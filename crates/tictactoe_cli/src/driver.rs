//! Line-oriented game loop.
//!
//! The driver is the presentation layer: it turns text commands into
//! session actions and prints the board after each one. It is generic over
//! its input and output so tests can run it in memory.

use std::io::{self, BufRead, Write};
use tictactoe_core::{AuditSink, BoardView, GameSession, Position, status_message, validate_move};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  0-8 or a position name (e.g. center, top-left)  place your mark
  restart                                         start a new game
  board                                           show the board again
  help                                            show this message
  quit                                            leave";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Select a cell by raw index. Out-of-range indices are passed through
    /// and ignored by the session.
    Cell(usize),
    /// Start over.
    Restart,
    /// Redraw the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Input::Cell(index);
        }
        match line.to_ascii_lowercase().as_str() {
            "restart" | "r" | "new" => Input::Restart,
            "board" | "b" => Input::Board,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => match Position::from_label_or_number(line) {
                Some(pos) => Input::Cell(pos.to_index()),
                None => Input::Unknown(line.to_string()),
            },
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Drives one [`GameSession`] from text commands.
#[derive(Debug)]
pub struct Driver<S: AuditSink> {
    session: GameSession<S>,
    show_cell_labels: bool,
}

impl<S: AuditSink> Driver<S> {
    /// Wraps a session.
    pub fn new(session: GameSession<S>, show_cell_labels: bool) -> Self {
        Self {
            session,
            show_cell_labels,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Ends the driver, handing back its session.
    pub fn into_session(self) -> GameSession<S> {
        self.session
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        self.render(&mut out)?;
        for line in input.lines() {
            let line = line?;
            if self.handle(Input::parse(&line), &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    /// Applies one command and writes the response.
    #[instrument(skip(self, out))]
    pub fn handle<W: Write>(&mut self, input: Input, out: &mut W) -> io::Result<Flow> {
        match input {
            Input::Cell(index) => {
                let board = self.session.current_board();
                let refusal = validate_move(board, index, self.session.is_game_over()).err();
                if !self.session.select_cell(index) {
                    debug!(index, ?refusal, "Selection ignored");
                    if let Some(reason) = refusal {
                        writeln!(out, "{}", reason)?;
                    }
                }
                self.render(out)?;
            }
            Input::Restart => {
                self.session.restart();
                self.render(out)?;
            }
            Input::Board => self.render(out)?,
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                self.write_open_cells(out)?;
            }
            Input::Quit => return Ok(Flow::Quit),
            Input::Empty => {}
            Input::Unknown(text) => {
                writeln!(out, "Unrecognized command {:?}; type \"help\"", text)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Lists the cells still open for play.
    fn write_open_cells<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.session.is_game_over() {
            return writeln!(out, "No open cells; type \"restart\" to play again");
        }
        let open: Vec<String> = Position::valid_moves(self.session.current_board())
            .into_iter()
            .map(|pos| format!("{} ({})", pos.to_index(), pos.label().to_lowercase()))
            .collect();
        writeln!(out, "Open cells: {}", open.join(", "))
    }

    /// Writes the board and the status line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.session.current_board())?;
        if self.show_cell_labels {
            let view = BoardView::of(self.session.state());
            writeln!(out, "{}:", view.label())?;
            for cell in view.cells() {
                writeln!(out, "  {}", cell.label())?;
            }
        }
        writeln!(out, "{}", status_message(self.session.state()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(Input::parse("4"), Input::Cell(4));
        assert_eq!(Input::parse(" 12 "), Input::Cell(12));
        assert_eq!(Input::parse("Center"), Input::Cell(4));
        assert_eq!(Input::parse("bottom-right"), Input::Cell(8));
        assert_eq!(Input::parse("RESTART"), Input::Restart);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse(""), Input::Empty);
        assert_eq!(Input::parse("-1"), Input::Unknown("-1".to_string()));
        assert_eq!(Input::parse("banana"), Input::Unknown("banana".to_string()));
    }
}
